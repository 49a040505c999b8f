use async_trait::async_trait;

use super::frame::StatusFrame;

/// Trait for anything that wants rendered status updates.
///
/// The `StatusFeed` calls these methods on all registered observers
/// after rendering raw `TransferTick`s into `StatusFrame`s.
///
/// Lifecycle:
/// - `on_frame` is called once per tick with the rendered frame.
/// - `on_complete` is called once when the feed channel closes cleanly
///   (all senders dropped, no error received).
/// - `on_error` is called once when an `Err(String)` arrives on the
///   channel; the feed stops afterwards.
#[async_trait]
pub trait StatusObserver: Send + Sync + 'static {
    async fn on_frame(&self, frame: &StatusFrame);

    async fn on_complete(&self, frame: &StatusFrame);

    async fn on_error(&self, error: &str);
}
