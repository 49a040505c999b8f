use tokio::sync::mpsc;

use crate::color::{color_for, ColorScheme};
use crate::config::{ErrorTextPolicy, PresentationConfig};
use crate::locale::LocaleTable;
use crate::types::{TransferMetrics, TransferState, TransferTick};

use super::format::{format_status, StatusStyle};
use super::frame::StatusFrame;
use super::observer::StatusObserver;

/// Consumes `Result<TransferTick, String>` from the progress channel,
/// renders each tick into a `StatusFrame`, and fans out to all
/// registered observers.
///
/// # Lifecycle
///
/// | Channel message        | Observer method called       |
/// |------------------------|------------------------------|
/// | `Ok(TransferTick)`     | `on_frame(&frame)`           |
/// | `Err(String)`          | `on_error(&msg)` then stops  |
/// | Channel closed (no err)| `on_complete(&final_frame)`  |
///
/// The feed remembers the last Ready/Downloading line so the
/// `ErrorTextPolicy::ReuseLast` policy can keep the text on screen and
/// switch only the color when the engine reports an error.
pub struct StatusFeed {
    observers: Vec<Box<dyn StatusObserver>>,
    table: &'static LocaleTable,
    style: StatusStyle,
    scheme: ColorScheme,
    error_text: ErrorTextPolicy,
    last_text: Option<String>,
}

impl StatusFeed {
    pub fn new(config: &PresentationConfig) -> Self {
        Self {
            observers: Vec::new(),
            table: config.table(),
            style: config.status,
            scheme: config.colors,
            error_text: config.error_text,
            last_text: None,
        }
    }

    /// Register an observer. Must be called before `run()`.
    pub fn add_observer(&mut self, observer: Box<dyn StatusObserver>) {
        self.observers.push(observer);
    }

    /// Consume ticks until the channel closes or an error arrives.
    pub async fn run(mut self, mut tick_rx: mpsc::Receiver<Result<TransferTick, String>>) {
        while let Some(msg) = tick_rx.recv().await {
            match msg {
                Ok(tick) => {
                    let frame = self.render(tick);
                    log::trace!("status frame: {:?} {}", frame.state, frame.color);
                    for observer in &self.observers {
                        observer.on_frame(&frame).await;
                    }
                }
                Err(error) => {
                    log::debug!("transfer error on feed channel: {}", error);
                    for observer in &self.observers {
                        observer.on_error(&error).await;
                    }
                    return; // stop processing after error
                }
            }
        }
        // Channel closed cleanly — all senders dropped, no error received
        self.finish().await;
    }

    /// Render a single tick into a frame, honoring the error-text policy.
    fn render(&mut self, tick: TransferTick) -> StatusFrame {
        let text = match (tick.state, self.error_text) {
            (TransferState::Error, ErrorTextPolicy::ReuseLast) => self
                .last_text
                .clone()
                .unwrap_or_else(|| {
                    format_status(tick.state, &tick.metrics, self.table, &self.style)
                }),
            _ => format_status(tick.state, &tick.metrics, self.table, &self.style),
        };

        if matches!(
            tick.state,
            TransferState::Ready | TransferState::Downloading
        ) {
            self.last_text = Some(text.clone());
        }

        StatusFrame {
            state: tick.state,
            text,
            color: color_for(tick.state, &self.scheme),
        }
    }

    /// Finalize: render a Complete frame and notify all observers.
    async fn finish(self) {
        let metrics = TransferMetrics::default();
        let frame = StatusFrame {
            state: TransferState::Complete,
            text: format_status(TransferState::Complete, &metrics, self.table, &self.style),
            color: color_for(TransferState::Complete, &self.scheme),
        };
        for observer in &self.observers {
            observer.on_complete(&frame).await;
        }
    }
}
