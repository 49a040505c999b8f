use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};

use dlview_core::status::frame::StatusFrame;
use dlview_core::status::observer::StatusObserver;

/// Renders status frames on a single indicatif spinner line — the
/// terminal stand-in for the dialog's status label. The frame color is
/// shown as a hex swatch since the terminal has no progress-bar fill.
pub struct TerminalStatusObserver {
    bar: ProgressBar,
}

impl TerminalStatusObserver {
    pub fn new() -> Self {
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap();
        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        Self { bar }
    }
}

#[async_trait]
impl StatusObserver for TerminalStatusObserver {
    async fn on_frame(&self, frame: &StatusFrame) {
        self.bar
            .set_message(format!("{} {}", frame.text, frame.color));
        self.bar.tick();
    }

    async fn on_complete(&self, frame: &StatusFrame) {
        self.bar
            .finish_with_message(format!("{} {}", frame.text.trim_end(), frame.color));
    }

    async fn on_error(&self, error: &str) {
        self.bar.abandon_with_message(format!("Error: {}", error));
    }
}
