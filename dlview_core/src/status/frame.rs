use serde::Serialize;

use crate::color::ProgressColor;
use crate::types::TransferState;

/// One rendered status update: everything the UI shell needs to repaint
/// the status label and the progress bar.
#[derive(Debug, Clone, Serialize)]
pub struct StatusFrame {
    pub state: TransferState,
    /// Status line, padded to the configured width.
    pub text: String,
    pub color: ProgressColor,
}
