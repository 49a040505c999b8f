//! Status-line formatting.
//!
//! Pure functions from (state, metrics, locale table, style) to the text
//! shown in the status bar. No I/O, no retained state, total for any
//! non-negative inputs.

use serde::{Deserialize, Serialize};

use crate::locale::LocaleTable;
use crate::types::{TransferMetrics, TransferState};

const BYTES_PER_MIB: u64 = 1024 * 1024;
const BYTES_PER_KIB: u64 = 1024;

/// Wide enough for a four-digit megabyte count at a five-digit rate.
pub const DEFAULT_STATUS_WIDTH: usize = 46;

/// Rendering style for status lines.
///
/// `min_width` pads every line with trailing spaces to a stable visual
/// width so a fixed-width status label does not jiggle as the numbers
/// change length. Longer lines are left intact, never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusStyle {
    pub min_width: usize,
}

impl Default for StatusStyle {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_STATUS_WIDTH,
        }
    }
}

/// Render the status line for one tick.
///
/// `Ready` and `Complete` use the locale's fixed strings; metrics are
/// ignored. `Downloading` interpolates megabytes received (one truncated
/// decimal digit) and the rate in whole KB/s (truncated). `Error` renders
/// the locale's fixed error string — callers that want the
/// reuse-last-text policy instead go through `StatusFeed`, which owns the
/// necessary memory of the previous line.
pub fn format_status(
    state: TransferState,
    metrics: &TransferMetrics,
    table: &LocaleTable,
    style: &StatusStyle,
) -> String {
    let line = match state {
        TransferState::Ready => table.status_ready.to_string(),
        TransferState::Complete => table.status_complete.to_string(),
        TransferState::Error => table.status_error.to_string(),
        TransferState::Downloading => downloading_line(metrics, table),
    };
    pad(line, style.min_width)
}

fn downloading_line(metrics: &TransferMetrics, table: &LocaleTable) -> String {
    let whole_mb = metrics.bytes_received / BYTES_PER_MIB;
    // Truncated tenths of a megabyte. The remainder is < 2^20 so the
    // multiply cannot overflow even for u64::MAX byte counts.
    let tenths_mb = (metrics.bytes_received % BYTES_PER_MIB) * 10 / BYTES_PER_MIB;
    let kb_per_sec = metrics.bytes_per_second / BYTES_PER_KIB;

    format!(
        "{}{}.{}{}{}{}",
        table.downloading_prefix,
        whole_mb,
        tenths_mb,
        table.downloading_mid,
        kb_per_sec,
        table.downloading_suffix
    )
}

fn pad(mut line: String, min_width: usize) -> String {
    let len = line.chars().count();
    if len < min_width {
        line.extend(std::iter::repeat(' ').take(min_width - len));
    }
    line
}
