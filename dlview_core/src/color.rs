//! Progress-bar color mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::TransferState;

/// An RGB color as a packed `0xRRGGBB` integer, the form the UI shell
/// consumes directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressColor(u32);

impl ProgressColor {
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    pub const fn rgb(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for ProgressColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

pub const ERROR_COLOR: ProgressColor = ProgressColor::new(0xF55353);
pub const DOWNLOADING_COLOR: ProgressColor = ProgressColor::new(0x297FFD);
pub const COMPLETE_COLOR: ProgressColor = ProgressColor::new(0x74DA00);

/// Palette for the progress bar.
///
/// `ready` is optional: when unset, the Ready state shares the
/// downloading color. Whether Ready deserves its own color is a policy
/// choice left to the embedding shell, so it is a config knob here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub error: ProgressColor,
    pub downloading: ProgressColor,
    pub complete: ProgressColor,
    pub ready: Option<ProgressColor>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            error: ERROR_COLOR,
            downloading: DOWNLOADING_COLOR,
            complete: COMPLETE_COLOR,
            ready: None,
        }
    }
}

/// Pure state → color mapping, total over all four states.
pub fn color_for(state: TransferState, scheme: &ColorScheme) -> ProgressColor {
    match state {
        TransferState::Error => scheme.error,
        TransferState::Downloading => scheme.downloading,
        TransferState::Complete => scheme.complete,
        TransferState::Ready => scheme.ready.unwrap_or(scheme.downloading),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_matches_contract() {
        let scheme = ColorScheme::default();
        assert_eq!(color_for(TransferState::Error, &scheme).rgb(), 0xF55353);
        assert_eq!(color_for(TransferState::Complete, &scheme).rgb(), 0x74DA00);
        assert_eq!(
            color_for(TransferState::Downloading, &scheme).rgb(),
            0x297FFD
        );
    }

    #[test]
    fn ready_shares_downloading_color_by_default() {
        let scheme = ColorScheme::default();
        assert_eq!(
            color_for(TransferState::Ready, &scheme),
            color_for(TransferState::Downloading, &scheme)
        );
    }

    #[test]
    fn ready_color_can_be_overridden() {
        let scheme = ColorScheme {
            ready: Some(ProgressColor::new(0xAAAAAA)),
            ..ColorScheme::default()
        };
        assert_eq!(color_for(TransferState::Ready, &scheme).rgb(), 0xAAAAAA);
    }

    #[test]
    fn channel_accessors() {
        let c = ProgressColor::new(0xF55353);
        assert_eq!((c.red(), c.green(), c.blue()), (0xF5, 0x53, 0x53));
        assert_eq!(c.to_string(), "#F55353");
    }
}
