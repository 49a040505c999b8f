//! Presentation configuration.
//!
//! Everything the original dialog hardcoded or kept as an implicit
//! global is an explicit field here: the locale tag, the status-line
//! width, the error-text and color policies, the fallback save
//! directory, and the launcher coordination tag.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::ColorScheme;
use crate::error::ConfigError;
use crate::locale::{select_locale, LocaleTable};
use crate::status::format::StatusStyle;

/// Fallback destination when the user has not chosen one.
pub const DEFAULT_SAVE_DIR: &str = "Downloads";

/// Tag a launcher uses to find an already-running instance. Passed
/// around explicitly; nothing in this crate reads it from global state.
pub const DEFAULT_INSTANCE_TAG: &str = "DL";

/// What the status line shows while the engine reports `Error`. The
/// error color is applied either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorTextPolicy {
    /// Show the locale's fixed error string.
    #[default]
    Fixed,
    /// Keep the last Ready/Downloading line and switch only the color.
    ReuseLast,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Two-letter locale tag; unsupported tags resolve to `en`.
    pub locale: String,
    pub status: StatusStyle,
    pub error_text: ErrorTextPolicy,
    pub colors: ColorScheme,
    pub save_dir: PathBuf,
    pub instance_tag: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            status: StatusStyle::default(),
            error_text: ErrorTextPolicy::default(),
            colors: ColorScheme::default(),
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            instance_tag: DEFAULT_INSTANCE_TAG.to_string(),
        }
    }
}

impl PresentationConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Resolve the active locale table for this config.
    pub fn table(&self) -> &'static LocaleTable {
        select_locale(&self.locale)
    }
}
