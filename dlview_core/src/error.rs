use thiserror::Error;

/// Errors from loading a `PresentationConfig` from disk.
///
/// Nothing else in this crate can fail: formatting and color mapping are
/// total, and an unsupported locale falls back to `en` silently.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
