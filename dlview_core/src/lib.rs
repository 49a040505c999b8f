pub mod buttons;
pub mod color;
pub mod config;
pub mod dialog;
pub mod error;
pub mod headers;
pub mod locale;
pub mod status;
pub mod types;

pub use buttons::ButtonId;
pub use color::{color_for, ColorScheme, ProgressColor};
pub use config::{ErrorTextPolicy, PresentationConfig};
pub use error::ConfigError;
pub use locale::{select_locale, Locale, LocaleTable};
pub use status::feed::StatusFeed;
pub use status::format::{format_status, StatusStyle};
pub use status::frame::StatusFrame;
pub use status::observer::StatusObserver;
pub use types::{TransferMetrics, TransferState, TransferTick};
