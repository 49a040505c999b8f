//! The one place where locale choice crosses into the network-facing
//! collaborator: the `Accept-Language` header handed to the transfer
//! engine.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};

use crate::locale::LocaleTable;

/// Raw newline-terminated header line, for engines that splice header
/// text into the request themselves.
pub fn accept_language_line(table: &LocaleTable) -> String {
    format!("Accept-Language: {}\n", table.accept_language)
}

/// Typed header map for a reqwest-based transfer engine.
pub fn accept_language_headers(table: &LocaleTable) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(table.accept_language));
    headers
}
