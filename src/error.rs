//! Lookup errors

use reqwest::StatusCode;

/// A failed weather lookup.
///
/// All variants are the same failure as far as the UI is concerned; they only
/// make the log line more useful.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("weather API answered {0}")]
    Status(StatusCode),
    #[error("malformed weather payload: {0}")]
    Decode(#[source] reqwest::Error),
}
