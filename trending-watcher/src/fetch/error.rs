//! Document fetch error types.

use thiserror::Error;

/// Errors that can occur while retrieving a remote document.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection, body read).
    #[error("Could not retrieve document: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("Could not retrieve document: HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The document URL could not be built.
    #[error("Invalid document URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error.to_string())
    }
}
