//! Trending scan error types.

use crate::fetch::FetchError;
use thiserror::Error;

/// Errors that can occur while scanning trending repositories or
/// maintaining the checked list.
#[derive(Debug, Error)]
pub enum TrendingError {
    /// Failed to read or write the checked list.
    #[error("Failed to access checked list '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The checked list could not be (de)serialized.
    #[error("Invalid checked list '{path}': {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The trending page could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
