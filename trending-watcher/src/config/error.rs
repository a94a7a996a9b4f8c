//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building the watcher configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse settings in '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in settings.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// Missing required file.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },

    /// Hosting repository identifier is not `owner/repo`.
    #[error("Invalid repository identifier '{value}': expected 'owner/repo'")]
    InvalidRepository { value: String },

    /// Hosting repository was neither passed nor set in the environment.
    #[error("Repository not configured; pass --repository or set GITHUB_REPOSITORY")]
    MissingRepository,

    /// No GitHub token was passed or set in the environment.
    #[error("GitHub token not configured; pass --token or set GITHUB_TOKEN")]
    MissingToken,
}
