//! Watcher configuration.
//!
//! Settings come from an optional `watcher.toml`; anything not set there
//! falls back to the defaults the watcher has always used. The hosting
//! repository and token come from the command line or environment.

mod error;
mod host;
mod settings;

pub use error::ConfigError;
pub use host::{HostRepository, REPOSITORY_ENV};
pub use settings::WatcherSettings;

use std::path::Path;
use tracing::info;
use url::Url;

/// Loads settings from `path`, or returns defaults when no path is given.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, not valid TOML, or
/// fails validation.
pub fn load_settings(path: Option<&Path>) -> Result<WatcherSettings, ConfigError> {
    let Some(path) = path else {
        return Ok(WatcherSettings::default());
    };

    info!(path = %path.display(), "Loading settings");
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    let settings: WatcherSettings =
        toml::from_str(&contents).map_err(|source| ConfigError::TomlError {
            path: path.display().to_string(),
            source,
        })?;

    validate(&settings, path)?;
    Ok(settings)
}

fn validate(settings: &WatcherSettings, path: &Path) -> Result<(), ConfigError> {
    let error = |message: String| ConfigError::ValidationError {
        path: path.display().to_string(),
        message,
    };

    for (key, value) in [
        ("docs-base-url", &settings.docs_base_url),
        ("trending-url", &settings.trending_url),
    ] {
        Url::parse(value).map_err(|e| error(format!("{key} is not a valid URL: {e}")))?;
    }

    for (key, value) in [
        ("trigger-label", &settings.trigger_label),
        ("prerequisite-label", &settings.prerequisite_label),
        ("reviewed-label", &settings.reviewed_label),
    ] {
        if value.trim().is_empty() {
            return Err(error(format!("{key} must not be empty")));
        }
    }

    if settings.max_attempts == 0 {
        return Err(error("max-attempts must be at least 1".to_string()));
    }

    Ok(())
}
