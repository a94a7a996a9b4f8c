//! Runner configuration.

use crate::config::{HostRepository, WatcherSettings};

/// Configuration for a watcher run, built once at startup.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Repository hosting the trending issues.
    host: HostRepository,
    /// GitHub token used for API calls.
    token: String,
    /// Tunable settings.
    settings: WatcherSettings,
    /// Whether to preview comments and issues without writing them.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run with default settings.
    pub fn new(host: HostRepository, token: String, dry_run: bool) -> Self {
        Self {
            host,
            token,
            settings: WatcherSettings::default(),
            dry_run,
        }
    }

    /// Replaces the settings.
    pub fn with_settings(mut self, settings: WatcherSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the hosting repository.
    pub fn host(&self) -> &HostRepository {
        &self.host
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the settings.
    pub fn settings(&self) -> &WatcherSettings {
        &self.settings
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
