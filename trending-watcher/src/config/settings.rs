//! Settings deserialized from `watcher.toml`.

use crate::fetch::{RetryPolicy, DEFAULT_USER_AGENT};
use crate::issues::{
    ReviewLabels, DEFAULT_PREREQUISITE_LABEL, DEFAULT_REVIEWED_LABEL, DEFAULT_TITLE_PREFIX,
    DEFAULT_TRIGGER_LABEL,
};
use serde::Deserialize;
use std::time::Duration;

/// Tunable settings of the watcher. Every key is optional.
///
/// ```toml
/// docs-base-url = "https://deepwiki.com"
/// max-attempts = 3
/// initial-backoff-secs = 2
/// issue-delay-secs = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct WatcherSettings {
    /// Base URL of the documentation site.
    pub docs_base_url: String,

    /// Prefix of trending issue titles, before `owner/name`.
    pub title_prefix: String,

    /// Label on every trending issue.
    pub trigger_label: String,

    /// Label required before reviewing.
    pub prerequisite_label: String,

    /// Label added after reviewing.
    pub reviewed_label: String,

    /// Fetch attempts per document.
    pub max_attempts: u32,

    /// Backoff after the first failed fetch, doubled per retry.
    pub initial_backoff_secs: u64,

    /// Pause between issues.
    pub issue_delay_secs: u64,

    /// `User-Agent` sent to remote sites.
    pub user_agent: String,

    /// Page listing trending repositories.
    pub trending_url: String,
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            docs_base_url: "https://deepwiki.com".to_string(),
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
            trigger_label: DEFAULT_TRIGGER_LABEL.to_string(),
            prerequisite_label: DEFAULT_PREREQUISITE_LABEL.to_string(),
            reviewed_label: DEFAULT_REVIEWED_LABEL.to_string(),
            max_attempts: 3,
            initial_backoff_secs: 2,
            issue_delay_secs: 2,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            trending_url: "https://github.com/trending".to_string(),
        }
    }
}

impl WatcherSettings {
    /// Retry policy for document fetches.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            initial_backoff: Duration::from_secs(self.initial_backoff_secs),
        }
    }

    /// Pause inserted after each processed issue.
    #[must_use]
    pub fn issue_delay(&self) -> Duration {
        Duration::from_secs(self.issue_delay_secs)
    }

    /// Label names driving the review protocol.
    #[must_use]
    pub fn review_labels(&self) -> ReviewLabels {
        ReviewLabels {
            trigger: self.trigger_label.clone(),
            prerequisite: self.prerequisite_label.clone(),
            reviewed: self.reviewed_label.clone(),
        }
    }
}
