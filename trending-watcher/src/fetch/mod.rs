//! Document retrieval with bounded retry.
//!
//! Documents are fetched through a [`PageSource`]. Failed attempts are retried
//! with exponential backoff (2s, 4s, 8s, ... by default). There is no jitter
//! and no state is carried between runs.

mod error;
mod source;

pub use error::FetchError;
pub use source::{HttpPageSource, PageSource, DEFAULT_USER_AGENT};

use crate::issues::TargetRepository;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Retry behaviour for document fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero behaves like one.
    pub max_attempts: u32,
    /// Delay after the first failed attempt; doubled after each further one.
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after the zero-based `attempt` failed.
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Fetches documentation pages for target repositories.
pub struct DocumentFetcher<S> {
    source: S,
    base_url: Url,
    policy: RetryPolicy,
}

impl<S: PageSource> DocumentFetcher<S> {
    /// Creates a fetcher for documentation hosted under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if `base_url` is not an absolute
    /// URL that can carry path segments.
    pub fn new(source: S, base_url: &str, policy: RetryPolicy) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url).map_err(|e| FetchError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl {
                url: base_url.to_string(),
                message: "URL cannot carry path segments".to_string(),
            });
        }
        Ok(Self {
            source,
            base_url,
            policy,
        })
    }

    /// Returns the underlying page source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the retry policy in use.
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Builds the documentation URL for `target`: `<base>/<owner>/<name>`.
    #[must_use]
    pub fn document_url(&self, target: &TargetRepository) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(&target.owner)
                .push(&target.name);
        }
        url
    }

    /// Fetches the documentation page for `target`.
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt once all attempts have failed.
    pub async fn fetch(&self, target: &TargetRepository) -> Result<String, FetchError> {
        let url = self.document_url(target);
        self.fetch_url(url.as_str()).await
    }

    /// Fetches an arbitrary URL with the configured retry policy.
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt once all attempts have failed.
    pub async fn fetch_url(&self, url: &str) -> Result<String, FetchError> {
        get_with_retry(&self.source, url, self.policy).await
    }
}

/// Performs `source.get(url)` up to `policy.max_attempts` times.
///
/// # Errors
///
/// Returns the last attempt's error unchanged.
pub async fn get_with_retry<S>(source: &S, url: &str, policy: RetryPolicy) -> Result<String, FetchError>
where
    S: PageSource + ?Sized,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match source.get(url).await {
            Ok(body) => {
                debug!(url, attempt = attempt + 1, bytes = body.len(), "Fetched document");
                return Ok(body);
            }
            Err(error) if attempt + 1 < max_attempts => {
                let delay = policy.backoff_for(attempt);
                warn!(
                    url,
                    attempt = attempt + 1,
                    max_attempts,
                    delay_secs = delay.as_secs(),
                    error = %error,
                    "Fetch failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
