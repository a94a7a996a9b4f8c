//! Transports that return HTML bodies for URLs.

use super::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Identifies the watcher to remote sites.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; TrendingWatcher/1.0; +https://github.com/trending-watcher)";

/// A source of HTML documents.
///
/// Implementations perform a single attempt; retries are layered on top by
/// [`DocumentFetcher`](super::DocumentFetcher).
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Retrieves the body at `url`, failing on transport errors and
    /// non-success statuses.
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// [`PageSource`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    /// Creates a source that sends `user_agent` with every request.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] if the HTTP client cannot be built.
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "Requesting document");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
