//! [`IssueTracker`] implementation backed by the GitHub REST API.

use super::{IssueError, IssueTracker, TrackedIssue};
use crate::config::HostRepository;
use crate::rate_limit::ensure_core_rate_limit;
use async_trait::async_trait;
use octocrab::models::issues::Issue;
use octocrab::{params, Octocrab};
use tracing::debug;

/// Issues listed per page.
const RESULTS_PER_PAGE: u8 = 100;

/// Issue tracker for the repository hosting the trending issues.
#[derive(Debug, Clone)]
pub struct GitHubTracker {
    octocrab: Octocrab,
    host: HostRepository,
}

impl GitHubTracker {
    /// Creates a tracker operating on `host`.
    pub fn new(octocrab: Octocrab, host: HostRepository) -> Self {
        Self { octocrab, host }
    }

    /// Builds an authenticated client from a personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed.
    pub fn with_token(token: &str, host: HostRepository) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self::new(octocrab, host))
    }

    /// Returns the hosting repository.
    pub fn host(&self) -> &HostRepository {
        &self.host
    }
}

#[async_trait]
impl IssueTracker for GitHubTracker {
    async fn list_open_issues(&self, label: &str) -> Result<Vec<TrackedIssue>, IssueError> {
        ensure_core_rate_limit(&self.octocrab).await?;

        let labels = [label.to_string()];
        let mut page = self
            .octocrab
            .issues(&self.host.owner, &self.host.name)
            .list()
            .state(params::State::Open)
            .labels(&labels)
            .per_page(RESULTS_PER_PAGE)
            .send()
            .await?;

        let mut issues: Vec<TrackedIssue> = page.items.iter().map(to_tracked_issue).collect();

        while let Some(next_page) = self.octocrab.get_page::<Issue>(&page.next).await? {
            issues.extend(next_page.items.iter().map(to_tracked_issue));
            page = next_page;
        }

        debug!(label, count = issues.len(), "Listed open issues");
        Ok(issues)
    }

    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<(), IssueError> {
        ensure_core_rate_limit(&self.octocrab).await?;
        self.octocrab
            .issues(&self.host.owner, &self.host.name)
            .create_comment(issue_number, body)
            .await?;
        Ok(())
    }

    async fn add_labels(&self, issue_number: u64, labels: &[String]) -> Result<(), IssueError> {
        ensure_core_rate_limit(&self.octocrab).await?;
        self.octocrab
            .issues(&self.host.owner, &self.host.name)
            .add_labels(issue_number, labels)
            .await?;
        Ok(())
    }

    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<u64, IssueError> {
        ensure_core_rate_limit(&self.octocrab).await?;
        let issue = self
            .octocrab
            .issues(&self.host.owner, &self.host.name)
            .create(title)
            .body(body)
            .labels(labels.to_vec())
            .send()
            .await?;
        Ok(issue.number)
    }
}

fn to_tracked_issue(issue: &Issue) -> TrackedIssue {
    TrackedIssue::new(
        issue.number,
        issue.title.clone(),
        issue.labels.iter().map(|label| label.name.clone()),
    )
}
