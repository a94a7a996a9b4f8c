//! Issue tracker access and the label protocol.
//!
//! Labels act as a small state machine on each trending issue:
//! `trending` marks it, `initial review done` makes it eligible, and
//! `deepwiki reviewed` is added by the review run so it is never processed
//! twice.

mod error;
mod github;
mod target;
mod tracked_issue;

pub use error::IssueError;
pub use github::GitHubTracker;
pub use target::{strip_title_prefix, TargetRepository, DEFAULT_TITLE_PREFIX};
pub use tracked_issue::TrackedIssue;

use async_trait::async_trait;

/// Label set externally on every trending issue.
pub const DEFAULT_TRIGGER_LABEL: &str = "trending";

/// Label that must be present before a review is attempted.
pub const DEFAULT_PREREQUISITE_LABEL: &str = "initial review done";

/// Label added once a review comment (or failure notice) has been posted.
pub const DEFAULT_REVIEWED_LABEL: &str = "deepwiki reviewed";

/// Operations the watcher needs from an issue tracker.
///
/// Writes are fire-and-forget: nothing is read back after a comment or label
/// is created.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Lists all open issues carrying `label`.
    async fn list_open_issues(&self, label: &str) -> Result<Vec<TrackedIssue>, IssueError>;

    /// Posts a comment on an issue.
    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<(), IssueError>;

    /// Adds labels to an issue.
    async fn add_labels(&self, issue_number: u64, labels: &[String]) -> Result<(), IssueError>;

    /// Opens a new issue, returning its number.
    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<u64, IssueError>;
}

/// Names of the labels that drive the review protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewLabels {
    /// Marks an issue as a trending-repository issue.
    pub trigger: String,
    /// Must be present for an issue to be reviewed.
    pub prerequisite: String,
    /// Added after review; its presence excludes the issue.
    pub reviewed: String,
}

impl Default for ReviewLabels {
    fn default() -> Self {
        Self {
            trigger: DEFAULT_TRIGGER_LABEL.to_string(),
            prerequisite: DEFAULT_PREREQUISITE_LABEL.to_string(),
            reviewed: DEFAULT_REVIEWED_LABEL.to_string(),
        }
    }
}

/// Returns true if `issue` should be reviewed in this run.
#[must_use]
pub fn is_eligible(issue: &TrackedIssue, labels: &ReviewLabels) -> bool {
    issue.has_label(&labels.trigger)
        && issue.has_label(&labels.prerequisite)
        && !issue.has_label(&labels.reviewed)
}

/// Keeps the eligible issues, preserving their order.
#[must_use]
pub fn select_eligible(issues: Vec<TrackedIssue>, labels: &ReviewLabels) -> Vec<TrackedIssue> {
    issues
        .into_iter()
        .filter(|issue| is_eligible(issue, labels))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(number: u64, labels: &[&str]) -> TrackedIssue {
        TrackedIssue::new(
            number,
            "Check trending repo: octo/widgets",
            labels.iter().copied(),
        )
    }

    #[test]
    fn requires_initial_review() {
        let labels = ReviewLabels::default();
        assert!(!is_eligible(&issue(1, &["trending"]), &labels));
        assert!(!is_eligible(
            &issue(2, &["trending", "bug", "help wanted"]),
            &labels
        ));
        assert!(is_eligible(
            &issue(3, &["trending", "initial review done"]),
            &labels
        ));
    }

    #[test]
    fn excludes_already_reviewed() {
        let labels = ReviewLabels::default();
        assert!(!is_eligible(
            &issue(1, &["trending", "initial review done", "deepwiki reviewed"]),
            &labels
        ));
    }

    #[test]
    fn requires_trigger_label() {
        let labels = ReviewLabels::default();
        assert!(!is_eligible(&issue(1, &["initial review done"]), &labels));
    }

    #[test]
    fn select_preserves_order() {
        let labels = ReviewLabels::default();
        let selected = select_eligible(
            vec![
                issue(7, &["trending", "initial review done"]),
                issue(3, &["trending"]),
                issue(5, &["trending", "initial review done"]),
            ],
            &labels,
        );
        let numbers: Vec<u64> = selected.iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![7, 5]);
    }
}
