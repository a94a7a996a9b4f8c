//! Issue information as read from the tracker.

use std::collections::BTreeSet;

/// An open issue in the hosting repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedIssue {
    /// Issue number.
    pub number: u64,

    /// Issue title, e.g. `Check trending repo: owner/name`.
    pub title: String,

    /// Names of the labels currently on the issue.
    pub labels: BTreeSet<String>,
}

impl TrackedIssue {
    /// Creates an issue record from its number, title and label names.
    pub fn new<I, L>(number: u64, title: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            number,
            title: title.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the issue carries `label`.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }
}
