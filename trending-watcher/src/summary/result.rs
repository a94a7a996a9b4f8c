//! Per-issue review outcomes.

/// Result of processing a single eligible issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// A review comment was posted and the issue labelled.
    Reviewed {
        /// Issue number.
        issue: u64,
        /// Target repository in `owner/name` form.
        repository: String,
    },

    /// A failure notice was posted and the issue labelled.
    Failed {
        /// Issue number.
        issue: u64,
        /// Target repository in `owner/name` form.
        repository: String,
        /// Error message included in the notice.
        error: String,
    },

    /// The issue was left untouched.
    Skipped {
        /// Issue number.
        issue: u64,
        /// Reason for skipping.
        reason: String,
    },
}

impl ReviewOutcome {
    /// Issue the outcome refers to.
    #[must_use]
    pub fn issue(&self) -> u64 {
        match self {
            Self::Reviewed { issue, .. } | Self::Failed { issue, .. } | Self::Skipped { issue, .. } => {
                *issue
            }
        }
    }
}
