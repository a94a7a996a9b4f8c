//! Run summary types.

use super::result::ReviewOutcome;

/// Summary of a complete review run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of eligible issues found.
    pub issues_found: usize,

    /// Number of issues that received a review comment.
    pub reviewed: usize,

    /// Number of issues that received a failure notice.
    pub failed: usize,

    /// Number of issues skipped (e.g., malformed titles).
    pub skipped: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a per-issue outcome.
    pub fn record(&mut self, outcome: &ReviewOutcome) {
        match outcome {
            ReviewOutcome::Reviewed { .. } => self.reviewed += 1,
            ReviewOutcome::Failed { .. } => self.failed += 1,
            ReviewOutcome::Skipped { .. } => self.skipped += 1,
        }
    }

    /// Issues that received a comment of either kind.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.reviewed + self.failed
    }

    /// Returns true if any failure notice was posted.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_outcomes() {
        let mut summary = RunSummary::new(false);
        summary.issues_found = 3;

        summary.record(&ReviewOutcome::Reviewed {
            issue: 1,
            repository: "octo/widgets".to_string(),
        });
        summary.record(&ReviewOutcome::Failed {
            issue: 2,
            repository: "octo/gadgets".to_string(),
            error: "HTTP 503".to_string(),
        });
        summary.record(&ReviewOutcome::Skipped {
            issue: 3,
            reason: "malformed title".to_string(),
        });

        assert_eq!(summary.reviewed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.processed(), 2);
        assert!(summary.has_failures());
    }
}
