//! Runner error types.

use crate::fetch::FetchError;
use crate::issues::IssueError;
use crate::templates::TemplateError;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Issue tracker errors outside the per-issue boundary.
    #[error(transparent)]
    Issue(#[from] IssueError),

    /// HTTP client or document URL errors.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Failure notice rendering errors.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Trending scan errors.
    #[error(transparent)]
    Trending(#[from] crate::trending::TrendingError),
}

/// Errors raised while reviewing a single issue.
///
/// These are caught at the per-issue boundary and turned into a failure
/// notice on the issue.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    /// The documentation page could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The review comment could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The review comment or label could not be written.
    #[error(transparent)]
    Issue(#[from] IssueError),
}
