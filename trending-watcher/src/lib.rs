#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod extract;
pub mod fetch;
pub mod issues;
pub mod rate_limit;
pub mod runner;
pub mod summary;
pub mod templates;
pub mod trending;

pub use config::{load_settings, ConfigError, HostRepository, WatcherSettings};
pub use extract::{extract, extract_html, SummaryRecord};
pub use fetch::{
    get_with_retry, DocumentFetcher, FetchError, HttpPageSource, PageSource, RetryPolicy,
};
pub use issues::{
    is_eligible, select_eligible, GitHubTracker, IssueError, IssueTracker, ReviewLabels,
    TargetRepository, TrackedIssue,
};
pub use rate_limit::{check_core_rate_limit, ensure_core_rate_limit, wait_if_needed, RateLimitInfo};
pub use runner::{ReviewError, Runner, RunnerConfig, RunnerError};
pub use summary::{ReviewOutcome, RunSummary};
pub use templates::{
    create_handlebars_registry, generate_issue_body, generate_issue_title, TemplateError,
    TemplateRenderer,
};
pub use trending::{
    cleanup_checked, load_checked, parse_trending_page, save_checked, scan_trending,
    CleanupReport, ScanReport, TrendingError,
};
