//! Trending repository scan.
//!
//! Reads the GitHub trending page, opens one issue per repository that has
//! not been seen before, and records it in the checked list. The review run
//! later picks these issues up once they carry the prerequisite label.

mod checked;
mod error;
mod page;

pub use checked::{
    cleanup_by_count, cleanup_checked, load_checked, remove_duplicates, save_checked,
    CleanupReport, DEFAULT_CHECKED_PATH, MAX_CHECKED,
};
pub use error::TrendingError;
pub use page::parse_trending_page;

use crate::config::WatcherSettings;
use crate::fetch::{get_with_retry, PageSource};
use crate::issues::IssueTracker;
use crate::templates::{generate_issue_body, generate_issue_title};
use std::collections::HashSet;
use std::path::Path;
use tracing::{error, info, info_span, Instrument};

/// Outcome of a trending scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Repositories listed on the trending page.
    pub trending: usize,
    /// Repositories not previously checked.
    pub new_repositories: Vec<String>,
    /// Issues opened successfully.
    pub issues_created: usize,
    /// Issues that could not be opened.
    pub issues_failed: usize,
}

/// Scans the trending page and opens issues for unseen repositories.
///
/// Every new repository is recorded as checked, even if its issue could not
/// be opened. In dry-run mode nothing is created and the list is not saved.
///
/// # Errors
///
/// Returns an error if the trending page cannot be fetched or the checked
/// list cannot be read or written.
pub async fn scan_trending<T, S>(
    tracker: &T,
    source: &S,
    settings: &WatcherSettings,
    checked_path: &Path,
    dry_run: bool,
) -> Result<ScanReport, TrendingError>
where
    T: IssueTracker + ?Sized,
    S: PageSource + ?Sized,
{
    let span = info_span!("scan_trending", url = %settings.trending_url);

    async {
        let html = get_with_retry(source, &settings.trending_url, settings.retry_policy()).await?;
        let trending = parse_trending_page(&html);
        info!(count = trending.len(), "Found trending repositories");

        let mut checked = load_checked(checked_path)?;
        let new_repositories = unseen(&trending, &checked);
        info!(count = new_repositories.len(), "New trending repositories");

        let mut report = ScanReport {
            trending: trending.len(),
            new_repositories: new_repositories.clone(),
            ..ScanReport::default()
        };

        if dry_run {
            for repo in &new_repositories {
                info!(repo = %repo, "[DRY RUN] Would open issue");
            }
            return Ok(report);
        }

        let labels = [settings.trigger_label.clone()];
        for repo in new_repositories {
            let title = generate_issue_title(&settings.title_prefix, &repo);
            let body = generate_issue_body(&repo);
            match tracker.create_issue(&title, &body, &labels).await {
                Ok(number) => {
                    info!(repo = %repo, issue_number = number, "Opened trending issue");
                    report.issues_created += 1;
                }
                Err(e) => {
                    error!(repo = %repo, error = %e, "Failed to open trending issue");
                    report.issues_failed += 1;
                }
            }
            checked.push(repo);
        }

        save_checked(checked_path, &checked)?;
        Ok(report)
    }
    .instrument(span)
    .await
}

/// Trending repositories absent from `checked`, in page order without repeats.
fn unseen(trending: &[String], checked: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = checked.iter().map(String::as_str).collect();
    trending
        .iter()
        .filter(|repo| seen.insert(repo.as_str()))
        .cloned()
        .collect()
}
