//! Orchestrates DeepWiki reviews of trending issues.
//!
//! Issues are processed strictly one after another: list, then for each
//! eligible issue fetch → extract → render → comment → label, followed by a
//! fixed pause. Per-issue failures become a failure notice on the issue;
//! only errors outside that boundary abort the run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::{ReviewError, RunnerError};

use crate::extract::extract_html;
use crate::fetch::{DocumentFetcher, HttpPageSource, PageSource};
use crate::issues::{
    select_eligible, GitHubTracker, IssueError, IssueTracker, TargetRepository, TrackedIssue,
};
use crate::summary::{ReviewOutcome, RunSummary};
use crate::templates::TemplateRenderer;
use crate::trending::{scan_trending, ScanReport};
use std::path::Path;
use tracing::{debug, info, info_span, warn, Instrument};

/// Drives review and scan runs against an issue tracker.
pub struct Runner<T = GitHubTracker, S = HttpPageSource> {
    config: RunnerConfig,
    tracker: T,
    fetcher: DocumentFetcher<S>,
    renderer: TemplateRenderer,
}

impl Runner {
    /// Builds a runner talking to GitHub and the live documentation site.
    ///
    /// # Errors
    ///
    /// Returns an error if the GitHub or HTTP client cannot be created, or
    /// the documentation base URL is invalid.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let tracker = GitHubTracker::with_token(config.token(), config.host().clone())?;
        let source = HttpPageSource::new(&config.settings().user_agent)?;
        Self::with_parts(config, tracker, source)
    }
}

impl<T: IssueTracker, S: PageSource> Runner<T, S> {
    /// Builds a runner from an explicit tracker and page source.
    ///
    /// # Errors
    ///
    /// Returns an error if the documentation base URL is invalid.
    pub fn with_parts(config: RunnerConfig, tracker: T, source: S) -> Result<Self, RunnerError> {
        let settings = config.settings();
        let fetcher =
            DocumentFetcher::new(source, &settings.docs_base_url, settings.retry_policy())?;
        Ok(Self {
            config,
            tracker,
            fetcher,
            renderer: TemplateRenderer::new(),
        })
    }

    /// Returns the issue tracker.
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Returns the page source used for documents and the trending page.
    pub fn source(&self) -> &S {
        self.fetcher.source()
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Reviews every eligible issue.
    ///
    /// # Errors
    ///
    /// Returns an error if issues cannot be listed, or if a failure notice
    /// cannot be posted. Errors while producing a review do not abort the run.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        let labels = self.config.settings().review_labels();

        info!(
            repository = %self.config.host(),
            label = %labels.trigger,
            "Listing trending issues"
        );
        let issues = self.tracker.list_open_issues(&labels.trigger).await?;
        let eligible = select_eligible(issues, &labels);

        info!(count = eligible.len(), "Found issue(s) needing DeepWiki review");
        summary.issues_found = eligible.len();

        for issue in &eligible {
            let outcome = self.review_issue(issue).await?;
            debug!(issue = outcome.issue(), ?outcome, "Issue processed");
            summary.record(&outcome);
        }

        info!(
            processed = summary.processed(),
            skipped = summary.skipped,
            "Processed issue(s) with DeepWiki reviews"
        );
        Ok(summary)
    }

    /// Opens issues for newly trending repositories.
    ///
    /// # Errors
    ///
    /// Returns an error if the trending page or checked list is unavailable.
    pub async fn scan(&self, checked_path: &Path) -> Result<ScanReport, RunnerError> {
        Ok(scan_trending(
            &self.tracker,
            self.fetcher.source(),
            self.config.settings(),
            checked_path,
            self.config.dry_run(),
        )
        .await?)
    }

    async fn review_issue(&self, issue: &TrackedIssue) -> Result<ReviewOutcome, RunnerError> {
        let settings = self.config.settings();
        let Some(target) = TargetRepository::from_title(&issue.title, &settings.title_prefix) else {
            info!(issue = issue.number, title = %issue.title, "Skipping invalid repo format");
            return Ok(ReviewOutcome::Skipped {
                issue: issue.number,
                reason: format!("invalid repo format: {}", issue.title),
            });
        };

        let span = info_span!("review", issue = issue.number, repo = %target);

        async {
            let outcome = match self.post_review(issue.number, &target).await {
                Ok(()) => {
                    info!("Added DeepWiki review");
                    ReviewOutcome::Reviewed {
                        issue: issue.number,
                        repository: target.to_string(),
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to process");
                    let error = e.to_string();
                    let notice = self.renderer.render_failure_comment(&error)?;
                    self.publish(issue.number, &notice).await?;
                    ReviewOutcome::Failed {
                        issue: issue.number,
                        repository: target.to_string(),
                        error,
                    }
                }
            };

            tokio::time::sleep(settings.issue_delay()).await;
            Ok(outcome)
        }
        .instrument(span)
        .await
    }

    /// Fetches, extracts, renders and publishes the review for one issue.
    async fn post_review(&self, number: u64, target: &TargetRepository) -> Result<(), ReviewError> {
        let url = self.fetcher.document_url(target);
        info!(url = %url, "Scraping DeepWiki");

        let html = self.fetcher.fetch(target).await?;
        let record = extract_html(&html);
        debug!(
            description = record.description.is_some(),
            technologies = record.technologies.len(),
            features = record.features.len(),
            insights = record.insights.len(),
            "Extracted summary"
        );

        let body = self.renderer.render_review_comment(
            &target.to_string(),
            Some(&record),
            url.as_str(),
        )?;
        self.publish(number, &body).await?;
        Ok(())
    }

    /// Posts `body` on the issue and marks it reviewed.
    async fn publish(&self, number: u64, body: &str) -> Result<(), IssueError> {
        if self.config.dry_run() {
            info!(issue = number, "[DRY RUN] Would post comment:\n{body}");
            return Ok(());
        }

        self.tracker.create_comment(number, body).await?;
        let reviewed = [self.config.settings().reviewed_label.clone()];
        self.tracker.add_labels(number, &reviewed).await
    }
}
