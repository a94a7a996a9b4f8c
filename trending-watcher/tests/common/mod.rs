//! In-memory collaborators shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use trending_watcher::{
    FetchError, HostRepository, IssueError, IssueTracker, PageSource, Runner, RunnerConfig,
    TrackedIssue,
};

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}

/// Issue tracker that keeps every write in memory.
#[derive(Default)]
pub struct InMemoryTracker {
    pub issues: Vec<TrackedIssue>,
    pub comments: Mutex<Vec<(u64, String)>>,
    pub labels: Mutex<Vec<(u64, Vec<String>)>>,
    pub created: Mutex<Vec<(String, String, Vec<String>)>>,
    pub fail_listing: bool,
    /// Number of upcoming `create_comment` calls that should fail.
    pub failing_comments: Mutex<usize>,
}

impl InMemoryTracker {
    pub fn with_issues(issues: Vec<TrackedIssue>) -> Self {
        Self {
            issues,
            ..Self::default()
        }
    }

    pub fn comments(&self) -> Vec<(u64, String)> {
        self.comments.lock().unwrap().clone()
    }

    pub fn labels(&self) -> Vec<(u64, Vec<String>)> {
        self.labels.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<(String, String, Vec<String>)> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueTracker for InMemoryTracker {
    async fn list_open_issues(&self, label: &str) -> Result<Vec<TrackedIssue>, IssueError> {
        if self.fail_listing {
            return Err(IssueError::Tracker("listing unavailable".to_string()));
        }
        Ok(self
            .issues
            .iter()
            .filter(|issue| issue.has_label(label))
            .cloned()
            .collect())
    }

    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<(), IssueError> {
        let mut failing = self.failing_comments.lock().unwrap();
        if *failing > 0 {
            *failing -= 1;
            return Err(IssueError::Tracker("comment rejected".to_string()));
        }
        self.comments
            .lock()
            .unwrap()
            .push((issue_number, body.to_string()));
        Ok(())
    }

    async fn add_labels(&self, issue_number: u64, labels: &[String]) -> Result<(), IssueError> {
        self.labels
            .lock()
            .unwrap()
            .push((issue_number, labels.to_vec()));
        Ok(())
    }

    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<u64, IssueError> {
        let mut created = self.created.lock().unwrap();
        created.push((title.to_string(), body.to_string(), labels.to_vec()));
        Ok(100 + created.len() as u64)
    }
}

/// Serves fixed pages by URL; any other URL answers HTTP 503.
#[derive(Default)]
pub struct StaticPages {
    pages: HashMap<String, String>,
    pub requests: Mutex<Vec<String>>,
}

impl StaticPages {
    pub fn with_page(mut self, url: &str, body: String) -> Self {
        self.pages.insert(url.to_string(), body);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for StaticPages {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
            status: 503,
            url: url.to_string(),
        })
    }
}

pub fn trending_issue(number: u64, repo: &str, labels: &[&str]) -> TrackedIssue {
    TrackedIssue::new(
        number,
        format!("Check trending repo: {repo}"),
        labels.iter().copied(),
    )
}

pub fn runner(
    tracker: InMemoryTracker,
    pages: StaticPages,
    dry_run: bool,
) -> Runner<InMemoryTracker, StaticPages> {
    let host: HostRepository = "octo/journal".parse().unwrap();
    let config = RunnerConfig::new(host, "test-token".to_string(), dry_run);
    Runner::with_parts(config, tracker, pages).unwrap()
}
