mod common;

use common::{fixture, runner, InMemoryTracker, StaticPages};
use tempfile::TempDir;
use trending_watcher::{load_checked, save_checked, RunnerError, TrendingError};

const TRENDING_URL: &str = "https://github.com/trending";

fn trending_page() -> StaticPages {
    StaticPages::default().with_page(TRENDING_URL, fixture("trending_page.html"))
}

fn seeded_checked_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("_data/trending_checked.yml");
    save_checked(&path, &["octo/widgets".to_string()]).unwrap();
    path
}

#[tokio::test(start_paused = true)]
async fn opens_issues_for_unseen_repositories() {
    let dir = TempDir::new().unwrap();
    let checked = seeded_checked_file(&dir);
    let runner = runner(InMemoryTracker::default(), trending_page(), false);

    let report = runner.scan(&checked).await.unwrap();

    assert_eq!(report.trending, 2);
    assert_eq!(report.new_repositories, vec!["rust-lang/rust"]);
    assert_eq!(report.issues_created, 1);
    assert_eq!(report.issues_failed, 0);

    assert_eq!(
        runner.tracker().created(),
        vec![(
            "Check trending repo: rust-lang/rust".to_string(),
            "GitHub Trending repo: https://github.com/rust-lang/rust".to_string(),
            vec!["trending".to_string()],
        )]
    );
    assert_eq!(
        load_checked(&checked).unwrap(),
        vec!["octo/widgets", "rust-lang/rust"]
    );
}

#[tokio::test(start_paused = true)]
async fn dry_run_leaves_checked_list_alone() {
    let dir = TempDir::new().unwrap();
    let checked = seeded_checked_file(&dir);
    let runner = runner(InMemoryTracker::default(), trending_page(), true);

    let report = runner.scan(&checked).await.unwrap();

    assert_eq!(report.new_repositories, vec!["rust-lang/rust"]);
    assert_eq!(report.issues_created, 0);
    assert!(runner.tracker().created().is_empty());
    assert_eq!(load_checked(&checked).unwrap(), vec!["octo/widgets"]);
}

#[tokio::test(start_paused = true)]
async fn unavailable_trending_page_aborts_scan() {
    let dir = TempDir::new().unwrap();
    let checked = seeded_checked_file(&dir);
    let runner = runner(InMemoryTracker::default(), StaticPages::default(), false);

    let result = runner.scan(&checked).await;

    assert!(matches!(
        result,
        Err(RunnerError::Trending(TrendingError::Fetch(_)))
    ));
    assert_eq!(runner.source().requests().len(), 3);
    assert!(runner.tracker().created().is_empty());
}
