//! The checked list: every trending repository already turned into an issue.
//!
//! Stored as a YAML sequence of `owner/name` strings, oldest first.

use super::TrendingError;
use serde_yaml::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the checked list.
pub const DEFAULT_CHECKED_PATH: &str = "_data/trending_checked.yml";

/// Maximum number of entries kept by [`cleanup_checked`].
pub const MAX_CHECKED: usize = 1000;

/// Outcome of a checked-list cleanup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Entries before cleanup.
    pub original: usize,
    /// Duplicate entries removed.
    pub duplicates_removed: usize,
    /// Oldest entries removed to respect the cap.
    pub old_removed: usize,
    /// Entries after cleanup.
    pub remaining: usize,
}

/// Loads the checked list.
///
/// A missing or empty file, or a document that is not a sequence, yields an
/// empty list. Non-string entries are ignored.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid YAML.
pub fn load_checked(path: &Path) -> Result<Vec<String>, TrendingError> {
    if !path.exists() {
        debug!(path = %path.display(), "Checked list not found, starting empty");
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| TrendingError::Io {
        path: path.display().to_string(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_yaml::from_str(&contents).map_err(|source| TrendingError::Yaml {
        path: path.display().to_string(),
        source,
    })?;

    Ok(match value {
        Value::Sequence(entries) => entries
            .into_iter()
            .filter_map(|entry| entry.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    })
}

/// Writes the checked list, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the file or its directory cannot be written.
pub fn save_checked(path: &Path, repositories: &[String]) -> Result<(), TrendingError> {
    let io_error = |source| TrendingError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }

    let contents = serde_yaml::to_string(repositories).map_err(|source| TrendingError::Yaml {
        path: path.display().to_string(),
        source,
    })?;
    std::fs::write(path, contents).map_err(io_error)
}

/// Removes duplicates, keeping each entry's first occurrence.
///
/// Returns the deduplicated list and the number of entries removed.
#[must_use]
pub fn remove_duplicates(repositories: Vec<String>) -> (Vec<String>, usize) {
    let original = repositories.len();
    let mut seen = HashSet::new();
    let unique: Vec<String> = repositories
        .into_iter()
        .filter(|repo| seen.insert(repo.clone()))
        .collect();
    let removed = original - unique.len();
    (unique, removed)
}

/// Keeps only the most recent `max` entries (the tail of the list).
///
/// Returns the kept entries and the number removed.
#[must_use]
pub fn cleanup_by_count(mut repositories: Vec<String>, max: usize) -> (Vec<String>, usize) {
    if repositories.len() <= max {
        return (repositories, 0);
    }
    let removed = repositories.len() - max;
    repositories.drain(..removed);
    (repositories, removed)
}

/// Deduplicates and caps the checked list at `path`.
///
/// An empty list is left untouched.
///
/// # Errors
///
/// Returns an error if the list cannot be loaded or saved.
pub fn cleanup_checked(path: &Path, max: usize) -> Result<CleanupReport, TrendingError> {
    let repositories = load_checked(path)?;
    let original = repositories.len();
    info!(path = %path.display(), count = original, "Cleaning up checked list");

    if original == 0 {
        info!("No repositories to clean up");
        return Ok(CleanupReport::default());
    }

    let (repositories, duplicates_removed) = remove_duplicates(repositories);
    if duplicates_removed > 0 {
        info!(duplicates_removed, "Removed duplicate entries");
    }

    let (repositories, old_removed) = cleanup_by_count(repositories, max);
    if old_removed > 0 {
        info!(old_removed, kept = max, "Removed old repositories");
    }

    save_checked(path, &repositories)?;

    Ok(CleanupReport {
        original,
        duplicates_removed,
        old_removed,
        remaining: repositories.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let (unique, removed) = remove_duplicates(names(&["a/x", "b/y", "a/x", "c/z", "b/y"]));
        assert_eq!(unique, names(&["a/x", "b/y", "c/z"]));
        assert_eq!(removed, 2);
    }

    #[test]
    fn cap_keeps_most_recent() {
        let (kept, removed) = cleanup_by_count(names(&["old/1", "old/2", "new/1", "new/2"]), 2);
        assert_eq!(kept, names(&["new/1", "new/2"]));
        assert_eq!(removed, 2);

        let (kept, removed) = cleanup_by_count(names(&["only/1"]), 2);
        assert_eq!(kept, names(&["only/1"]));
        assert_eq!(removed, 0);
    }

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        assert!(load_checked(&temp.path().join("nope.yml")).unwrap().is_empty());
    }

    #[test]
    fn non_sequence_loads_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("checked.yml");
        fs::write(&path, "repos:\n  - a/x\n").unwrap();
        assert!(load_checked(&path).unwrap().is_empty());
    }

    #[test]
    fn save_then_load_creates_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("_data/trending_checked.yml");

        save_checked(&path, &names(&["octo/widgets", "rust-lang/rust"])).unwrap();
        assert_eq!(
            load_checked(&path).unwrap(),
            names(&["octo/widgets", "rust-lang/rust"])
        );
    }

    #[test]
    fn cleanup_dedupes_caps_and_saves() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("checked.yml");
        fs::write(&path, "- a/1\n- b/2\n- a/1\n- c/3\n- d/4\n").unwrap();

        let report = cleanup_checked(&path, 2).unwrap();
        assert_eq!(
            report,
            CleanupReport {
                original: 5,
                duplicates_removed: 1,
                old_removed: 2,
                remaining: 2,
            }
        );
        assert_eq!(load_checked(&path).unwrap(), names(&["c/3", "d/4"]));
    }

    #[test]
    fn cleanup_of_empty_list_does_not_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("checked.yml");

        let report = cleanup_checked(&path, MAX_CHECKED).unwrap();
        assert_eq!(report, CleanupReport::default());
        assert!(!path.exists());
    }
}
