//! Target repository parsing from issue titles.

use std::fmt;

/// Title prefix used by trending issues.
pub const DEFAULT_TITLE_PREFIX: &str = "Check trending repo:";

/// The external repository an issue asks to review.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetRepository {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl TargetRepository {
    /// Creates a target from its parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parses `owner/name`, ignoring anything after a second `/`.
    ///
    /// Returns `None` if either part is missing or empty.
    #[must_use]
    pub fn parse(full_name: &str) -> Option<Self> {
        let mut parts = full_name.trim().split('/');
        let owner = parts.next().filter(|s| !s.is_empty())?;
        let name = parts.next().filter(|s| !s.is_empty())?;
        Some(Self::new(owner, name))
    }

    /// Parses the target out of an issue title.
    ///
    /// `prefix` and any whitespace after it are stripped when present; a title
    /// without the prefix is parsed as-is.
    #[must_use]
    pub fn from_title(title: &str, prefix: &str) -> Option<Self> {
        Self::parse(strip_title_prefix(title, prefix))
    }
}

impl fmt::Display for TargetRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Removes `prefix` and the whitespace following it from `title`.
#[must_use]
pub fn strip_title_prefix<'a>(title: &'a str, prefix: &str) -> &'a str {
    title
        .strip_prefix(prefix)
        .map_or(title, str::trim_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_title() {
        let target =
            TargetRepository::from_title("Check trending repo: octo/widgets", DEFAULT_TITLE_PREFIX);
        assert_eq!(target, Some(TargetRepository::new("octo", "widgets")));
    }

    #[test]
    fn prefix_whitespace_is_optional() {
        let target =
            TargetRepository::from_title("Check trending repo:octo/widgets", DEFAULT_TITLE_PREFIX);
        assert_eq!(target.unwrap().to_string(), "octo/widgets");
    }

    #[test]
    fn title_without_prefix_is_parsed_as_is() {
        let target = TargetRepository::from_title("octo/widgets", DEFAULT_TITLE_PREFIX);
        assert_eq!(target, Some(TargetRepository::new("octo", "widgets")));
    }

    #[test]
    fn rejects_missing_parts() {
        assert_eq!(
            TargetRepository::from_title("Check trending repo: widgets", DEFAULT_TITLE_PREFIX),
            None
        );
        assert_eq!(
            TargetRepository::from_title("Check trending repo: octo/", DEFAULT_TITLE_PREFIX),
            None
        );
        assert_eq!(
            TargetRepository::from_title("Check trending repo: /widgets", DEFAULT_TITLE_PREFIX),
            None
        );
        assert_eq!(TargetRepository::parse(""), None);
    }

    #[test]
    fn ignores_extra_segments() {
        assert_eq!(
            TargetRepository::parse("octo/widgets/tree/main"),
            Some(TargetRepository::new("octo", "widgets"))
        );
    }
}
