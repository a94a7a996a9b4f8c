//! Feature bullet-point extraction.

use super::{char_len, element_text, select_all};
use scraper::Html;

/// Maximum number of features kept.
pub const MAX_FEATURES: usize = 5;

const MIN_FEATURE_CHARS: usize = 20;
const MAX_FEATURE_CHARS: usize = 200;

/// Verb stems a feature may start with. Matching is a case-insensitive prefix
/// test, so "support", "supports" and "supporting" all qualify.
const ACTION_VERBS: [&str; 7] = [
    "support", "provide", "enable", "allow", "include", "offer", "feature",
];

/// Glyphs that mark an item as a feature regardless of its wording.
const FEATURE_GLYPHS: [char; 2] = ['✓', '•'];

/// Collects feature-like list items in document order, capped at
/// [`MAX_FEATURES`].
#[must_use]
pub fn extract_features(document: &Html) -> Vec<String> {
    select_all(document, "li")
        .map(|e| element_text(&e))
        .filter(|text| is_feature_text(text))
        .take(MAX_FEATURES)
        .collect()
}

/// Returns true if `text` reads like a feature bullet point.
#[must_use]
pub fn is_feature_text(text: &str) -> bool {
    let len = char_len(text);
    if len <= MIN_FEATURE_CHARS || len >= MAX_FEATURE_CHARS {
        return false;
    }

    let lower = text.to_lowercase();
    ACTION_VERBS.iter().any(|verb| lower.starts_with(verb))
        || text.contains(FEATURE_GLYPHS.as_slice())
}
