//! Highlighted insight extraction.

use super::{char_len, element_text, select_all};
use scraper::Html;

/// Maximum number of insights kept.
pub const MAX_INSIGHTS: usize = 3;

const MIN_INSIGHT_CHARS: usize = 30;
const MAX_INSIGHT_CHARS: usize = 300;

/// Emphasis-style markup, in priority order. Every match of one selector is
/// taken before any match of the next.
const HIGHLIGHT_SELECTORS: [&str; 6] = [
    ".highlight",
    ".key-point",
    ".insight",
    "blockquote",
    "strong",
    "em",
];

/// Collects highlighted passages, capped at [`MAX_INSIGHTS`].
#[must_use]
pub fn extract_insights(document: &Html) -> Vec<String> {
    HIGHLIGHT_SELECTORS
        .iter()
        .flat_map(|selector| select_all(document, selector))
        .map(|e| element_text(&e))
        .filter(|text| {
            let len = char_len(text);
            len > MIN_INSIGHT_CHARS && len < MAX_INSIGHT_CHARS
        })
        .take(MAX_INSIGHTS)
        .collect()
}
