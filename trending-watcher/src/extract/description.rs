//! Repository description extraction.

use super::{char_len, element_text, select_first};
use scraper::Html;

/// A candidate must be strictly longer than this to be accepted.
pub const DESCRIPTION_MIN_CHARS: usize = 20;

/// Accepted descriptions are cut down to this many characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// A single way of locating a description candidate.
type Strategy = fn(&Html) -> Option<String>;

/// Strategies in priority order.
const STRATEGIES: [Strategy; 4] = [
    description_container,
    repo_description_container,
    meta_description,
    first_paragraph,
];

/// Extracts the page description.
///
/// Strategies are tried in priority order and the first candidate longer than
/// [`DESCRIPTION_MIN_CHARS`] wins, truncated to [`DESCRIPTION_MAX_CHARS`].
#[must_use]
pub fn extract_description(document: &Html) -> Option<String> {
    STRATEGIES
        .iter()
        .filter_map(|strategy| strategy(document))
        .find(|text| char_len(text) > DESCRIPTION_MIN_CHARS)
        .map(|text| text.chars().take(DESCRIPTION_MAX_CHARS).collect())
}

fn description_container(document: &Html) -> Option<String> {
    select_first(document, ".description").map(|e| element_text(&e))
}

fn repo_description_container(document: &Html) -> Option<String> {
    select_first(document, ".repo-description").map(|e| element_text(&e))
}

/// The `content` attribute is taken verbatim.
fn meta_description(document: &Html) -> Option<String> {
    select_first(document, r#"meta[name="description"]"#)
        .and_then(|e| e.value().attr("content").map(str::to_string))
}

fn first_paragraph(document: &Html) -> Option<String> {
    select_first(document, "p:first-of-type").map(|e| element_text(&e))
}
