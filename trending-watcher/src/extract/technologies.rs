//! Technology detection from badges and well-known keywords.

use super::{char_len, element_text, select_all, select_first};
use scraper::Html;

/// Maximum number of technologies kept.
pub const MAX_TECHNOLOGIES: usize = 8;

/// Badge text must be shorter than this.
pub const MAX_BADGE_CHARS: usize = 30;

/// Markup conventions used for technology badges and tags.
const BADGE_SELECTOR: &str = ".technology, .tech-tag, .badge, .topic-tag";

/// Keywords searched for (case-insensitively) anywhere in the page body.
const KNOWN_TECHNOLOGIES: [&str; 19] = [
    "python",
    "javascript",
    "typescript",
    "rust",
    "go",
    "java",
    "ruby",
    "react",
    "vue",
    "angular",
    "node.js",
    "docker",
    "kubernetes",
    "tensorflow",
    "pytorch",
    "machine learning",
    "ai",
    "web3",
    "blockchain",
];

/// Collects technologies mentioned on the page.
///
/// Badge-like elements come first (document order), followed by known
/// keywords found in the body text. Entries are unique and capped at
/// [`MAX_TECHNOLOGIES`].
#[must_use]
pub fn extract_technologies(document: &Html) -> Vec<String> {
    let mut technologies = Vec::new();

    for text in badge_texts(document) {
        push_unique(&mut technologies, text);
    }

    let body_text = body_text(document).to_lowercase();
    for keyword in KNOWN_TECHNOLOGIES {
        if body_text.contains(keyword) {
            push_unique(&mut technologies, keyword.to_string());
        }
    }

    technologies.truncate(MAX_TECHNOLOGIES);
    technologies
}

fn badge_texts(document: &Html) -> impl Iterator<Item = String> + '_ {
    select_all(document, BADGE_SELECTOR)
        .map(|e| element_text(&e))
        .filter(|text| !text.is_empty() && char_len(text) < MAX_BADGE_CHARS)
}

/// Untrimmed text of `<body>`, or of the whole document if there is none.
fn body_text(document: &Html) -> String {
    match select_first(document, "body") {
        Some(body) => body.text().collect(),
        None => document.root_element().text().collect(),
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}
