//! Heuristic extraction of repository summaries from DeepWiki pages.
//!
//! Each field of a [`SummaryRecord`] is produced by an independent rule that
//! works directly on the parsed document. Rules never fail: a rule that finds
//! nothing yields an absent value or an empty list.
//!
//! All thresholds and caps are fixed constants so that rendered comments stay
//! stable across runs.

mod description;
mod features;
mod insights;
mod technologies;

pub use description::{extract_description, DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS};
pub use features::{extract_features, is_feature_text, MAX_FEATURES};
pub use insights::{extract_insights, MAX_INSIGHTS};
pub use technologies::{extract_technologies, MAX_BADGE_CHARS, MAX_TECHNOLOGIES};

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// Structured summary of a DeepWiki page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    /// Short description of the repository, if one was found.
    pub description: Option<String>,

    /// Technologies mentioned by the page, unique and in discovery order.
    pub technologies: Vec<String>,

    /// Feature bullet points, in document order.
    pub features: Vec<String>,

    /// Highlighted insights, in selector priority order.
    pub insights: Vec<String>,
}

impl SummaryRecord {
    /// Returns true if no field carries any data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.technologies.is_empty()
            && self.features.is_empty()
            && self.insights.is_empty()
    }
}

/// Extracts a [`SummaryRecord`] from a parsed document.
#[must_use]
pub fn extract(document: &Html) -> SummaryRecord {
    SummaryRecord {
        description: extract_description(document),
        technologies: extract_technologies(document),
        features: extract_features(document),
        insights: extract_insights(document),
    }
}

/// Parses raw HTML and extracts a [`SummaryRecord`] from it.
///
/// The parsed tree is dropped before returning, so this is safe to call from
/// async code without holding the (non-`Send`) document across an await.
#[must_use]
pub fn extract_html(html: &str) -> SummaryRecord {
    let document = Html::parse_document(html);
    extract(&document)
}

/// Iterates over every element matching `selector`, in document order.
///
/// Invalid selectors match nothing.
pub(crate) fn select_all<'a>(
    document: &'a Html,
    selector: &str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    let selector = Selector::parse(selector).ok();
    let elements: Vec<ElementRef<'a>> = match &selector {
        Some(selector) => document.select(selector).collect(),
        None => Vec::new(),
    };
    elements.into_iter()
}

/// Returns the first element matching `selector`.
pub(crate) fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    select_all(document, selector).next()
}

/// Concatenated text of all descendants, trimmed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Length in characters (not bytes).
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEEPWIKI_PAGE: &str = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <meta name="description" content="Meta description that should lose to the container.">
        </head>
        <body>
            <div class="description">A fast, embeddable key-value store written in Rust.</div>
            <span class="badge">Rust</span>
            <span class="tech-tag">LSM tree</span>
            <ul>
                <li>Supports atomic batch writes across column families</li>
                <li>Short</li>
                <li>Provides pluggable compaction strategies for workloads</li>
            </ul>
            <blockquote>Write amplification is kept low by tiered compaction.</blockquote>
        </body>
        </html>
    "#;

    #[test]
    fn can_extract_all_fields() {
        let record = extract_html(DEEPWIKI_PAGE);

        assert_eq!(
            record.description.as_deref(),
            Some("A fast, embeddable key-value store written in Rust.")
        );
        assert_eq!(&record.technologies[..2], ["Rust", "LSM tree"]);
        assert_eq!(record.features.len(), 2);
        assert_eq!(
            record.insights,
            vec!["Write amplification is kept low by tiered compaction.".to_string()]
        );
        assert!(!record.is_empty());
    }

    #[test]
    fn empty_document_yields_empty_record() {
        let record = extract_html("<html><body></body></html>");
        assert!(record.is_empty());
        assert_eq!(record, SummaryRecord::default());
    }

    #[test]
    fn invalid_selector_matches_nothing() {
        let document = Html::parse_document("<p>text</p>");
        assert_eq!(select_all(&document, "p[").count(), 0);
    }

    #[test]
    fn char_len_counts_characters() {
        assert_eq!(char_len("✓ ok"), 4);
        assert_eq!("✓ ok".len(), 6);
    }
}
