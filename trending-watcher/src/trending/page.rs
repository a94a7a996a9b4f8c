//! Parsing of the GitHub trending page.

use crate::extract::select_all;
use scraper::Html;

/// Heading that wraps each trending repository link.
const REPOSITORY_HEADING: &str = "h2.h3.lh-condensed";

/// Extracts `owner/name` identifiers from the trending page, in page order.
#[must_use]
pub fn parse_trending_page(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    select_all(&document, REPOSITORY_HEADING)
        .map(|heading| {
            heading
                .text()
                .flat_map(str::chars)
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}
