//! Comment and issue text generation.
//!
//! Review comments are rendered with Handlebars; issue titles and bodies for
//! newly trending repositories are plain formats.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

/// Generates the title of a trending-repository issue.
///
/// Format: "{prefix} {repository}", e.g. "Check trending repo: owner/name".
#[must_use]
pub fn generate_issue_title(prefix: &str, repository: &str) -> String {
    format!("{prefix} {repository}")
}

/// Generates the body of a trending-repository issue.
///
/// Format: "GitHub Trending repo: https://github.com/{repository}"
#[must_use]
pub fn generate_issue_body(repository: &str) -> String {
    format!("GitHub Trending repo: https://github.com/{repository}")
}
