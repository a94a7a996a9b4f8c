//! Review comment renderer.

use crate::extract::SummaryRecord;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Markdown layout of a review comment.
///
/// Block tags always share their line with literal text so that no line is
/// treated as a standalone statement; sections without data leave no trace.
const REVIEW_TEMPLATE: &str = "\
### 🔍 Enhanced Review via DeepWiki

**Repository:** {{repository}}
**DeepWiki Link:** [View on DeepWiki]({{url}})

{{#if description}}**📋 Description:**
> {{description}}

{{/if}}{{#if technologies}}**🛠️ Technologies:**
{{#each technologies}}`{{this}}`{{#unless @last}} • {{/unless}}{{/each}}

{{/if}}{{#if features}}**✨ Key Features:**{{#each features}}
- {{this}}{{/each}}

{{/if}}{{#if insights}}**💡 Insights:**
{{#each insights}}> {{this}}

{{/each}}{{/if}}
---
*This review is powered by [DeepWiki](https://deepwiki.com) - an AI-powered documentation platform.*
*Part of the Trending Repo Journal project using GitHub Actions.*";

/// Notice posted when no review could be produced.
const FAILURE_TEMPLATE: &str = "\
### ⚠️ DeepWiki Review Unavailable

Could not fetch enhanced information from DeepWiki for this repository.

*Error: {{error}}*";

/// Creates a Handlebars registry configured for markdown output.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders review and failure comments.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the review comment for `repository`.
    ///
    /// A missing `record` renders like an empty one: header and footer only.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_review_comment(
        &self,
        repository: &str,
        record: Option<&SummaryRecord>,
        url: &str,
    ) -> Result<String, super::TemplateError> {
        let empty = SummaryRecord::default();
        let record = record.unwrap_or(&empty);
        let data = json!({
            "repository": repository,
            "url": url,
            "description": record.description,
            "technologies": record.technologies,
            "features": record.features,
            "insights": record.insights,
        });

        self.render(REVIEW_TEMPLATE, &data)
    }

    /// Renders the notice posted when a review failed.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_failure_comment(&self, error: &str) -> Result<String, super::TemplateError> {
        self.render(FAILURE_TEMPLATE, &json!({ "error": error }))
    }

    fn render(&self, template: &str, data: &Value) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
