//! Comment rendering error types.

/// Comment rendering error.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Handlebars rendering error.
    #[error("Comment rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),
}
