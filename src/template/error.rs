// ABOUTME: Error types for template rendering
// ABOUTME: Separates missing bindings and disallowed expressions from Handlebars failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Missing template binding: {name}")]
    MissingBinding { name: String },

    #[error("Unsupported template expression: {{{{{expression}}}}}")]
    UnsupportedExpression { expression: String },

    #[error("Template '{template}' failed to compile: {message}")]
    Syntax { template: String, message: String },

    #[error("Template render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
