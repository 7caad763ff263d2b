// ABOUTME: Main library module for the robotsmith Robot Framework generator
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod generators;
pub mod lint;
pub mod selectors;
pub mod server;
pub mod template;
pub mod tools;
pub mod validation;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use generators::{is_error_artifact, ArtifactGenerator, GenerationError, GenerationOutcome};
pub use lint::{lint, LintFinding, LintReport, Verdict};
pub use selectors::{resolve_profile, SelectorProfile, SelectorRegistry, SkinDefinition};
pub use server::StdioServer;
pub use template::{Bindings, TemplateEngine, TemplateError, TemplateName};
pub use tools::{Tool, ToolContext, ToolRegistry};
pub use validation::{
    validate_credentials, validate_data_file_path, validate_endpoint, validate_http_method,
    validate_selector, validate_url, ValidationError,
};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
