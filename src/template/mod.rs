// ABOUTME: Template module for safe placeholder substitution
// ABOUTME: Exports the rendering engine, binding maps and the built-in artifact templates

pub mod bindings;
pub mod engine;
pub mod error;
pub mod library;

pub use bindings::Bindings;
pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
pub use library::TemplateName;
