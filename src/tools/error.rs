// ABOUTME: Error types for tool registry dispatch
// ABOUTME: Only an unknown tool name is an error; tool failures are returned as text

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool '{name}'. Available tools: {available:?}")]
    ToolNotFound {
        name: String,
        available: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, ToolError>;
