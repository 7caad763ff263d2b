// ABOUTME: Line-delimited JSON server exposing the tool registry over stdio
// ABOUTME: Stdout carries only protocol lines; logging goes to stderr

pub mod error;
pub mod protocol;
pub mod stdio;

pub use error::{Result, ServerError};
pub use protocol::{Request, Response};
pub use stdio::StdioServer;
