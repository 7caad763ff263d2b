// ABOUTME: Error types for the stdio request server
// ABOUTME: Only transport failures end the loop; bad requests are answered in-band

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
