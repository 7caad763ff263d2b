// ABOUTME: Tagged result of one generator call and its flattening to plain text
// ABOUTME: Validation and internal failures become commented diagnostic artifacts at the boundary

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, warn};

use super::error::{GenerationError, Result};
use crate::validation::ValidationError;

pub const VALIDATION_ERROR_MARKER: &str = "# VALIDATION ERROR:";
pub const UNEXPECTED_ERROR_MARKER: &str = "# UNEXPECTED ERROR:";

#[derive(Debug)]
pub enum GenerationOutcome {
    Success(String),
    ValidationFailure(ValidationError),
    InternalFailure(String),
}

impl GenerationOutcome {
    /// Run a generator pipeline, catching errors and panics alike
    pub fn capture<F>(operation: &str, pipeline: F) -> Self
    where
        F: FnOnce() -> Result<String>,
    {
        match panic::catch_unwind(AssertUnwindSafe(pipeline)) {
            Ok(Ok(text)) => GenerationOutcome::Success(text),
            Ok(Err(GenerationError::Validation(e))) => {
                warn!("{} rejected input: {}", operation, e);
                GenerationOutcome::ValidationFailure(e)
            }
            Ok(Err(e)) => {
                error!("{} failed: {}", operation, e);
                GenerationOutcome::InternalFailure(e.to_string())
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("{} panicked: {}", operation, message);
                GenerationOutcome::InternalFailure(message)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success(_))
    }

    pub fn is_validation_failure(&self) -> bool {
        matches!(self, GenerationOutcome::ValidationFailure(_))
    }

    /// The artifact text, or a diagnostic artifact starting with an error marker
    pub fn into_text(self) -> String {
        match self {
            GenerationOutcome::Success(text) => text,
            GenerationOutcome::ValidationFailure(e) => format!(
                "{} {}\n# Please correct the input and try again.",
                VALIDATION_ERROR_MARKER,
                comment_safe(&e.to_string())
            ),
            GenerationOutcome::InternalFailure(message) => format!(
                "{} {}\n# Please contact support.",
                UNEXPECTED_ERROR_MARKER,
                comment_safe(&message)
            ),
        }
    }
}

impl From<GenerationOutcome> for String {
    fn from(outcome: GenerationOutcome) -> Self {
        outcome.into_text()
    }
}

/// True when a returned artifact is a diagnostic rather than generated code
pub fn is_error_artifact(text: &str) -> bool {
    text.starts_with(VALIDATION_ERROR_MARKER) || text.starts_with(UNEXPECTED_ERROR_MARKER)
}

/// Keep a message on one comment line; caller input may carry line breaks.
pub(crate) fn comment_safe(message: &str) -> String {
    message
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "generator panicked".to_string()
    }
}
