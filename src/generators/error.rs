// ABOUTME: Error types for artifact generation pipelines
// ABOUTME: Keeps caller mistakes (validation) apart from internal template failures

use thiserror::Error;

use crate::template::TemplateError;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
