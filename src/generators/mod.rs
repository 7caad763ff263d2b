// ABOUTME: Artifact generators composing validation, selector lookup and rendering
// ABOUTME: Every public generator returns a GenerationOutcome and never propagates errors

pub mod error;
pub mod integration;
pub mod keyword_library;
pub mod login;
pub mod outcome;

use std::sync::Arc;

use crate::selectors::SelectorRegistry;
use crate::template::TemplateEngine;

pub use error::{GenerationError, Result};
pub use outcome::{
    is_error_artifact, GenerationOutcome, UNEXPECTED_ERROR_MARKER, VALIDATION_ERROR_MARKER,
};

pub const DEFAULT_SKIN: &str = crate::selectors::APP_LOCATOR_SKIN;
pub const DEFAULT_DATA_FILE: &str = "test_data.csv";
pub const DEFAULT_HTTP_METHOD: &str = "GET";

/// Stateless generator; cheap to clone and safe to share between threads
#[derive(Clone)]
pub struct ArtifactGenerator {
    engine: TemplateEngine,
    registry: Arc<SelectorRegistry>,
}

impl ArtifactGenerator {
    /// Create a generator over the built-in skins
    pub fn new() -> Result<Self> {
        Self::with_registry(Arc::new(SelectorRegistry::default()))
    }

    pub fn with_registry(registry: Arc<SelectorRegistry>) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            registry,
        })
    }

    pub fn registry(&self) -> &SelectorRegistry {
        &self.registry
    }
}
