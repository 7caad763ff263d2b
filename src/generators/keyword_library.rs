// ABOUTME: Generators for the fixed Selenium keyword libraries
// ABOUTME: These take no input and always render the same text

use tracing::debug;

use super::outcome::GenerationOutcome;
use super::ArtifactGenerator;
use crate::template::{Bindings, TemplateName};

impl ArtifactGenerator {
    /// Dropdown, checkbox, alert, mouse, scroll, window, table and form keywords
    pub fn advanced_keyword_library(&self) -> GenerationOutcome {
        self.fixed_artifact("generate-advanced-keyword-library", TemplateName::AdvancedKeywords)
    }

    /// Screenshot, text retrieval, window management and browser performance keywords
    pub fn extended_keyword_library(&self) -> GenerationOutcome {
        self.fixed_artifact("generate-extended-keyword-library", TemplateName::ExtendedKeywords)
    }

    pub(super) fn fixed_artifact(&self, operation: &str, name: TemplateName) -> GenerationOutcome {
        GenerationOutcome::capture(operation, || {
            debug!("Rendering fixed template {}", name);
            Ok(self.engine.render_named(name, &Bindings::new())?)
        })
    }
}
