// ABOUTME: Named tool surface over the artifact generators and the linter
// ABOUTME: Each tool takes JSON arguments and always answers with a single text value

pub mod definitions;
pub mod error;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::generators::{ArtifactGenerator, DEFAULT_DATA_FILE, DEFAULT_SKIN};

pub use definitions::{
    GENERATE_ADVANCED_KEYWORD_LIBRARY, GENERATE_API_INTEGRATION_TEST, GENERATE_DATA_DRIVEN_TEST,
    GENERATE_EXTENDED_KEYWORD_LIBRARY, GENERATE_LOGIN_PAGE_OBJECT, GENERATE_LOGIN_TEST,
    GENERATE_PERFORMANCE_MONITORING_TEST, LINT_ARTIFACT,
};
pub use error::{Result, ToolError};

pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Run the tool. Bad arguments and generator failures come back as
    /// diagnostic text, never as an error.
    fn invoke(&self, arguments: JsonValue) -> String;
}

/// Shared state handed to every generator tool
pub struct ToolContext {
    pub generator: ArtifactGenerator,
    pub default_skin: String,
    pub default_data_file: String,
}

impl ToolContext {
    pub fn new(generator: ArtifactGenerator) -> Self {
        Self {
            generator,
            default_skin: DEFAULT_SKIN.to_string(),
            default_data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_default_skin(mut self, skin: impl Into<String>) -> Self {
        self.default_skin = skin.into();
        self
    }

    pub fn with_default_data_file(mut self, data_file: impl Into<String>) -> Self {
        self.default_data_file = data_file.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
}

pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new(context: ToolContext) -> Self {
        let context = Arc::new(context);
        let mut registry = Self {
            tools: BTreeMap::new(),
        };

        registry.register(Box::new(definitions::LoginTestTool(Arc::clone(&context))));
        registry.register(Box::new(definitions::LoginPageObjectTool(Arc::clone(
            &context,
        ))));
        registry.register(Box::new(definitions::AdvancedKeywordLibraryTool(
            Arc::clone(&context),
        )));
        registry.register(Box::new(definitions::ExtendedKeywordLibraryTool(
            Arc::clone(&context),
        )));
        registry.register(Box::new(definitions::PerformanceMonitoringTestTool(
            Arc::clone(&context),
        )));
        registry.register(Box::new(definitions::DataDrivenTestTool(Arc::clone(
            &context,
        ))));
        registry.register(Box::new(definitions::ApiIntegrationTestTool(context)));
        registry.register(Box::new(definitions::LintArtifactTool));

        registry
    }

    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    pub fn invoke(&self, name: &str, arguments: JsonValue) -> Result<String> {
        match self.get(name) {
            Some(tool) => Ok(tool.invoke(arguments)),
            None => Err(ToolError::ToolNotFound {
                name: name.to_string(),
                available: self.tools.keys().cloned().collect(),
            }),
        }
    }

    /// Tool names and descriptions, sorted by name
    pub fn list(&self) -> Vec<ToolInfo> {
        self.tools
            .values()
            .map(|tool| ToolInfo {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
            })
            .collect()
    }
}
