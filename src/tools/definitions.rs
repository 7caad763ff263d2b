// ABOUTME: One Tool implementation per externally named operation
// ABOUTME: Deserializes JSON arguments with their defaults and always answers with text

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;

use super::{Tool, ToolContext};
use crate::generators::outcome::comment_safe;
use crate::generators::{GenerationOutcome, DEFAULT_HTTP_METHOD, VALIDATION_ERROR_MARKER};
use crate::lint::lint;

pub const GENERATE_LOGIN_TEST: &str = "generate-login-test";
pub const GENERATE_LOGIN_PAGE_OBJECT: &str = "generate-login-page-object";
pub const GENERATE_ADVANCED_KEYWORD_LIBRARY: &str = "generate-advanced-keyword-library";
pub const GENERATE_EXTENDED_KEYWORD_LIBRARY: &str = "generate-extended-keyword-library";
pub const GENERATE_PERFORMANCE_MONITORING_TEST: &str = "generate-performance-monitoring-test";
pub const GENERATE_DATA_DRIVEN_TEST: &str = "generate-data-driven-test";
pub const GENERATE_API_INTEGRATION_TEST: &str = "generate-api-integration-test";
pub const LINT_ARTIFACT: &str = "lint-artifact";

#[derive(Debug, Deserialize)]
struct LoginTestArgs {
    url: String,
    username: String,
    password: String,
    #[serde(default, alias = "template_type")]
    skin: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SkinArgs {
    #[serde(default, alias = "template_type")]
    skin: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DataDrivenArgs {
    #[serde(default, alias = "test_data_file", alias = "dataFilePath")]
    data_file: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiIntegrationArgs {
    #[serde(alias = "baseUrl")]
    base_url: String,
    endpoint: String,
    #[serde(default = "default_method")]
    method: String,
}

#[derive(Debug, Deserialize)]
struct LintArgs {
    #[serde(alias = "robot_code")]
    text: String,
}

fn default_method() -> String {
    DEFAULT_HTTP_METHOD.to_string()
}

/// Parse tool arguments; `null` counts as an empty argument object
fn parse_arguments<T: DeserializeOwned>(tool: &str, arguments: JsonValue) -> Result<T, String> {
    let arguments = match arguments {
        JsonValue::Null => JsonValue::Object(serde_json::Map::new()),
        other => other,
    };

    serde_json::from_value(arguments).map_err(|e| {
        format!(
            "{} Invalid arguments for {}: {}\n# Please correct the input and try again.",
            VALIDATION_ERROR_MARKER,
            tool,
            comment_safe(&e.to_string())
        )
    })
}

pub struct LoginTestTool(pub Arc<ToolContext>);

impl Tool for LoginTestTool {
    fn name(&self) -> &'static str {
        GENERATE_LOGIN_TEST
    }

    fn description(&self) -> &'static str {
        "Generate a Robot Framework login test case. Returns .robot file content as text; does not execute it."
    }

    fn invoke(&self, arguments: JsonValue) -> String {
        let args: LoginTestArgs = match parse_arguments(self.name(), arguments) {
            Ok(args) => args,
            Err(text) => return text,
        };
        let skin = args.skin.as_deref().unwrap_or(&self.0.default_skin);
        self.0
            .generator
            .login_test(&args.url, &args.username, &args.password, skin)
            .into_text()
    }
}

pub struct LoginPageObjectTool(pub Arc<ToolContext>);

impl Tool for LoginPageObjectTool {
    fn name(&self) -> &'static str {
        GENERATE_LOGIN_PAGE_OBJECT
    }

    fn description(&self) -> &'static str {
        "Generate Robot Framework page object keywords for a login page. Returns .robot file content as text; does not execute it."
    }

    fn invoke(&self, arguments: JsonValue) -> String {
        let args: SkinArgs = match parse_arguments(self.name(), arguments) {
            Ok(args) => args,
            Err(text) => return text,
        };
        let skin = args.skin.as_deref().unwrap_or(&self.0.default_skin);
        self.0.generator.login_page_object(skin).into_text()
    }
}

pub struct AdvancedKeywordLibraryTool(pub Arc<ToolContext>);

impl Tool for AdvancedKeywordLibraryTool {
    fn name(&self) -> &'static str {
        GENERATE_ADVANCED_KEYWORD_LIBRARY
    }

    fn description(&self) -> &'static str {
        "Generate Robot Framework keywords for advanced Selenium operations. Returns .robot file content as text; does not execute it."
    }

    fn invoke(&self, _arguments: JsonValue) -> String {
        self.0.generator.advanced_keyword_library().into_text()
    }
}

pub struct ExtendedKeywordLibraryTool(pub Arc<ToolContext>);

impl Tool for ExtendedKeywordLibraryTool {
    fn name(&self) -> &'static str {
        GENERATE_EXTENDED_KEYWORD_LIBRARY
    }

    fn description(&self) -> &'static str {
        "Generate extended Robot Framework keywords for screenshots, performance monitoring and window management. Returns .robot file content as text; does not execute it."
    }

    fn invoke(&self, _arguments: JsonValue) -> String {
        self.0.generator.extended_keyword_library().into_text()
    }
}

pub struct PerformanceMonitoringTestTool(pub Arc<ToolContext>);

impl Tool for PerformanceMonitoringTestTool {
    fn name(&self) -> &'static str {
        GENERATE_PERFORMANCE_MONITORING_TEST
    }

    fn description(&self) -> &'static str {
        "Generate a Robot Framework performance monitoring test. Returns .robot file content as text; does not execute it."
    }

    fn invoke(&self, _arguments: JsonValue) -> String {
        self.0.generator.performance_monitoring_test().into_text()
    }
}

pub struct DataDrivenTestTool(pub Arc<ToolContext>);

impl Tool for DataDrivenTestTool {
    fn name(&self) -> &'static str {
        GENERATE_DATA_DRIVEN_TEST
    }

    fn description(&self) -> &'static str {
        "Generate a Robot Framework data-driven login test template. Returns .robot file content as text; does not execute it."
    }

    fn invoke(&self, arguments: JsonValue) -> String {
        let args: DataDrivenArgs = match parse_arguments(self.name(), arguments) {
            Ok(args) => args,
            Err(text) => return text,
        };
        let data_file = args.data_file.as_deref().unwrap_or(&self.0.default_data_file);
        self.0.generator.data_driven_test(data_file).into_text()
    }
}

pub struct ApiIntegrationTestTool(pub Arc<ToolContext>);

impl Tool for ApiIntegrationTestTool {
    fn name(&self) -> &'static str {
        GENERATE_API_INTEGRATION_TEST
    }

    fn description(&self) -> &'static str {
        "Generate a Robot Framework API and UI integration test. Returns .robot file content as text; does not execute it."
    }

    fn invoke(&self, arguments: JsonValue) -> String {
        let args: ApiIntegrationArgs = match parse_arguments(self.name(), arguments) {
            Ok(args) => args,
            Err(text) => return text,
        };
        self.0
            .generator
            .api_integration_test(&args.base_url, &args.endpoint, &args.method)
            .into_text()
    }
}

pub struct LintArtifactTool;

impl Tool for LintArtifactTool {
    fn name(&self) -> &'static str {
        LINT_ARTIFACT
    }

    fn description(&self) -> &'static str {
        "Check Robot Framework text for common syntax mistakes. Returns a validation report as text; does not execute the code."
    }

    fn invoke(&self, arguments: JsonValue) -> String {
        let args: LintArgs = match parse_arguments(self.name(), arguments) {
            Ok(args) => args,
            Err(text) => return text,
        };
        GenerationOutcome::capture(LINT_ARTIFACT, || Ok(lint(&args.text).to_text())).into_text()
    }
}
