// ABOUTME: Generators for performance, data-driven and API integration test suites
// ABOUTME: Validates file paths, base URLs, endpoints and HTTP methods before rendering

use tracing::debug;

use super::error::Result;
use super::outcome::GenerationOutcome;
use super::ArtifactGenerator;
use crate::template::{Bindings, TemplateName};
use crate::validation::{
    validate_data_file_path, validate_endpoint, validate_http_method, validate_url,
};

impl ArtifactGenerator {
    /// Page load, paint and interaction timing suite with threshold checks
    pub fn performance_monitoring_test(&self) -> GenerationOutcome {
        self.fixed_artifact(
            "generate-performance-monitoring-test",
            TemplateName::PerformanceMonitoringTest,
        )
    }

    /// DataDriver-based login suite reading rows from `data_file`
    pub fn data_driven_test(&self, data_file: &str) -> GenerationOutcome {
        GenerationOutcome::capture("generate-data-driven-test", || {
            self.render_data_driven_test(data_file)
        })
    }

    /// Combined API and UI test against `base_url` + `endpoint`
    pub fn api_integration_test(
        &self,
        base_url: &str,
        endpoint: &str,
        method: &str,
    ) -> GenerationOutcome {
        GenerationOutcome::capture("generate-api-integration-test", || {
            self.render_api_integration_test(base_url, endpoint, method)
        })
    }

    fn render_data_driven_test(&self, data_file: &str) -> Result<String> {
        let data_file = validate_data_file_path(data_file)?;
        debug!(data_file = %data_file.as_str(), "Rendering data-driven test");

        let bindings = Bindings::new().with("data_file", data_file.as_str());
        Ok(self
            .engine
            .render_named(TemplateName::DataDrivenTest, &bindings)?)
    }

    fn render_api_integration_test(
        &self,
        base_url: &str,
        endpoint: &str,
        method: &str,
    ) -> Result<String> {
        let base_url = validate_url(base_url)?;
        let endpoint = validate_endpoint(endpoint)?;
        let method = validate_http_method(method)?;
        debug!(%method, endpoint = %endpoint.as_str(), "Rendering API integration test");

        let bindings = Bindings::new()
            .with("base_url", base_url.as_str())
            .with("endpoint", endpoint.as_str())
            .with("method", method.as_str());
        Ok(self
            .engine
            .render_named(TemplateName::ApiIntegrationTest, &bindings)?)
    }
}
