// ABOUTME: Built-in Robot Framework artifact templates
// ABOUTME: Template bodies live under templates/ and are compiled into the binary

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    LoginTest,
    LoginPageObject,
    AdvancedKeywords,
    ExtendedKeywords,
    PerformanceMonitoringTest,
    DataDrivenTest,
    ApiIntegrationTest,
}

impl TemplateName {
    pub const ALL: [TemplateName; 7] = [
        TemplateName::LoginTest,
        TemplateName::LoginPageObject,
        TemplateName::AdvancedKeywords,
        TemplateName::ExtendedKeywords,
        TemplateName::PerformanceMonitoringTest,
        TemplateName::DataDrivenTest,
        TemplateName::ApiIntegrationTest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::LoginTest => "login_test",
            TemplateName::LoginPageObject => "login_page_object",
            TemplateName::AdvancedKeywords => "advanced_keywords",
            TemplateName::ExtendedKeywords => "extended_keywords",
            TemplateName::PerformanceMonitoringTest => "performance_monitoring_test",
            TemplateName::DataDrivenTest => "data_driven_test",
            TemplateName::ApiIntegrationTest => "api_integration_test",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            TemplateName::LoginTest => include_str!("../../templates/login_test.robot"),
            TemplateName::LoginPageObject => {
                include_str!("../../templates/login_page_object.robot")
            }
            TemplateName::AdvancedKeywords => {
                include_str!("../../templates/advanced_keywords.robot")
            }
            TemplateName::ExtendedKeywords => {
                include_str!("../../templates/extended_keywords.robot")
            }
            TemplateName::PerformanceMonitoringTest => {
                include_str!("../../templates/performance_monitoring_test.robot")
            }
            TemplateName::DataDrivenTest => include_str!("../../templates/data_driven_test.robot"),
            TemplateName::ApiIntegrationTest => {
                include_str!("../../templates/api_integration_test.robot")
            }
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
