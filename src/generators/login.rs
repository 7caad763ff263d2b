// ABOUTME: Login test case and login page object generators
// ABOUTME: Both are parameterized by a skin whose selectors come from the registry

use tracing::debug;

use super::error::Result;
use super::outcome::GenerationOutcome;
use super::ArtifactGenerator;
use crate::selectors::SelectorProfile;
use crate::template::{Bindings, TemplateName};
use crate::validation::{validate_credentials, validate_url};

impl ArtifactGenerator {
    /// Complete login test case for `url` using the selectors of `skin`
    pub fn login_test(
        &self,
        url: &str,
        username: &str,
        password: &str,
        skin: &str,
    ) -> GenerationOutcome {
        GenerationOutcome::capture("generate-login-test", || {
            self.render_login_test(url, username, password, skin)
        })
    }

    /// Page object keywords for the login page of `skin`
    pub fn login_page_object(&self, skin: &str) -> GenerationOutcome {
        GenerationOutcome::capture("generate-login-page-object", || {
            self.render_login_page_object(skin)
        })
    }

    fn render_login_test(
        &self,
        url: &str,
        username: &str,
        password: &str,
        skin: &str,
    ) -> Result<String> {
        let url = validate_url(url)?;
        let credentials = validate_credentials(username, password)?;
        let profile = self.registry.resolve_profile(skin);

        debug!(
            skin = %profile.name,
            username_len = credentials.username().len(),
            "Rendering login test"
        );

        let bindings = selector_bindings(profile)
            .with("url", url.as_str())
            .with("username", credentials.username())
            .with("password", credentials.password())
            .with("skin", profile.name.as_str());

        Ok(self.engine.render_named(TemplateName::LoginTest, &bindings)?)
    }

    fn render_login_page_object(&self, skin: &str) -> Result<String> {
        let profile = self.registry.resolve_profile(skin);
        debug!(skin = %profile.name, "Rendering login page object");

        let bindings = selector_bindings(profile).with("skin_label", profile.name.to_uppercase());

        Ok(self
            .engine
            .render_named(TemplateName::LoginPageObject, &bindings)?)
    }
}

fn selector_bindings(profile: &SelectorProfile) -> Bindings {
    Bindings::new()
        .with("username_field", profile.username_field.as_str())
        .with("password_field", profile.password_field.as_str())
        .with("login_button", profile.login_button.as_str())
        .with("success_indicator", profile.success_indicator.as_str())
        .with("error_message", profile.error_message.as_str())
        .with("logout_button", profile.logout_button.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::VALIDATION_ERROR_MARKER;

    fn generator() -> ArtifactGenerator {
        ArtifactGenerator::new().unwrap()
    }

    #[test]
    fn test_login_test_renders_inputs_and_selectors() {
        let text = generator()
            .login_test("https://example.com", "alice", "s3cret", "generic")
            .into_text();

        assert!(text.starts_with("*** Settings ***"));
        assert!(text.contains("${URL}           https://example.com\n"));
        assert!(text.contains("${USERNAME}      alice\n"));
        assert!(text.contains("${PASSWORD}      s3cret\n"));
        assert!(text.contains("${USERNAME_FIELD}        id=username\n"));
        assert!(text.contains("${LOGIN_BUTTON}          css=button[type='submit']\n"));
        assert!(text.contains("[Tags]    smoke    login    generic"));
        assert!(!text.contains(VALIDATION_ERROR_MARKER));
    }

    #[test]
    fn test_login_test_trims_inputs() {
        let text = generator()
            .login_test("  https://example.com/login ", " alice ", "s3cret\n", "bootstrap")
            .into_text();
        assert!(text.contains("${URL}           https://example.com/login\n"));
        assert!(text.contains("${USERNAME}      alice\n"));
        assert!(text.contains("css=input[name='username']"));
    }

    #[test]
    fn test_unknown_skin_renders_generic_label() {
        let text = generator()
            .login_test("https://example.com", "alice", "s3cret", "<script>")
            .into_text();
        assert!(text.contains("Test login functionality for generic"));
        assert!(!text.contains("<script>"));
    }

    #[test]
    fn test_validation_short_circuits_rendering() {
        let outcome = generator().login_test("ftp://example.com", "alice", "s3cret", "generic");
        assert!(outcome.is_validation_failure());

        let text = outcome.into_text();
        assert!(text.starts_with("# VALIDATION ERROR:"));
        assert!(text.contains("http or https"));
        assert!(!text.contains("*** Settings ***"));
    }

    #[test]
    fn test_page_object_uses_skin_selectors() {
        let text = generator().login_page_object("APPLOCATOR").into_text();
        assert!(text.contains("# APPLOCATOR Application Selectors"));
        assert!(text.contains("${LOGIN_USERNAME_FIELD}    id=user-name"));
        assert!(text.contains("${LOGIN_ERROR_MESSAGE}    xpath=//h3[@data-test='error']"));
        assert!(text.contains("${LOGOUT_BUTTON}          id=logout_sidebar_link"));
    }
}
