// ABOUTME: Selector profile records describing the login-flow elements of one skin
// ABOUTME: Provides the built-in skins and conversion from configured skin definitions

use serde::{Deserialize, Serialize};

use super::error::{RegistryError, Result};
use crate::validation::{validate_selector, Selector};

/// Raw selector strings for one skin, as written in a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinDefinition {
    pub username_field: String,
    pub password_field: String,
    pub login_button: String,
    pub success_indicator: String,
    pub error_message: String,
    pub logout_button: String,
}

/// Validated locators for the six standard login-flow elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorProfile {
    pub name: String,
    pub username_field: Selector,
    pub password_field: Selector,
    pub login_button: Selector,
    pub success_indicator: Selector,
    pub error_message: Selector,
    pub logout_button: Selector,
}

impl SelectorProfile {
    /// Validate every selector of a definition
    pub fn from_definition(name: &str, definition: &SkinDefinition) -> Result<Self> {
        let field = |field: &'static str, raw: &str| {
            validate_selector(raw).map_err(|source| RegistryError::InvalidSelector {
                skin: name.to_string(),
                field,
                source,
            })
        };

        Ok(Self {
            name: name.to_string(),
            username_field: field("username_field", &definition.username_field)?,
            password_field: field("password_field", &definition.password_field)?,
            login_button: field("login_button", &definition.login_button)?,
            success_indicator: field("success_indicator", &definition.success_indicator)?,
            error_message: field("error_message", &definition.error_message)?,
            logout_button: field("logout_button", &definition.logout_button)?,
        })
    }
}

pub const APP_LOCATOR_SKIN: &str = "appLocator";
pub const GENERIC_SKIN: &str = "generic";
pub const BOOTSTRAP_SKIN: &str = "bootstrap";

pub(super) fn builtin_definitions() -> [(&'static str, SkinDefinition); 3] {
    [
        (
            APP_LOCATOR_SKIN,
            definition(
                "id=user-name",
                "id=password",
                "id=login-button",
                "xpath=//span[@class='title']",
                "xpath=//h3[@data-test='error']",
                "id=logout_sidebar_link",
            ),
        ),
        (
            GENERIC_SKIN,
            definition(
                "id=username",
                "id=password",
                "css=button[type='submit']",
                "css=.dashboard",
                "css=.error",
                "css=.logout",
            ),
        ),
        (
            BOOTSTRAP_SKIN,
            definition(
                "css=input[name='username']",
                "css=input[name='password']",
                "css=.btn-primary",
                "css=.navbar-brand",
                "css=.alert-danger",
                "css=.btn-outline-secondary",
            ),
        ),
    ]
}

fn definition(
    username_field: &str,
    password_field: &str,
    login_button: &str,
    success_indicator: &str,
    error_message: &str,
    logout_button: &str,
) -> SkinDefinition {
    SkinDefinition {
        username_field: username_field.to_string(),
        password_field: password_field.to_string(),
        login_button: login_button.to_string(),
        success_indicator: success_indicator.to_string(),
        error_message: error_message.to_string(),
        logout_button: logout_button.to_string(),
    }
}
