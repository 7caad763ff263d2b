// ABOUTME: Value types produced by successful validation
// ABOUTME: Each type can only be built by the validator, so holding one proves the input was checked

use serde::Serialize;
use std::fmt;

/// An http(s) URL, trimmed but otherwise exactly as the caller wrote it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedUrl(pub(super) String);

impl ValidatedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trimmed username and password that passed every credential rule
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub(super) username: String,
    pub(super) password: String,
}

impl CredentialPair {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// The password never appears in debug output or logs.
impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Which accepted selector form matched, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorShape {
    Id,
    Name,
    Class,
    Css,
    Xpath,
    Tag,
    /// Plain CSS token such as `submit-button`
    Bare,
}

impl SelectorShape {
    /// Explicit prefixes come first; the bare fallback is always last.
    pub const ORDERED: [SelectorShape; 7] = [
        SelectorShape::Id,
        SelectorShape::Name,
        SelectorShape::Class,
        SelectorShape::Css,
        SelectorShape::Xpath,
        SelectorShape::Tag,
        SelectorShape::Bare,
    ];

    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            SelectorShape::Id => Some("id="),
            SelectorShape::Name => Some("name="),
            SelectorShape::Class => Some("class="),
            SelectorShape::Css => Some("css="),
            SelectorShape::Xpath => Some("xpath="),
            SelectorShape::Tag => Some("tag="),
            SelectorShape::Bare => None,
        }
    }
}

/// A UI element locator in one of the accepted shapes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    pub(super) value: String,
    pub(super) shape: SelectorShape,
}

impl Selector {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn shape(&self) -> SelectorShape {
        self.shape
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// HTTP verbs accepted by the API integration template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request path appended to a validated base URL, e.g. `/api/v1/items`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Endpoint(pub(super) String);

impl Endpoint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Data file path handed to the DataDriver library
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DataFilePath(pub(super) String);

impl DataFilePath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
