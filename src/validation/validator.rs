// ABOUTME: Pure validation rules for URLs, credentials, selectors and API inputs
// ABOUTME: Every function trims its input and either returns a typed value or the first violated rule

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use super::error::{Result, ValidationError};
use super::types::{
    CredentialPair, DataFilePath, Endpoint, HttpMethod, Selector, SelectorShape, ValidatedUrl,
};

pub const MAX_CREDENTIAL_LENGTH: usize = 100;
pub const MAX_ENDPOINT_LENGTH: usize = 2048;
pub const MAX_DATA_FILE_PATH_LENGTH: usize = 255;

/// Characters that could break out of a Robot Framework cell or an HTML context
pub const DENYLISTED_CHARACTERS: [char; 8] = ['<', '>', '"', '\'', '&', '\n', '\r', '\t'];

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

static SELECTOR_PATTERNS: LazyLock<Vec<(SelectorShape, Regex)>> = LazyLock::new(|| {
    SelectorShape::ORDERED
        .iter()
        .map(|shape| {
            let pattern = match shape.prefix() {
                Some(prefix) => format!("^{}.+", regex::escape(prefix)),
                None => r"^\w+".to_string(),
            };
            (*shape, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Validate an http(s) URL and return the trimmed original text
pub fn validate_url(raw: &str) -> Result<ValidatedUrl> {
    let url = non_empty(raw, "URL")?;

    if let Some(character) = url.chars().find(|c| c.is_control()) {
        return Err(ValidationError::IllegalCharacter {
            field: "URL",
            character,
        });
    }

    let malformed = || ValidationError::MalformedUrl {
        url: url.to_string(),
    };

    let parsed = Url::parse(url).map_err(|_| malformed())?;

    // The parser accepts `http:host` for special schemes; require a real authority.
    let after_scheme = &url[parsed.scheme().len()..];
    let has_authority = after_scheme.starts_with("://");
    let has_host = parsed.host_str().is_some_and(|host| !host.is_empty());
    if !has_authority || !has_host {
        return Err(malformed());
    }

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(ValidationError::UnsupportedScheme {
            url: url.to_string(),
            scheme: parsed.scheme().to_string(),
        });
    }

    Ok(ValidatedUrl(url.to_string()))
}

/// Validate a username/password pair.
///
/// Rules run in order across both fields (emptiness, then length, then
/// characters) and the username is checked before the password within
/// each rule, so the reported error is always the first violated one.
pub fn validate_credentials(username: &str, password: &str) -> Result<CredentialPair> {
    let username = non_empty(username, "Username")?;
    let password = non_empty(password, "Password")?;

    within_length(username, "Username", MAX_CREDENTIAL_LENGTH)?;
    within_length(password, "Password", MAX_CREDENTIAL_LENGTH)?;

    free_of_denylisted(username, "Username")?;
    free_of_denylisted(password, "Password")?;

    Ok(CredentialPair {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Validate a selector against the accepted shapes and report which one matched
pub fn validate_selector(raw: &str) -> Result<Selector> {
    let selector = non_empty(raw, "Selector")?;

    if let Some(character) = selector.chars().find(|c| matches!(c, '\n' | '\r' | '\t')) {
        return Err(ValidationError::IllegalCharacter {
            field: "Selector",
            character,
        });
    }

    SELECTOR_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(selector))
        .map(|(shape, _)| Selector {
            value: selector.to_string(),
            shape: *shape,
        })
        .ok_or_else(|| ValidationError::InvalidSelectorShape {
            selector: selector.to_string(),
        })
}

/// Validate an HTTP verb, case-insensitively
pub fn validate_http_method(raw: &str) -> Result<HttpMethod> {
    let method = non_empty(raw, "HTTP method")?.to_ascii_uppercase();

    HttpMethod::ALL
        .into_iter()
        .find(|candidate| candidate.as_str() == method)
        .ok_or(ValidationError::UnsupportedMethod { method })
}

/// Validate an API endpoint path such as `/api/items?page=1`
pub fn validate_endpoint(raw: &str) -> Result<Endpoint> {
    let endpoint = non_empty(raw, "Endpoint")?;
    within_length(endpoint, "Endpoint", MAX_ENDPOINT_LENGTH)?;

    // Query strings legitimately carry `&` and `'`.
    let illegal = endpoint
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '<' | '>' | '"'));
    if let Some(character) = illegal {
        return Err(ValidationError::IllegalCharacter {
            field: "Endpoint",
            character,
        });
    }

    if !endpoint.starts_with('/') {
        return Err(ValidationError::MalformedEndpoint {
            endpoint: endpoint.to_string(),
            reason: "must start with '/'".to_string(),
        });
    }

    Ok(Endpoint(endpoint.to_string()))
}

/// Validate the CSV path handed to the DataDriver library
pub fn validate_data_file_path(raw: &str) -> Result<DataFilePath> {
    let path = non_empty(raw, "Data file path")?;
    within_length(path, "Data file path", MAX_DATA_FILE_PATH_LENGTH)?;
    free_of_denylisted(path, "Data file path")?;

    // Two spaces separate cells in a Robot Framework line.
    if path.contains("  ") {
        return Err(ValidationError::IllegalCharacter {
            field: "Data file path",
            character: ' ',
        });
    }

    Ok(DataFilePath(path.to_string()))
}

fn non_empty<'a>(raw: &'a str, field: &'static str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput { field });
    }
    Ok(trimmed)
}

fn within_length(value: &str, field: &'static str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

fn free_of_denylisted(value: &str, field: &'static str) -> Result<()> {
    match value.chars().find(|c| DENYLISTED_CHARACTERS.contains(c)) {
        Some(character) => Err(ValidationError::IllegalCharacter { field, character }),
        None => Ok(()),
    }
}
