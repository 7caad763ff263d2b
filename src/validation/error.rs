// ABOUTME: Error types for caller input validation
// ABOUTME: Each variant names the rule that rejected the input and the offending field

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("Invalid URL format: {url}")]
    MalformedUrl { url: String },

    #[error("URL must use http or https protocol: {url}")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("{field} too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} contains invalid character: {}", printable(.character))]
    IllegalCharacter {
        field: &'static str,
        character: char,
    },

    #[error("Invalid selector format: {selector}")]
    InvalidSelectorShape { selector: String },

    #[error("Unsupported HTTP method '{method}'. Supported methods: GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS")]
    UnsupportedMethod { method: String },

    #[error("Invalid endpoint '{endpoint}': {reason}")]
    MalformedEndpoint { endpoint: String, reason: String },
}

impl ValidationError {
    /// Short, stable name of the rule that failed
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput { .. } => "EmptyInput",
            ValidationError::MalformedUrl { .. } => "MalformedURL",
            ValidationError::UnsupportedScheme { .. } => "UnsupportedScheme",
            ValidationError::TooLong { .. } => "TooLong",
            ValidationError::IllegalCharacter { .. } => "IllegalCharacter",
            ValidationError::InvalidSelectorShape { .. } => "InvalidSelectorShape",
            ValidationError::UnsupportedMethod { .. } => "UnsupportedMethod",
            ValidationError::MalformedEndpoint { .. } => "MalformedEndpoint",
        }
    }
}

/// Control characters are spelled out so the diagnostic stays on one line
fn printable(character: &char) -> String {
    match *character {
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        c if c.is_control() => format!("U+{:04X}", c as u32),
        c => c.to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = ValidationError::EmptyInput { field: "Username" };
        assert_eq!(err.to_string(), "Username cannot be empty");

        let err = ValidationError::TooLong {
            field: "Password",
            max: 100,
        };
        assert_eq!(err.to_string(), "Password too long (max 100 characters)");
    }

    #[test]
    fn test_control_characters_are_escaped() {
        let err = ValidationError::IllegalCharacter {
            field: "Credentials",
            character: '\n',
        };
        assert_eq!(err.to_string(), "Credentials contains invalid character: \\n");
        assert!(!err.to_string().contains('\n'));
    }

    #[test]
    fn test_kind_names() {
        let err = ValidationError::MalformedUrl {
            url: "nope".to_string(),
        };
        assert_eq!(err.kind(), "MalformedURL");
    }
}
