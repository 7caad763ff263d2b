// ABOUTME: Input validation module for untrusted caller-supplied values
// ABOUTME: Exports the validation rules, the validated value types and their error type

pub mod error;
pub mod types;
pub mod validator;

pub use error::{Result, ValidationError};
pub use types::{
    CredentialPair, DataFilePath, Endpoint, HttpMethod, Selector, SelectorShape, ValidatedUrl,
};
pub use validator::{
    validate_credentials, validate_data_file_path, validate_endpoint, validate_http_method,
    validate_selector, validate_url, DENYLISTED_CHARACTERS, MAX_CREDENTIAL_LENGTH,
};
