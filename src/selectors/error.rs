// ABOUTME: Error types for building the selector registry
// ABOUTME: Raised only at startup while loading configured skins, never during lookup

use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug, Clone)]
pub enum RegistryError {
    #[error("Skin '{skin}' has an invalid {field}: {source}")]
    InvalidSelector {
        skin: String,
        field: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("Skin '{skin}' is built in and cannot be redefined")]
    ReservedSkin { skin: String },

    #[error("Skin '{skin}' clashes with configured skin '{existing}' (names ignore case)")]
    DuplicateSkin { skin: String, existing: String },

    #[error("Skin name cannot be empty")]
    EmptySkinName,
}

pub type Result<T> = std::result::Result<T, RegistryError>;
