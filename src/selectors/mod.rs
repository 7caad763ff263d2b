// ABOUTME: Selector registry module for per-skin UI element locators
// ABOUTME: Exports selector profiles, the immutable registry and its startup errors

pub mod error;
pub mod profile;
pub mod registry;

pub use error::{RegistryError, Result};
pub use profile::{SelectorProfile, SkinDefinition, APP_LOCATOR_SKIN, BOOTSTRAP_SKIN, GENERIC_SKIN};
pub use registry::{resolve_profile, SelectorRegistry};
