// ABOUTME: Read-only registry mapping skin names to selector profiles
// ABOUTME: Case-insensitive lookup with a lenient fallback to the generic skin

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, LazyLock};
use tracing::debug;

use super::error::{RegistryError, Result};
use super::profile::{builtin_definitions, SelectorProfile, SkinDefinition, GENERIC_SKIN};

static BUILTIN_REGISTRY: LazyLock<SelectorRegistry> = LazyLock::new(SelectorRegistry::default);

/// Resolve a skin against the built-in profiles only
pub fn resolve_profile(skin: &str) -> &'static SelectorProfile {
    BUILTIN_REGISTRY.resolve_profile(skin)
}

#[derive(Debug, Clone)]
pub struct SelectorRegistry {
    profiles: HashMap<String, Arc<SelectorProfile>>,
    fallback: Arc<SelectorProfile>,
}

impl SelectorRegistry {
    /// Create a registry holding the built-in skins
    pub fn new() -> Result<Self> {
        let mut profiles = HashMap::new();
        for (name, definition) in builtin_definitions() {
            let profile = SelectorProfile::from_definition(name, &definition)?;
            profiles.insert(lookup_key(name), Arc::new(profile));
        }

        let fallback = Arc::clone(&profiles[GENERIC_SKIN]);

        Ok(Self { profiles, fallback })
    }

    /// Add configured skins. Built-in names cannot be redefined.
    pub fn with_definitions(mut self, definitions: &BTreeMap<String, SkinDefinition>) -> Result<Self> {
        for (name, definition) in definitions {
            let name = name.trim();
            if name.is_empty() {
                return Err(RegistryError::EmptySkinName);
            }

            let key = lookup_key(name);
            if builtin_definitions()
                .iter()
                .any(|(builtin, _)| lookup_key(builtin) == key)
            {
                return Err(RegistryError::ReservedSkin {
                    skin: name.to_string(),
                });
            }

            if let Some(existing) = self.profiles.get(&key) {
                return Err(RegistryError::DuplicateSkin {
                    skin: name.to_string(),
                    existing: existing.name.clone(),
                });
            }

            let profile = SelectorProfile::from_definition(name, definition)?;
            debug!("Registered configured skin: {}", name);
            self.profiles.insert(key, Arc::new(profile));
        }
        Ok(self)
    }

    /// Look up a skin by name, ignoring case; unknown skins get the generic profile
    pub fn resolve_profile(&self, skin: &str) -> &SelectorProfile {
        match self.profiles.get(&lookup_key(skin)) {
            Some(profile) => profile.as_ref(),
            None => {
                debug!("Unknown skin '{}', falling back to {}", skin, GENERIC_SKIN);
                self.fallback.as_ref()
            }
        }
    }

    /// Whether the skin resolves to its own profile rather than the fallback
    pub fn contains(&self, skin: &str) -> bool {
        self.profiles.contains_key(&lookup_key(skin))
    }

    pub fn list_skins(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.values().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for SelectorRegistry {
    fn default() -> Self {
        Self::new().expect("Built-in selector profiles must be valid")
    }
}

fn lookup_key(skin: &str) -> String {
    skin.trim().to_lowercase()
}
