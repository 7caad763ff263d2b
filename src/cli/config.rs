// ABOUTME: Configuration management for robotsmith
// ABOUTME: Loads YAML settings, extra skins and environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::generators::{DEFAULT_DATA_FILE, DEFAULT_SKIN};
use crate::selectors::SkinDefinition;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_skin")]
    pub default_skin: String,

    #[serde(default = "default_data_file")]
    pub default_data_file: String,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub skins: BTreeMap<String, SkinDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_skin() -> String {
    DEFAULT_SKIN.to_string()
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_skin: default_skin(),
            default_data_file: default_data_file(),
            logging: LoggingConfig::default(),
            skins: BTreeMap::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => Some(p),
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::from_yaml(&contents)
                    .with_context(|| format!("Invalid config file {}", path.display()))?
            }
            _ => Config::default(),
        };

        config.merge_env();
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty file parses as null
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".robotsmith").join("config.yaml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        [
            "robotsmith.yaml",
            "robotsmith.yml",
            ".robotsmith.yaml",
            ".robotsmith.yml",
        ]
        .into_iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        if let Ok(level) = std::env::var("ROBOTSMITH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ROBOTSMITH_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(skin) = std::env::var("ROBOTSMITH_DEFAULT_SKIN") {
            self.default_skin = skin;
        }
        if let Ok(data_file) = std::env::var("ROBOTSMITH_DEFAULT_DATA_FILE") {
            self.default_data_file = data_file;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_skin, "appLocator");
        assert_eq!(config.default_data_file, "test_data.csv");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.skins.is_empty());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("logging:\n  level: debug\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.default_skin, "appLocator");
    }

    #[test]
    fn test_empty_yaml() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.default_data_file, "test_data.csv");
    }

    #[test]
    fn test_load_with_skins() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("robotsmith.yaml");

        let config_content = r#"
default_skin: material
skins:
  material:
    username_field: "css=input[name='email']"
    password_field: "css=input[name='pass']"
    login_button: "xpath=//button[@type='submit']"
    success_indicator: "css=.mdc-top-app-bar"
    error_message: "css=.mdc-snackbar"
    logout_button: "id=sign-out"
"#;
        fs::write(&config_path, config_content).unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.skins.len(), 1);
        assert_eq!(config.skins["material"].logout_button, "id=sign-out");
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("robotsmith.yaml");
        fs::write(&config_path, "skins: [not, a, map]").unwrap();

        assert!(Config::load(Some(config_path)).is_err());
    }

    #[test]
    fn test_missing_explicit_file_yields_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = Config::load(Some(temp_dir.path().join("absent.yaml"))).unwrap();
        assert!(config.skins.is_empty());
    }
}
