// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides scratch directories, config builders and a handle on the built binary

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::io::Write;
use tempfile::TempDir;

use robotsmith::{ArtifactGenerator, Config, SelectorRegistry, SkinDefinition};

pub const BINARY: &str = env!("CARGO_BIN_EXE_robotsmith");

pub fn generator() -> ArtifactGenerator {
    ArtifactGenerator::new().expect("built-in templates must compile")
}

pub fn material_skin() -> SkinDefinition {
    SkinDefinition {
        username_field: "css=input[name='email']".to_string(),
        password_field: "css=input[name='pass']".to_string(),
        login_button: "xpath=//button[@type='submit']".to_string(),
        success_indicator: "css=.mdc-top-app-bar".to_string(),
        error_message: "css=.mdc-snackbar".to_string(),
        logout_button: "id=sign-out".to_string(),
    }
}

pub fn registry_with(skins: &[(&str, SkinDefinition)]) -> SelectorRegistry {
    let definitions: BTreeMap<String, SkinDefinition> = skins
        .iter()
        .map(|(name, definition)| (name.to_string(), definition.clone()))
        .collect();
    SelectorRegistry::new()
        .unwrap()
        .with_definitions(&definitions)
        .unwrap()
}

pub struct TestConfigBuilder {
    config: Config,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_default_skin(mut self, skin: &str) -> Self {
        self.config.default_skin = skin.to_string();
        self
    }

    pub fn with_default_data_file(mut self, data_file: &str) -> Self {
        self.config.default_data_file = data_file.to_string();
        self
    }

    pub fn with_skin(mut self, name: &str, definition: SkinDefinition) -> Self {
        self.config.skins.insert(name.to_string(), definition);
        self
    }

    pub fn to_yaml(&self) -> String {
        serde_yaml::to_string(&self.config).unwrap()
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.file(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    pub fn write_config(&self, builder: &TestConfigBuilder) -> PathBuf {
        self.write_file("robotsmith.yaml", &builder.to_yaml())
    }

    /// Run the binary from inside the scratch directory with a clean environment
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_stdin(args, "")
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = Command::new(BINARY)
            .args(args)
            .current_dir(self.path())
            .env("HOME", self.path())
            .env_remove("RUST_LOG")
            .env_remove("ROBOTSMITH_DEFAULT_SKIN")
            .env_remove("ROBOTSMITH_DEFAULT_DATA_FILE")
            .env_remove("ROBOTSMITH_PASSWORD")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start robotsmith");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");

        child.wait_with_output().expect("Failed to wait for robotsmith")
    }
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
