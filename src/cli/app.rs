// ABOUTME: Main application orchestration for robotsmith CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Initialize logging based on configuration.
    ///
    /// Logs always go to stderr; stdout is reserved for artifacts and protocol lines.
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        match self.config.logging.format.as_str() {
            "compact" => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(env_filter)
                    .with_writer(std::io::stderr)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .init();
            }
            _ => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_writer(std::io::stderr)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .init();
            }
        }

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub async fn run(&self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting robotsmith v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        // Lint needs no templates or skins, so the generator is built per command
        let generator = || commands::build_generator(&self.config);
        let default_skin = self.config.default_skin.as_str();

        match args.command {
            Commands::LoginTest {
                url,
                username,
                password,
                skin,
                output,
            } => {
                let skin = skin.as_deref().unwrap_or(default_skin);
                commands::emit_artifact(
                    generator()?.login_test(&url, &username, &password, skin),
                    output,
                )
                .await
            }

            Commands::PageObject { skin, output } => {
                let skin = skin.as_deref().unwrap_or(default_skin);
                commands::emit_artifact(generator()?.login_page_object(skin), output).await
            }

            Commands::AdvancedKeywords { output } => {
                commands::emit_artifact(generator()?.advanced_keyword_library(), output).await
            }

            Commands::ExtendedKeywords { output } => {
                commands::emit_artifact(generator()?.extended_keyword_library(), output).await
            }

            Commands::PerformanceTest { output } => {
                commands::emit_artifact(generator()?.performance_monitoring_test(), output).await
            }

            Commands::DataDriven { data_file, output } => {
                let data_file = data_file
                    .as_deref()
                    .unwrap_or(&self.config.default_data_file);
                commands::emit_artifact(generator()?.data_driven_test(data_file), output).await
            }

            Commands::ApiTest {
                base_url,
                endpoint,
                method,
                output,
            } => {
                commands::emit_artifact(
                    generator()?.api_integration_test(&base_url, &endpoint, &method),
                    output,
                )
                .await
            }

            Commands::Lint { file, format } => commands::lint_artifact(file, format).await,

            Commands::Skins => commands::list_skins(&generator()?),

            Commands::Serve => commands::serve(generator()?, &self.config).await,
        }
    }

    /// Create application and parse command line arguments
    pub fn from_args() -> Result<(Self, Args)> {
        let args = Args::parse_args();
        let config = Config::load(args.config.clone())?;
        Ok((Self::new(config), args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_app_creation() {
        let app = App::new(Config::default());
        assert_eq!(app.config().default_skin, "appLocator");
    }

    #[test]
    fn test_app_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("robotsmith.yaml");

        let config_content = r#"
default_skin: bootstrap
default_data_file: users.csv
logging:
  level: debug
  format: compact
"#;

        fs::write(&config_path, config_content).unwrap();

        let app = App::new(Config::load(Some(config_path)).unwrap());
        assert_eq!(app.config().default_skin, "bootstrap");
        assert_eq!(app.config().default_data_file, "users.csv");
        assert_eq!(app.config().logging.level, "debug");
        assert_eq!(app.config().logging.format, "compact");
    }
}
