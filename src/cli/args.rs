// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for robotsmith

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "robotsmith")]
#[command(about = "Generate and lint Robot Framework test suites for web login flows")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a complete login test case
    LoginTest {
        #[arg(long, help = "Login page URL (http or https)")]
        url: String,

        #[arg(long, help = "Username to type into the login form")]
        username: String,

        #[arg(long, env = "ROBOTSMITH_PASSWORD", hide_env_values = true, help = "Password to type into the login form")]
        password: String,

        #[arg(long, help = "Selector skin (defaults to the configured skin)")]
        skin: Option<String>,

        #[arg(short, long, help = "Write the artifact to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Generate page object keywords for a login page
    PageObject {
        #[arg(long, help = "Selector skin (defaults to the configured skin)")]
        skin: Option<String>,

        #[arg(short, long, help = "Write the artifact to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Generate the advanced Selenium keyword library
    AdvancedKeywords {
        #[arg(short, long, help = "Write the artifact to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Generate the extended keyword library
    ExtendedKeywords {
        #[arg(short, long, help = "Write the artifact to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Generate a performance monitoring test suite
    PerformanceTest {
        #[arg(short, long, help = "Write the artifact to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Generate a data-driven login test suite
    DataDriven {
        #[arg(long, help = "CSV data file read by DataDriver (defaults to the configured file)")]
        data_file: Option<String>,

        #[arg(short, long, help = "Write the artifact to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Generate an API and UI integration test
    ApiTest {
        #[arg(long, help = "Base URL of the API and UI (http or https)")]
        base_url: String,

        #[arg(long, help = "API endpoint path, starting with '/'")]
        endpoint: String,

        #[arg(long, default_value = "GET", help = "HTTP method of the API call")]
        method: String,

        #[arg(short, long, help = "Write the artifact to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Check a Robot Framework file for common syntax mistakes
    Lint {
        #[arg(help = "File to check (reads stdin when omitted)")]
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ReportFormat::Text, help = "Report format")]
        format: ReportFormat,
    },

    /// List the known selector skins
    Skins,

    /// Serve the tool surface as line-delimited JSON over stdin/stdout
    Serve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
