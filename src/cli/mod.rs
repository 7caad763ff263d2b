// ABOUTME: CLI module for the robotsmith test suite generator
// ABOUTME: Exports command line interface components and main application logic

pub mod app;
pub mod args;
pub mod commands;
pub mod config;

pub use app::App;
pub use args::{Args, Commands, ReportFormat};
pub use config::{Config, LoggingConfig};
