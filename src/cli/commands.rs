// ABOUTME: Command implementations for the robotsmith CLI
// ABOUTME: Builds the generator from configuration and writes artifacts, lint reports and skin lists

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::info;

use super::args::ReportFormat;
use super::config::Config;
use crate::generators::{ArtifactGenerator, GenerationOutcome};
use crate::lint::lint;
use crate::selectors::SelectorRegistry;
use crate::server::StdioServer;
use crate::tools::{ToolContext, ToolRegistry};

/// Build a generator over the built-in skins plus the configured ones
pub fn build_generator(config: &Config) -> Result<ArtifactGenerator> {
    let registry = SelectorRegistry::new()
        .and_then(|registry| registry.with_definitions(&config.skins))
        .context("Invalid skin configuration")?;

    info!("Loaded {} selector skins", registry.list_skins().len());

    ArtifactGenerator::with_registry(Arc::new(registry))
        .map_err(|e| anyhow!("Failed to initialize templates: {}", e))
}

/// Write a generated artifact to a file or stdout.
///
/// Diagnostic artifacts go to stderr instead and fail the command.
pub async fn emit_artifact(outcome: GenerationOutcome, output: Option<PathBuf>) -> Result<()> {
    if !outcome.is_success() {
        let validation = outcome.is_validation_failure();
        eprintln!("{}", outcome.into_text());
        return Err(if validation {
            anyhow!("Input rejected, no artifact generated")
        } else {
            anyhow!("Artifact generation failed")
        });
    }

    let text = outcome.into_text();
    match output {
        Some(path) => {
            tokio::fs::write(&path, &text)
                .await
                .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
            info!("Artifact written to: {}", path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}

/// Lint a file, or stdin when no file is given
pub async fn lint_artifact(file: Option<PathBuf>, format: ReportFormat) -> Result<()> {
    let text = match &file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read '{}'", path.display()))?,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let report = lint(&text);
    info!(
        findings = report.findings.len(),
        verdict = %report.verdict,
        "Lint complete"
    );

    match format {
        ReportFormat::Text => print!("{}", report.to_text()),
        ReportFormat::Json => println!("{}", report.to_json(true)?),
    }

    if report.has_errors() {
        return Err(anyhow!(
            "Lint failed with {} error(s)",
            report.errors().count()
        ));
    }

    Ok(())
}

/// Print the known skin names, one per line
pub fn list_skins(generator: &ArtifactGenerator) -> Result<()> {
    for skin in generator.registry().list_skins() {
        println!("{}", skin);
    }
    Ok(())
}

/// Run the stdio server until stdin closes
pub async fn serve(generator: ArtifactGenerator, config: &Config) -> Result<()> {
    let context = ToolContext::new(generator)
        .with_default_skin(config.default_skin.clone())
        .with_default_data_file(config.default_data_file.clone());
    let server = StdioServer::new(Arc::new(ToolRegistry::new(context)));

    let handled = server.run().await.context("Server stopped unexpectedly")?;
    info!("Handled {} requests", handled);
    Ok(())
}
