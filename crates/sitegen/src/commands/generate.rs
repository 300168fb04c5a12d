//! One-shot generation from the terminal.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use sitegen_bundle::export_bundle;
use sitegen_client::{BackendConfig, Generator, HttpGenerator};

use crate::config::ConfigFile;

/// Run the generate command.
pub async fn run(
    config: ConfigFile,
    prompt: &str,
    output: PathBuf,
    backend: Option<String>,
) -> Result<()> {
    if prompt.trim().is_empty() {
        anyhow::bail!("Prompt must not be empty");
    }

    let backend = BackendConfig::new(backend.unwrap_or(config.backend.url));
    let generator =
        HttpGenerator::new(backend).context("Failed to set up generation client")?;

    tracing::info!("Generating with {}...", generator.describe());
    let start = Instant::now();

    let bundle = generator
        .generate(prompt)
        .await
        .context("Generation failed. Please ensure the backend is running.")?;

    let summary = export_bundle(&bundle, &output)?;

    tracing::info!(
        "Generated {} files in {}ms",
        summary.files.len(),
        start.elapsed().as_millis()
    );
    tracing::info!("Output: {}", summary.output_dir.display());
    tracing::info!("Run 'sitegen preview --dir {}' to view it.", output.display());

    Ok(())
}
