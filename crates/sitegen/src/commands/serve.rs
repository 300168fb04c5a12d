//! Generator server command.

use std::sync::Arc;

use anyhow::{Context, Result};
use sitegen_client::{BackendConfig, HttpGenerator};
use sitegen_server::{AppServer, AppServerConfig};

use crate::config::ConfigFile;

/// Run the generator server.
pub async fn run(
    config: ConfigFile,
    port: Option<u16>,
    backend: Option<String>,
    open: bool,
) -> Result<()> {
    let backend = BackendConfig::new(backend.unwrap_or(config.backend.url));
    let generator =
        HttpGenerator::new(backend).context("Failed to set up generation client")?;

    // The page still works without the service; requests will just fail.
    if let Err(e) = generator.check_health().await {
        tracing::warn!("Generation service is not reachable: {}", e);
    }

    let server_config = AppServerConfig {
        port: port.unwrap_or(config.server.port),
        host: config.server.host,
        open: open && config.server.open,
        minify: config.assets.minify,
    };

    tracing::info!("Starting generator on port {}", server_config.port);

    AppServer::new(server_config, Arc::new(generator))
        .start()
        .await?;

    Ok(())
}
