//! Configuration file loading (sitegen.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use sitegen_client::DEFAULT_BACKEND_URL;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub assets: AssetSettings,
}

#[derive(Debug, Deserialize)]
pub struct BackendSettings {
    /// Base URL of the generation service
    #[serde(default = "default_backend_url")]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub open: bool,
}

#[derive(Debug, Deserialize)]
pub struct AssetSettings {
    #[serde(default = "default_true")]
    pub minify: bool,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    7878
}
fn default_true() -> bool {
    true
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open: true,
        }
    }
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self { minify: true }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

pub const DEFAULT_CONFIG: &str = r#"# sitegen configuration

[backend]
# Base URL of the generation service (POST /api/generate)
url = "http://localhost:5000"

[server]
# Address the generator page is served on
host = "127.0.0.1"
port = 7878

# Open the browser on start
open = true

[assets]
# Serve a minified stylesheet
minify = true
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("sitegen.toml")).unwrap();

        assert_eq!(config.backend.url, "http://localhost:5000");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7878);
        assert!(config.server.open);
        assert!(config.assets.minify);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("sitegen.toml");
        fs::write(&path, "[backend]\nurl = \"http://10.0.0.2:8000\"\n\n[server]\nport = 9000\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.backend.url, "http://10.0.0.2:8000");
        assert_eq!(config.server.port, 9000);
        assert!(config.server.open);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("sitegen.toml");
        fs::write(&path, "[server]\nport = \"many\"\n").unwrap();

        let err = load_config(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn default_config_parses() {
        let config: ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.backend.url, DEFAULT_BACKEND_URL);
        assert_eq!(config.server.port, 7878);
    }
}
