//! The generation seam.

use async_trait::async_trait;
use sitegen_bundle::{Bundle, DecodeError};

/// Errors that can occur during a generation call.
///
/// The variants only matter for logs. Callers surface every one of them the
/// same way: the generation request failed.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Generation service at {url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode generation response: {0}")]
    Decode(#[from] DecodeError),

    #[error("Generation failed: {0}")]
    Other(String),
}

/// Something that turns a prompt into a bundle.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Human-readable description of where requests go (for logs)
    fn describe(&self) -> String;

    /// Issue one generation call for `prompt`.
    ///
    /// The prompt is sent exactly as given. No retries.
    async fn generate(&self, prompt: &str) -> Result<Bundle, GenerateError>;
}
