//! Client for the remote website generation service.
//!
//! The service is reached through one call: a prompt goes out, a
//! [`Bundle`](sitegen_bundle::Bundle) comes back. The [`Generator`] trait is
//! the seam the UI session talks to; [`HttpGenerator`] is the real backend.

pub mod http;
pub mod traits;

pub use http::{BackendConfig, HttpGenerator, DEFAULT_BACKEND_URL, GENERATE_PATH, HEALTH_PATH};
pub use traits::{GenerateError, Generator};
