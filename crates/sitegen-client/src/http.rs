//! HTTP backend for the generation service.

use async_trait::async_trait;
use sitegen_bundle::{decode_response, Bundle, GenerateRequest};

use crate::traits::{GenerateError, Generator};

/// Where the generation service listens unless configured otherwise.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Path of the generation endpoint.
pub const GENERATE_PATH: &str = "/api/generate";

/// Path of the service health check.
pub const HEALTH_PATH: &str = "/health";

/// Location of the generation service.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Scheme, host and port of the service
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL of the generation endpoint.
    pub fn generate_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), GENERATE_PATH)
    }

    /// Full URL of the health endpoint.
    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), HEALTH_PATH)
    }
}

/// Generator that POSTs prompts to a remote service.
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    config: BackendConfig,
    client: reqwest::Client,
}

impl HttpGenerator {
    /// Create a generator for the given service.
    ///
    /// No request timeout is set; a call waits as long as the service does.
    pub fn new(config: BackendConfig) -> Result<Self, GenerateError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sitegen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GenerateError::Client)?;

        Ok(Self { config, client })
    }

    /// Ask the service whether it is up.
    pub async fn check_health(&self) -> Result<(), GenerateError> {
        let url = self.config.health_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| GenerateError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Status { url, status });
        }

        Ok(())
    }
}

#[async_trait]
impl Generator for HttpGenerator {
    fn describe(&self) -> String {
        self.config.generate_url()
    }

    async fn generate(&self, prompt: &str) -> Result<Bundle, GenerateError> {
        let url = self.config.generate_url();
        tracing::debug!("POST {} ({} chars)", url, prompt.chars().count());

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest::new(prompt))
            .send()
            .await
            .map_err(|source| GenerateError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Status { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| GenerateError::Transport { url, source })?;

        Ok(decode_response(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
    use serde_json::{json, Value};

    async fn spawn_backend(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn builds_endpoint_urls() {
        let config = BackendConfig::new("http://localhost:5000/");

        assert_eq!(config.generate_url(), "http://localhost:5000/api/generate");
        assert_eq!(config.health_url(), "http://localhost:5000/health");
        assert_eq!(
            BackendConfig::default().generate_url(),
            "http://localhost:5000/api/generate"
        );
    }

    #[tokio::test]
    async fn posts_prompt_and_decodes_bundle() {
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));

        let app = Router::new()
            .route(
                "/api/generate",
                post(
                    |State(seen): State<Arc<Mutex<Vec<String>>>>,
                     Json(req): Json<GenerateRequest>| async move {
                        seen.lock().unwrap().push(req.prompt);
                        Json(json!({
                            "code": {
                                "html_code": "<h1>Hi</h1>",
                                "css_code": "h1{color:red}",
                                "js_code": ""
                            }
                        }))
                    },
                ),
            )
            .with_state(Arc::clone(&seen));

        let base = spawn_backend(app).await;
        let generator = HttpGenerator::new(BackendConfig::new(base)).unwrap();

        let bundle = generator.generate("  Create a portfolio site ").await.unwrap();

        assert_eq!(bundle, Bundle::new("<h1>Hi</h1>", "h1{color:red}", ""));
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            ["  Create a portfolio site ".to_string()]
        );
    }

    #[tokio::test]
    async fn accepts_created_website_record() {
        let app = Router::new().route(
            "/api/generate",
            post(|Json(_): Json<Value>| async {
                (
                    StatusCode::CREATED,
                    Json(json!({
                        "project": {"id": 1},
                        "website": {"html_code": "<p>x</p>", "css_code": "", "js_code": null},
                        "preview_html": "<p>x</p>"
                    })),
                )
            }),
        );

        let base = spawn_backend(app).await;
        let generator = HttpGenerator::new(BackendConfig::new(base)).unwrap();

        let bundle = generator.generate("blog").await.unwrap();

        assert_eq!(bundle, Bundle::new("<p>x</p>", "", ""));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let app = Router::new().route(
            "/api/generate",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );

        let base = spawn_backend(app).await;
        let generator = HttpGenerator::new(BackendConfig::new(base)).unwrap();

        let err = generator.generate("anything").await.unwrap_err();

        match err {
            GenerateError::Status { status, .. } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("Expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let generator = HttpGenerator::new(BackendConfig::new(format!("http://{}", addr))).unwrap();

        let err = generator.generate("anything").await.unwrap_err();

        assert!(matches!(err, GenerateError::Transport { .. }));
    }

    #[tokio::test]
    async fn undecodable_body_is_an_error() {
        let app = Router::new().route("/api/generate", post(|| async { "<html>oops</html>" }));

        let base = spawn_backend(app).await;
        let generator = HttpGenerator::new(BackendConfig::new(base)).unwrap();

        let err = generator.generate("anything").await.unwrap_err();

        assert!(matches!(err, GenerateError::Decode(_)));
    }

    #[tokio::test]
    async fn checks_health() {
        let app = Router::new().route("/health", get(|| async { Json(json!({"status": "ok"})) }));

        let base = spawn_backend(app).await;
        let generator = HttpGenerator::new(BackendConfig::new(base)).unwrap();

        assert!(generator.check_health().await.is_ok());
    }
}
