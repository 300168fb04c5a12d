//! Application server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ws::WebSocketUpgrade, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sitegen_client::Generator;
use sitegen_ui::{AssetPipeline, GeneratorPage, TemplateEngine};
use tokio::net::TcpListener;

use crate::session::run_session;

/// Configuration for the application server.
#[derive(Debug, Clone)]
pub struct AppServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Serve a minified stylesheet
    pub minify: bool,
}

impl Default for AppServerConfig {
    fn default() -> Self {
        Self {
            port: 7878,
            host: "127.0.0.1".to_string(),
            open: true,
            minify: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(String, std::io::Error),

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Shared server state.
struct AppState {
    generator: Arc<dyn Generator>,
    templates: Arc<TemplateEngine>,
    stylesheet: String,
    script: String,
}

/// Application server.
pub struct AppServer {
    config: AppServerConfig,
    generator: Arc<dyn Generator>,
}

impl AppServer {
    /// Create a new application server that generates with `generator`.
    pub fn new(config: AppServerConfig, generator: Arc<dyn Generator>) -> Self {
        Self { config, generator }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState {
            generator: Arc::clone(&self.generator),
            templates: Arc::new(TemplateEngine::new()),
            stylesheet: AssetPipeline::stylesheet(self.config.minify),
            script: AssetPipeline::generate_js(),
        });

        Router::new()
            .route("/", get(index_handler))
            .route("/assets/app.css", get(stylesheet_handler))
            .route("/assets/app.js", get(script_handler))
            .route("/__session", get(ws_handler))
            .route("/health", get(health_handler))
            .with_state(state)
    }

    /// Bind to the configured address and serve until shut down.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = addr
            .parse()
            .map_err(|_| ServerError::InvalidAddress(addr.clone()))?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr.to_string(), e))?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve(self, listener: TcpListener) -> Result<(), ServerError> {
        let addr = listener.local_addr().map_err(ServerError::Serve)?;
        let url = format!("http://{}", addr);

        tracing::info!("Generator running at {}", url);
        tracing::info!("Generation requests go to {}", self.generator.describe());

        if self.config.open {
            if let Err(e) = open::that(&url) {
                tracing::debug!("Could not open browser: {}", e);
            }
        }

        let app = self.router();
        axum::serve(listener, app).await.map_err(ServerError::Serve)
    }
}

/// Handler for the generator page.
async fn index_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.templates.render_document(&GeneratorPage::new()) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

async fn stylesheet_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.stylesheet.clone(),
    )
}

async fn script_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        state.script.clone(),
    )
}

/// Handler for the session WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let generator = Arc::clone(&state.generator);
    let templates = Arc::clone(&state.templates);
    ws.on_upgrade(move |socket| run_session(socket, generator, templates))
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
