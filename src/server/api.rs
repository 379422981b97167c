//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::core::handler::TranslationRequestHandler;
use crate::core::models::{TranslationRequest, TranslationResult};

/// Application state
#[derive(Clone)]
pub struct AppState {
    handler: TranslationRequestHandler,
}

impl AppState {
    pub fn new(handler: TranslationRequestHandler) -> Self {
        Self { handler }
    }
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
    version: String,
    provider: String,
}

/// Languages list response
#[derive(Serialize)]
pub struct LanguagesResponse {
    languages: Vec<String>,
}

/// Translation request body; missing languages yield a prompt, not a 4xx
#[derive(Deserialize)]
pub struct TranslateBody {
    #[serde(default)]
    pub text: String,
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
}

/// Health check handler
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: state.handler.provider_name().to_string(),
    })
}

/// Get languages handler
async fn get_languages(State(state): State<Arc<AppState>>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: state
            .handler
            .supported_languages()
            .into_iter()
            .map(String::from)
            .collect(),
    })
}

/// Translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateBody>,
) -> Json<TranslationResult> {
    let request = TranslationRequest {
        text: payload.text,
        source_lang: payload.source_lang,
        target_lang: payload.target_lang,
    };

    Json(state.handler.handle(&request).await)
}

/// Build the router
pub fn router(handler: TranslationRequestHandler) -> Router {
    let state = Arc::new(AppState::new(handler));

    Router::new()
        .route("/", get(health_check))
        .route("/v1/languages", get(get_languages))
        .route("/v1/translate", post(translate))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(handler: TranslationRequestHandler, host: String, port: u16) -> anyhow::Result<()> {
    let app = router(handler);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
