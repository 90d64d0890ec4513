//! HTTP adapters - inbound REST surface.

pub mod chat;

// Re-export key types for convenience
pub use chat::chat_router;
pub use chat::ChatAppState;

use axum::routing::get;
use axum::{Json, Router};
use http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Builds the full API router: the chat relay plus a liveness probe.
pub fn api_router(state: ChatAppState) -> Router {
    Router::new()
        .merge(chat_router())
        .route("/health", get(health))
        .with_state(state)
}

/// CORS policy gate: only the configured origins, only `POST`/`OPTIONS`,
/// and only a `Content-Type` request header.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Liveness probe.
///
/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
