//! HTTP handlers for the chat relay endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::ports::AgentGateway;

use super::dto::{ChatAction, ChatRequest, ErrorBody};

/// Fixed body returned while the upstream secrets are unconfigured.
const MISSING_SECRETS: &str = "Server Config Error: Missing Secrets";

/// Application state for the chat relay.
///
/// `gateway` is `None` when the upstream secrets were absent at startup;
/// every relay request then answers with the configuration error until
/// the process is restarted with a complete environment.
#[derive(Clone)]
pub struct ChatAppState {
    /// Upstream agent gateway (absent while unconfigured).
    pub gateway: Option<Arc<dyn AgentGateway>>,
}

impl ChatAppState {
    /// State with a configured upstream gateway.
    pub fn new(gateway: Arc<dyn AgentGateway>) -> Self {
        Self {
            gateway: Some(gateway),
        }
    }

    /// State for a process started without the upstream secrets.
    pub fn unconfigured() -> Self {
        Self { gateway: None }
    }
}

/// Relay one action envelope to the upstream agent service.
///
/// POST /api/chat
///
/// Exactly one outbound call is issued per accepted request; the upstream
/// JSON body is returned verbatim on success. Every failure produces a
/// `{"error": ...}` body: 400 for an invalid envelope, 500 for missing
/// configuration, upstream non-success statuses and transport failures.
pub async fn relay_chat(
    State(state): State<ChatAppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let Some(gateway) = state.gateway else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new(MISSING_SECRETS)),
        )
            .into_response();
    };

    let action = match request.resolve() {
        Ok(action) => action,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new(err.to_string())),
            )
                .into_response();
        }
    };

    let result = match &action {
        ChatAction::CreateThread => gateway.create_thread().await,
        ChatAction::SendMessage { thread_id, message } => {
            gateway.run_thread(thread_id, message.as_deref()).await
        }
    };

    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "upstream relay call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(err.to_string())),
            )
                .into_response()
        }
    }
}
