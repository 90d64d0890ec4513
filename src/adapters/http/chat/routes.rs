//! Axum routes for the chat relay endpoint.

use axum::routing::post;
use axum::Router;

use super::handlers::{relay_chat, ChatAppState};

/// Creates the chat relay router.
///
/// Routes:
/// - `POST /api/chat` - relay an action envelope to the upstream agent
pub fn chat_router() -> Router<ChatAppState> {
    Router::new().route("/api/chat", post(relay_chat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{AgentError, AgentGateway};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::sync::Mutex;
    use tower::ServiceExt;

    // ───────────────────────────────────────────────────────────────
    // Mock gateways
    // ───────────────────────────────────────────────────────────────

    /// Counts outbound calls and answers with fixed bodies.
    #[derive(Default)]
    struct RecordingGateway {
        create_calls: Mutex<u32>,
        run_calls: Mutex<u32>,
    }

    impl RecordingGateway {
        fn create_calls(&self) -> u32 {
            *self.create_calls.lock().unwrap()
        }

        fn run_calls(&self) -> u32 {
            *self.run_calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl AgentGateway for RecordingGateway {
        async fn create_thread(&self) -> Result<Value, AgentError> {
            *self.create_calls.lock().unwrap() += 1;
            Ok(json!({ "thread_id": "t-mock" }))
        }

        async fn run_thread(
            &self,
            _thread_id: &str,
            _message: Option<&str>,
        ) -> Result<Value, AgentError> {
            *self.run_calls.lock().unwrap() += 1;
            Ok(json!({ "status": "success" }))
        }
    }

    /// Fails every call with an upstream-status error.
    struct FailingGateway;

    #[async_trait]
    impl AgentGateway for FailingGateway {
        async fn create_thread(&self) -> Result<Value, AgentError> {
            Err(AgentError::ThreadCreate(502))
        }

        async fn run_thread(
            &self,
            _thread_id: &str,
            _message: Option<&str>,
        ) -> Result<Value, AgentError> {
            Err(AgentError::RunWait(404))
        }
    }

    async fn post_chat(
        app: Router,
        body: Value,
    ) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn app_with(gateway: Arc<dyn AgentGateway>) -> Router {
        chat_router().with_state(ChatAppState::new(gateway))
    }

    // ───────────────────────────────────────────────────────────────
    // Tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn missing_secrets_answers_fixed_500() {
        let app = chat_router().with_state(ChatAppState::unconfigured());

        let (status, body) = post_chat(app, json!({ "action": "create_thread" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Server Config Error: Missing Secrets" }));
    }

    #[tokio::test]
    async fn invalid_action_answers_400_without_outbound_call() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = app_with(gateway.clone());

        let (status, body) = post_chat(app, json!({ "action": "archive_thread" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid action" }));
        assert_eq!(gateway.create_calls(), 0);
        assert_eq!(gateway.run_calls(), 0);
    }

    #[tokio::test]
    async fn missing_action_answers_400() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = app_with(gateway.clone());

        let (status, body) = post_chat(app, json!({ "message": "hello" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid action" }));
        assert_eq!(gateway.run_calls(), 0);
    }

    #[tokio::test]
    async fn missing_thread_id_answers_400_without_outbound_call() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = app_with(gateway.clone());

        let (status, body) =
            post_chat(app, json!({ "action": "send_message", "threadId": "" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing Thread ID" }));
        assert_eq!(gateway.run_calls(), 0);
    }

    #[tokio::test]
    async fn create_thread_passes_upstream_body_through() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = app_with(gateway.clone());

        let (status, body) = post_chat(app, json!({ "action": "create_thread" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "thread_id": "t-mock" }));
        assert_eq!(gateway.create_calls(), 1);
    }

    #[tokio::test]
    async fn send_message_passes_upstream_body_through() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = app_with(gateway.clone());

        let (status, body) = post_chat(
            app,
            json!({ "action": "send_message", "threadId": "t1", "message": "hi" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "success" }));
        assert_eq!(gateway.run_calls(), 1);
    }

    #[tokio::test]
    async fn upstream_failure_answers_500_with_branch_message() {
        let app = app_with(Arc::new(FailingGateway));

        let (status, body) = post_chat(
            app,
            json!({ "action": "send_message", "threadId": "t1", "message": "hi" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "LangGraph Run Error: 404" }));
    }

    #[tokio::test]
    async fn thread_creation_failure_answers_500_with_branch_message() {
        let app = app_with(Arc::new(FailingGateway));

        let (status, body) = post_chat(app, json!({ "action": "create_thread" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "LangGraph Init Error: 502" }));
    }
}
