//! Outbound port for the upstream conversational agent service.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failures talking to the upstream agent service.
///
/// Non-success upstream statuses are carried as data and inspected by the
/// caller; transport variants preserve the underlying error message
/// verbatim. Both surface to the relay caller as the body of a 500.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Thread creation answered with a non-success status.
    #[error("LangGraph Init Error: {0}")]
    ThreadCreate(u16),

    /// Run execution answered with a non-success status.
    #[error("LangGraph Run Error: {0}")]
    RunWait(u16),

    /// Network failure or undecodable response body.
    #[error("{0}")]
    Transport(String),
}

/// Gateway to the upstream agent service.
///
/// Each method performs exactly one outbound call; failures are terminal
/// for the request that triggered them.
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Create a new conversation thread; returns the upstream thread
    /// descriptor verbatim.
    async fn create_thread(&self) -> Result<Value, AgentError>;

    /// Run the configured assistant against a thread and wait for the
    /// result.
    ///
    /// `message` is forwarded as received; an absent message is omitted
    /// from the run input rather than rejected.
    async fn run_thread(
        &self,
        thread_id: &str,
        message: Option<&str>,
    ) -> Result<Value, AgentError>;
}
