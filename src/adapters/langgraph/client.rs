//! LangGraph Client - Implementation of [`AgentGateway`] for a LangGraph
//! deployment.
//!
//! Issues `POST {base_url}/threads` to mint conversation threads and
//! `POST {base_url}/threads/{id}/runs/wait` to execute the configured
//! assistant synchronously against a thread. Responses are opaque to the
//! relay and returned verbatim.
//!
//! # Configuration
//!
//! ```ignore
//! let config = LangGraphConfig::new(api_key, "https://agent.example.com")
//!     .with_assistant_id("sales-assistant");
//!
//! let client = LangGraphClient::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use serde_json::Value;

use crate::ports::{AgentError, AgentGateway};

/// Configuration for the LangGraph client.
#[derive(Debug, Clone)]
pub struct LangGraphConfig {
    /// API key injected into every outbound call.
    api_key: Secret<String>,
    /// Base URL of the LangGraph deployment.
    pub base_url: String,
    /// Assistant executed on each run, when configured.
    pub assistant_id: Option<String>,
}

impl LangGraphConfig {
    /// Creates a new configuration with the given API key and base URL.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: base_url.into(),
            assistant_id: None,
        }
    }

    /// Sets the assistant executed on each run.
    pub fn with_assistant_id(mut self, assistant_id: impl Into<String>) -> Self {
        self.assistant_id = Some(assistant_id.into());
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Strategy applied when a run targets a thread that is already busy.
const MULTITASK_STRATEGY: &str = "enqueue";

/// LangGraph API client.
pub struct LangGraphClient {
    config: LangGraphConfig,
    client: Client,
}

impl LangGraphClient {
    /// Creates a new client with the given configuration.
    ///
    /// No request timeout is configured: runs are awaited synchronously
    /// upstream and can legitimately outlast any short client deadline.
    pub fn new(config: LangGraphConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Builds the thread-creation endpoint URL.
    fn threads_url(&self) -> String {
        format!("{}/threads", self.config.base_url.trim_end_matches('/'))
    }

    /// Builds the synchronous run endpoint URL for a thread.
    fn runs_url(&self, thread_id: &str) -> String {
        format!(
            "{}/threads/{}/runs/wait",
            self.config.base_url.trim_end_matches('/'),
            thread_id
        )
    }

    /// Issues one credentialed JSON POST.
    async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<Response, AgentError> {
        self.client
            .post(url)
            .header("X-Api-Key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| AgentError::Transport(e.to_string()))
    }

    /// Decodes the upstream JSON body without imposing a schema.
    async fn decode_body(response: Response) -> Result<Value, AgentError> {
        response
            .json()
            .await
            .map_err(|e| AgentError::Transport(e.to_string()))
    }
}

#[async_trait]
impl AgentGateway for LangGraphClient {
    async fn create_thread(&self) -> Result<Value, AgentError> {
        let response = self
            .post_json(&self.threads_url(), &serde_json::json!({}))
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::ThreadCreate(status.as_u16()));
        }

        let body = Self::decode_body(response).await?;
        tracing::debug!("upstream thread created");
        Ok(body)
    }

    async fn run_thread(
        &self,
        thread_id: &str,
        message: Option<&str>,
    ) -> Result<Value, AgentError> {
        let request = RunRequest {
            assistant_id: self.config.assistant_id.as_deref(),
            multitask_strategy: MULTITASK_STRATEGY,
            input: RunInput {
                messages: vec![RunMessage {
                    role: "user",
                    content: message,
                }],
            },
        };

        let response = self.post_json(&self.runs_url(thread_id), &request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::RunWait(status.as_u16()));
        }

        let body = Self::decode_body(response).await?;
        tracing::debug!(thread_id, "upstream run completed");
        Ok(body)
    }
}

/// Body for `POST /threads/{id}/runs/wait`.
///
/// Absent values are omitted from the serialized body entirely, matching
/// what the upstream accepts for an unset assistant or empty message.
#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    assistant_id: Option<&'a str>,
    multitask_strategy: &'static str,
    input: RunInput<'a>,
}

#[derive(Debug, Serialize)]
struct RunInput<'a> {
    messages: Vec<RunMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct RunMessage<'a> {
    role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}
