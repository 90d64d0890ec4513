//! HTTP DTOs for the chat relay endpoint.
//!
//! The inbound envelope is deliberately loose: every field is optional on
//! the wire, and [`ChatRequest::resolve`] checks the shape before any
//! outbound call is made.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inbound action envelope for `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Requested relay action.
    pub action: Option<String>,
    /// Upstream thread to run against (`send_message` only).
    pub thread_id: Option<String>,
    /// User message content, forwarded as received.
    pub message: Option<String>,
}

/// A validated, per-branch view of the envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    /// Mint a new upstream thread.
    CreateThread,
    /// Run the assistant against an existing thread.
    SendMessage {
        thread_id: String,
        message: Option<String>,
    },
}

/// Envelope validation failures.
///
/// Display strings are the caller-facing error messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatRequestError {
    /// `action` absent or not a recognized value.
    #[error("Invalid action")]
    InvalidAction,

    /// `send_message` without a usable thread id.
    #[error("Missing Thread ID")]
    MissingThreadId,
}

impl ChatRequest {
    /// Validates the envelope and resolves the requested branch.
    ///
    /// An empty `threadId` counts as missing. `message` is never
    /// validated; the upstream owns content rules.
    pub fn resolve(self) -> Result<ChatAction, ChatRequestError> {
        match self.action.as_deref() {
            Some("create_thread") => Ok(ChatAction::CreateThread),
            Some("send_message") => {
                let thread_id = self
                    .thread_id
                    .filter(|id| !id.is_empty())
                    .ok_or(ChatRequestError::MissingThreadId)?;
                Ok(ChatAction::SendMessage {
                    thread_id,
                    message: self.message,
                })
            }
            _ => Err(ChatRequestError::InvalidAction),
        }
    }
}

/// Uniform failure body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Create a new error body.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
