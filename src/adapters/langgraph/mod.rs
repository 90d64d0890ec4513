//! LangGraph adapter - HTTP client for the upstream agent API.

mod client;

pub use client::{LangGraphClient, LangGraphConfig};
