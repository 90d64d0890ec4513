//! Adapters - implementations binding the ports to real infrastructure.

pub mod http;
pub mod langgraph;
