//! Ports - trait seams between the HTTP surface and external services.

mod agent_gateway;

pub use agent_gateway::{AgentError, AgentGateway};
