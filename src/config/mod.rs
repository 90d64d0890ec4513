//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. The deployment
//! contract names bare variables (`PORT`, `LANGGRAPH_API_KEY`, ...), so
//! keys are read flat and unprefixed.
//!
//! # Example
//!
//! ```no_run
//! use langgraph_relay::config::RelayConfig;
//!
//! let config = RelayConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Relay running on {}", config.socket_addr());
//! ```

mod error;

pub use error::{ConfigError, ValidationError};

use serde::Deserialize;
use std::net::SocketAddr;

/// Relay process configuration
///
/// Read once at startup and passed explicitly into the application;
/// never mutated afterwards. The upstream secrets are optional here:
/// a process started without them still binds and serves, answering
/// every relay request with a configuration error until restarted with
/// a complete environment.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// API key for the LangGraph deployment
    pub langgraph_api_key: Option<String>,

    /// Base URL of the LangGraph deployment
    pub langgraph_url: Option<String>,

    /// Assistant identity executed on each run
    pub assistant_id: Option<String>,

    /// CORS allowed origins (comma-separated)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl RelayConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (for development), then reads the
    /// bare environment variables `HOST`, `PORT`, `LANGGRAPH_API_KEY`,
    /// `LANGGRAPH_URL`, `ASSISTANT_ID`, `CORS_ORIGINS` and `LOG_LEVEL`
    /// into typed fields.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Get CORS origins as a vector
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Both upstream secrets, when configured and non-empty.
    ///
    /// `ASSISTANT_ID` is deliberately not part of this check: only the
    /// API key and base URL gate relay traffic.
    pub fn upstream_secrets(&self) -> Option<(&str, &str)> {
        let api_key = self.langgraph_api_key.as_deref().filter(|k| !k.is_empty())?;
        let base_url = self.langgraph_url.as_deref().filter(|u| !u.is_empty())?;
        Some((api_key, base_url))
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if let Some(url) = self.langgraph_url.as_deref().filter(|u| !u.is_empty()) {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidUpstreamUrl);
            }
        }
        Ok(())
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_cors_origins() -> String {
    "http://localhost:5173,http://localhost:3000".to_string()
}

fn default_log_level() -> String {
    "info,langgraph_relay=debug".to_string()
}
