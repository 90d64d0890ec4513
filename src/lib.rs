//! LangGraph Chat Relay
//!
//! A thin HTTP relay that shields a browser-side client from holding the
//! LangGraph API key: it accepts a small action envelope on `POST /api/chat`,
//! issues exactly one credentialed call to the upstream agent API, and
//! passes the upstream JSON response through unchanged.

pub mod adapters;
pub mod config;
pub mod ports;
