//! HTTP client for the AG-UI chat agent

pub mod client;

pub use client::error::ClientError;
pub use client::{AgentClient, AgentClientBuilder};
