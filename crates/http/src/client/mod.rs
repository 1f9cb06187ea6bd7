//! Agent chat client

pub mod chat;
pub mod error;

use error::ClientError;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Path of the chat endpoint when none is configured
pub const DEFAULT_CHAT_PATH: &str = "/api/chat";

/// Agent API client
#[derive(Clone, Debug)]
pub struct AgentClient {
    client: Client,
    base_url: String,
    chat_path: String,
}

impl AgentClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> AgentClientBuilder {
        AgentClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the chat endpoint
    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url, self.chat_path)
    }

    /// Create a request builder for a path below the base URL
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for `AgentClient`
#[derive(Default)]
pub struct AgentClientBuilder {
    base_url: Option<String>,
    chat_path: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl AgentClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the chat endpoint path, `/api/chat` by default
    pub fn chat_path(mut self, path: impl Into<String>) -> Self {
        self.chat_path = Some(path.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<AgentClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let chat_path = self
            .chat_path
            .unwrap_or_else(|| DEFAULT_CHAT_PATH.to_string());
        let chat_path = if chat_path.starts_with('/') {
            chat_path
        } else {
            format!("/{chat_path}")
        };

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = self.timeout {
                client_builder = client_builder.timeout(timeout);
            }
            client_builder = client_builder
                .user_agent(self.user_agent.unwrap_or_else(|| "agui-client/0.1.0".into()));
        }

        let client = client_builder.build()?;

        Ok(AgentClient {
            client,
            base_url,
            chat_path,
        })
    }
}
