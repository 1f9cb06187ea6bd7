//! Chat endpoint methods

use super::{AgentClient, ClientError};
use agui_core::session::ChatTransport;
use agui_core::{ChatRequest, CoreResult};
use async_trait::async_trait;
use serde_json::Value as JsonValue;

impl AgentClient {
    /// POST a message plus history to the chat endpoint
    pub async fn chat(&self, request: &ChatRequest) -> Result<JsonValue, ClientError> {
        let req = self
            .request(reqwest::Method::POST, &self.chat_path)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(request)?);
        self.execute(req).await
    }
}

#[async_trait(?Send)]
impl ChatTransport for AgentClient {
    async fn send(&self, request: ChatRequest) -> CoreResult<JsonValue> {
        tracing::debug!(url = %self.chat_url(), "Posting chat request");
        Ok(self.chat(&request).await?)
    }
}
