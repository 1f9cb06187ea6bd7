//! Chat messages and the wire shapes of the chat endpoint

use crate::types::AguiResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who authored a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A single entry of the chat transcript
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    /// Plain text typed by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Raw structured reply of the agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message stamped with the current time
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::User,
            content: Some(content.into()),
            data: None,
            timestamp: Utc::now(),
        }
    }

    /// Wrap a raw agent response
    pub fn model(data: Value) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::Model,
            content: None,
            data: Some(data),
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Lenient view of the structured reply, empty for user messages
    pub fn response(&self) -> AguiResponse {
        self.data
            .as_ref()
            .map(AguiResponse::from_value)
            .unwrap_or_default()
    }

    /// Text sent back to the agent as history
    ///
    /// User messages contribute their text, model messages the JSON encoding
    /// of their structured payload.
    pub fn history_text(&self) -> String {
        match self.role {
            Role::User => self.content.clone().unwrap_or_default(),
            Role::Model => self
                .data
                .as_ref()
                .map_or_else(|| "null".to_string(), Value::to_string),
        }
    }

    /// `HH:MM` in local display form
    pub fn display_time(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// One text part of a history entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPart {
    pub text: String,
}

/// History entry in the `{role, parts: [{text}]}` shape the agent expects
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub parts: Vec<HistoryPart>,
}

impl From<&ChatMessage> for HistoryEntry {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role,
            parts: vec![HistoryPart {
                text: message.history_text(),
            }],
        }
    }
}

/// Body of the POST to the chat endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<HistoryEntry>,
}

impl ChatRequest {
    /// Build a request from the prior transcript and the new message
    pub fn new(message: impl Into<String>, prior: &[ChatMessage]) -> Self {
        Self {
            message: message.into(),
            history: prior.iter().map(HistoryEntry::from).collect(),
        }
    }
}
