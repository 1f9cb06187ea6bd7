//! State shared between the widgets and the agent

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One question/answer pair of the HR conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationEntry {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// Record mirrored between the front-end and the agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentState {
    pub structured_data: Option<Value>,
    pub last_output: Option<Value>,
    pub hr_mode: bool,
    pub current_category: Option<String>,
    pub greeting_questions: Vec<String>,
    pub follow_up_suggestions: Vec<String>,
    pub conversation_history: Vec<ConversationEntry>,
    pub proverbs: Vec<String>,
}

impl AgentState {
    /// Merge a partial JSON object into the state.
    ///
    /// Keys present in `patch` replace the current values, everything else
    /// is kept. An explicit `null` clears an optional field.
    pub fn merged(&self, patch: &Value) -> crate::CoreResult<Self> {
        let mut current = serde_json::to_value(self)?;
        if let (Some(target), Some(fields)) = (current.as_object_mut(), patch.as_object()) {
            for (key, value) in fields {
                target.insert(key.clone(), value.clone());
            }
        }
        Ok(serde_json::from_value(current)?)
    }

    /// Whether the preview has anything to show
    pub fn has_output(&self) -> bool {
        self.structured_data.as_ref().is_some_and(|v| !v.is_null())
            || self.last_output.as_ref().is_some_and(|v| !v.is_null())
    }

    /// `last_output` when it differs from `structured_data`
    pub fn distinct_last_output(&self) -> Option<&Value> {
        self.last_output
            .as_ref()
            .filter(|v| !v.is_null() && self.structured_data.as_ref() != Some(*v))
    }
}

/// Patch that empties both preview fields
pub fn clear_output_patch() -> Value {
    serde_json::json!({ "structuredData": null, "lastOutput": null })
}

/// Turn a camelCase key into a spaced, capitalised title
pub fn humanize_key(key: &str) -> String {
    let mut title = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            title.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            title.push(' ');
            title.push(c);
        } else {
            title.push(c);
        }
    }
    title
}

/// Title/value rows for the formatted preview
///
/// Objects yield one row per key, nested values shown as pretty JSON. Any
/// other value is a single untitled row.
pub fn preview_rows(data: &Value) -> Vec<(Option<String>, String)> {
    match data {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| (Some(humanize_key(key)), display_value(value)))
            .collect(),
        Value::Null => Vec::new(),
        other => vec![(None, display_value(other))],
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_keeps_unmentioned_fields() {
        let state = AgentState {
            proverbs: vec!["early bird".into()],
            current_category: Some("benefits".into()),
            ..AgentState::default()
        };
        let merged = state.merged(&json!({"hrMode": true})).unwrap();
        assert!(merged.hr_mode);
        assert_eq!(merged.proverbs, vec!["early bird"]);
        assert_eq!(merged.current_category.as_deref(), Some("benefits"));
    }

    #[test]
    fn test_clear_patch_empties_preview() {
        let state = AgentState {
            structured_data: Some(json!({"name": "Ada"})),
            last_output: Some(json!("done")),
            ..AgentState::default()
        };
        assert!(state.has_output());
        let cleared = state.merged(&clear_output_patch()).unwrap();
        assert!(!cleared.has_output());
    }

    #[test]
    fn test_distinct_last_output() {
        let same = AgentState {
            structured_data: Some(json!({"a": 1})),
            last_output: Some(json!({"a": 1})),
            ..AgentState::default()
        };
        assert!(same.distinct_last_output().is_none());

        let different = AgentState {
            last_output: Some(json!({"a": 2})),
            ..same
        };
        assert_eq!(different.distinct_last_output(), Some(&json!({"a": 2})));
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("firstName"), "First Name");
        assert_eq!(humanize_key("email"), "Email");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_preview_rows() {
        let rows = preview_rows(&json!({"userName": "Ada", "tags": ["x"], "age": 36}));
        assert_eq!(rows[0], (Some("User Name".to_string()), "Ada".to_string()));
        assert_eq!(rows[1].1, "[\n  \"x\"\n]");
        assert_eq!(rows[2].1, "36");

        assert_eq!(preview_rows(&json!("plain")), vec![(None, "plain".to_string())]);
        assert!(preview_rows(&Value::Null).is_empty());
    }

    #[test]
    fn test_state_decodes_from_partial_record() {
        let state: AgentState = serde_json::from_value(json!({
            "hrMode": true,
            "conversationHistory": [{
                "question": "Q",
                "answer": "A",
                "timestamp": "2024-05-01T08:00:00Z"
            }]
        }))
        .unwrap();
        assert!(state.hr_mode);
        assert_eq!(state.conversation_history.len(), 1);
        assert!(state.follow_up_suggestions.is_empty());
    }
}
