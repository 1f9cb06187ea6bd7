//! AG-UI payload types
//!
//! Every field is an optional raw JSON value: the producer is a language
//! model and nothing about the shape of a field is guaranteed. The tag is the
//! only thing that is checked when decoding.

use crate::error::{CoreError, CoreResult};
use crate::extract::extract_text;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Recognised component tags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Markdown,
    InfoCard,
    DataList,
    StepProcess,
    Table,
}

impl ComponentType {
    /// Parse a wire tag, returning `None` for anything unrecognised.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "markdown" => Some(Self::Markdown),
            "info_card" => Some(Self::InfoCard),
            "data_list" => Some(Self::DataList),
            "step_process" => Some(Self::StepProcess),
            "table" => Some(Self::Table),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::InfoCard => "info_card",
            Self::DataList => "data_list",
            Self::StepProcess => "step_process",
            Self::Table => "table",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkdownComponent {
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoCardComponent {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub variant: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub text: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataListComponent {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub items: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepProcessComponent {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub steps: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableComponent {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub headers: Option<Value>,
    #[serde(default)]
    pub rows: Option<Value>,
}

/// A single renderable block produced by the agent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AguiComponent {
    Markdown(MarkdownComponent),
    InfoCard(InfoCardComponent),
    DataList(DataListComponent),
    StepProcess(StepProcessComponent),
    Table(TableComponent),
}

impl AguiComponent {
    /// Decode a raw payload.
    ///
    /// Returns `None` for anything that should be skipped silently: `null`,
    /// non-objects, a missing or non-string `type`, or an unknown tag.
    pub fn from_value(value: &Value) -> Option<CoreResult<Self>> {
        let tag = value.as_object()?.get("type")?.as_str()?;
        let kind = ComponentType::from_tag(tag)?;

        Some(decode(kind, value).map_err(|e| {
            CoreError::render(format!("failed to decode {} component: {e}", kind.as_str()))
        }))
    }

    pub const fn component_type(&self) -> ComponentType {
        match self {
            Self::Markdown(_) => ComponentType::Markdown,
            Self::InfoCard(_) => ComponentType::InfoCard,
            Self::DataList(_) => ComponentType::DataList,
            Self::StepProcess(_) => ComponentType::StepProcess,
            Self::Table(_) => ComponentType::Table,
        }
    }
}

fn decode(kind: ComponentType, value: &Value) -> Result<AguiComponent, serde_json::Error> {
    let value = value.clone();
    Ok(match kind {
        ComponentType::Markdown => AguiComponent::Markdown(serde_json::from_value(value)?),
        ComponentType::InfoCard => AguiComponent::InfoCard(serde_json::from_value(value)?),
        ComponentType::DataList => AguiComponent::DataList(serde_json::from_value(value)?),
        ComponentType::StepProcess => AguiComponent::StepProcess(serde_json::from_value(value)?),
        ComponentType::Table => AguiComponent::Table(serde_json::from_value(value)?),
    })
}

/// Visual variant of an info card
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoVariant {
    #[default]
    Info,
    Warning,
    Success,
    Danger,
}

impl InfoVariant {
    /// Resolve the variant tag, defaulting to `Info` when absent or invalid.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("warning") => Self::Warning,
            Some("success") => Self::Success,
            Some("danger") => Self::Danger,
            _ => Self::Info,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

/// Structured reply of the agent endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AguiResponse {
    #[serde(default)]
    pub components: Vec<Value>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Anything else the agent attached
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl AguiResponse {
    /// Leniently read a response body.
    ///
    /// A missing or non-array `components` yields no components; suggestions
    /// are extracted as text and blank ones dropped.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let components = obj
            .get("components")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let suggestions = obj
            .get("suggestions")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(extract_text)
                    .filter(|s| !s.trim().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let metadata = obj
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "components" | "suggestions"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            components,
            suggestions,
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_and_untyped_payloads_are_skipped() {
        assert!(AguiComponent::from_value(&Value::Null).is_none());
        assert!(AguiComponent::from_value(&json!("markdown")).is_none());
        assert!(AguiComponent::from_value(&json!({"content": "x"})).is_none());
        assert!(AguiComponent::from_value(&json!({"type": 3})).is_none());
        assert!(AguiComponent::from_value(&json!({"type": "chart", "data": []})).is_none());
    }

    #[test]
    fn test_recognised_tags_decode_with_loose_fields() {
        let component = AguiComponent::from_value(&json!({
            "type": "info_card",
            "title": {"text": "Heads up"},
            "variant": "warning",
            "description": ["a", "b"],
            "unexpected": true
        }))
        .unwrap()
        .unwrap();

        assert_eq!(component.component_type(), ComponentType::InfoCard);
        let AguiComponent::InfoCard(card) = component else {
            panic!("expected info card");
        };
        assert_eq!(card.variant, Some(json!("warning")));
        assert_eq!(card.description, Some(json!(["a", "b"])));
    }

    #[test]
    fn test_tag_round_trip() {
        for kind in [
            ComponentType::Markdown,
            ComponentType::InfoCard,
            ComponentType::DataList,
            ComponentType::StepProcess,
            ComponentType::Table,
        ] {
            assert_eq!(ComponentType::from_tag(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_info_variant_defaults_to_info() {
        assert_eq!(InfoVariant::from_value(None), InfoVariant::Info);
        assert_eq!(InfoVariant::from_value(Some(&json!("bogus"))), InfoVariant::Info);
        assert_eq!(InfoVariant::from_value(Some(&json!(1))), InfoVariant::Info);
        assert_eq!(
            InfoVariant::from_value(Some(&json!("danger"))),
            InfoVariant::Danger
        );
    }

    #[test]
    fn test_response_is_read_leniently() {
        let response = AguiResponse::from_value(&json!({
            "components": [{"type": "markdown", "content": "hi"}],
            "suggestions": ["next?", "", {"text": "more"}],
            "trace_id": "abc"
        }));
        assert_eq!(response.components.len(), 1);
        assert_eq!(response.suggestions, vec!["next?", "more"]);
        assert_eq!(response.metadata.get("trace_id"), Some(&json!("abc")));

        let broken = AguiResponse::from_value(&json!({"components": "oops"}));
        assert!(broken.components.is_empty());
        assert!(AguiResponse::from_value(&json!(null)).components.is_empty());
    }
}
