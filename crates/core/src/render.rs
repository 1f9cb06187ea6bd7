//! View preparation for AG-UI components
//!
//! Turns decoded payloads into display-ready view models. Views hold plain
//! strings (and pre-rendered markdown HTML) so the UI layer only lays them
//! out. A component with nothing to show yields no view; a structurally
//! broken one yields a [`RenderError`] that the caller shows inline.

use crate::extract::{extract_opt, extract_text, first_truthy};
use crate::markdown::render_markdown;
use crate::types::{
    AguiComponent, ComponentType, DataListComponent, InfoCardComponent, InfoVariant,
    MarkdownComponent, StepProcessComponent, TableComponent,
};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use thiserror::Error;

static LABEL_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)name|label|key|title").expect("label key pattern is valid"));

/// Why a single component could not be rendered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{component} expects `{field}` to be a list")]
    NotAList {
        component: &'static str,
        field: &'static str,
    },

    #[error("table row {row} is not a list of cells")]
    MalformedRow { row: usize },

    #[error("{0}")]
    Decode(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkdownView {
    pub text: String,
    pub html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoCardView {
    pub variant: InfoVariant,
    pub title: String,
    pub description: String,
    pub description_html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataListEntry {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataListView {
    pub title: String,
    pub entries: Vec<DataListEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepView {
    /// 1-based position in the source list
    pub number: usize,
    pub title: String,
    pub description: String,
    pub description_html: String,
    /// No connector is drawn below the last source step
    pub is_last: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepProcessView {
    pub title: String,
    pub steps: Vec<StepView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComponentView {
    Markdown(MarkdownView),
    InfoCard(InfoCardView),
    DataList(DataListView),
    StepProcess(StepProcessView),
    Table(TableView),
}

impl ComponentView {
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

/// Outcome for one recognised component
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered {
    View(ComponentView),
    Error(RenderError),
}

/// A rendered component and its position in the source payload list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedComponent {
    pub index: usize,
    pub rendered: Rendered,
}

/// Render an ordered list of raw payloads.
///
/// Skipped payloads (null, untyped, unknown tag) and components with nothing
/// to display are left out; errors stay in place so siblings are unaffected.
pub fn render_components(values: &[Value]) -> Vec<RenderedComponent> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            render_component(value).map(|rendered| RenderedComponent { index, rendered })
        })
        .collect()
}

/// Render a single raw payload, `None` meaning "show nothing".
pub fn render_component(value: &Value) -> Option<Rendered> {
    let component = match AguiComponent::from_value(value)? {
        Ok(component) => component,
        Err(e) => {
            tracing::error!(error = %e, "Error rendering component");
            return Some(Rendered::Error(RenderError::Decode(e.to_string())));
        }
    };

    match prepare(&component) {
        Ok(Some(view)) => Some(Rendered::View(view)),
        Ok(None) => {
            tracing::debug!(
                component = component.component_type().as_str(),
                "component has no displayable content"
            );
            None
        }
        Err(e) => {
            tracing::error!(
                component = component.component_type().as_str(),
                error = %e,
                "Error rendering component"
            );
            Some(Rendered::Error(e))
        }
    }
}

/// Build the view model for a decoded component.
pub fn prepare(component: &AguiComponent) -> Result<Option<ComponentView>, RenderError> {
    Ok(match component {
        AguiComponent::Markdown(c) => markdown_view(c).map(ComponentView::Markdown),
        AguiComponent::InfoCard(c) => info_card_view(c).map(ComponentView::InfoCard),
        AguiComponent::DataList(c) => data_list_view(c)?.map(ComponentView::DataList),
        AguiComponent::StepProcess(c) => step_process_view(c)?.map(ComponentView::StepProcess),
        AguiComponent::Table(c) => table_view(c)?.map(ComponentView::Table),
    })
}

fn first_truthy_field<'a>(fields: &[Option<&'a Value>]) -> Option<&'a Value> {
    fields
        .iter()
        .flatten()
        .copied()
        .find(|value| crate::extract::is_truthy(value))
}

fn markdown_view(component: &MarkdownComponent) -> Option<MarkdownView> {
    let source = first_truthy_field(&[
        component.content.as_ref(),
        component.description.as_ref(),
        component.text.as_ref(),
        component.value.as_ref(),
    ]);
    let text = extract_opt(source);
    if text.is_empty() {
        return None;
    }
    Some(MarkdownView {
        html: render_markdown(&text),
        text,
    })
}

fn info_card_view(component: &InfoCardComponent) -> Option<InfoCardView> {
    let title = extract_opt(component.title.as_ref());
    let description = extract_opt(first_truthy_field(&[
        component.description.as_ref(),
        component.content.as_ref(),
        component.text.as_ref(),
    ]));

    if title.is_empty() && description.is_empty() {
        return None;
    }

    Some(InfoCardView {
        variant: InfoVariant::from_value(component.variant.as_ref()),
        description_html: render_markdown(&description),
        title,
        description,
    })
}

/// Optional list field: absent or null is an empty list, anything else that
/// is not an array is a structural error.
fn list_field<'a>(
    value: Option<&'a Value>,
    component: ComponentType,
    field: &'static str,
) -> Result<&'a [Value], RenderError> {
    match value {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(RenderError::NotAList {
            component: component.as_str(),
            field,
        }),
    }
}

fn data_list_view(component: &DataListComponent) -> Result<Option<DataListView>, RenderError> {
    let items = list_field(component.items.as_ref(), ComponentType::DataList, "items")?;

    let entries: Vec<DataListEntry> = items
        .iter()
        .filter_map(data_list_entry)
        .filter(|entry| !entry.label.is_empty() || !entry.value.is_empty())
        .collect();
    let title = extract_opt(component.title.as_ref());

    if title.is_empty() && entries.is_empty() {
        return Ok(None);
    }
    Ok(Some(DataListView { title, entries }))
}

/// Infer a label/value pair from one heterogeneous list item.
pub fn data_list_entry(item: &Value) -> Option<DataListEntry> {
    match item {
        Value::String(s) => Some(DataListEntry {
            label: String::new(),
            value: s.clone(),
        }),
        Value::Object(obj) => Some(entry_from_object(obj)),
        Value::Array(_) => Some(DataListEntry {
            label: String::new(),
            value: extract_text(item),
        }),
        _ => None,
    }
}

fn entry_from_object(obj: &Map<String, Value>) -> DataListEntry {
    if first_truthy(obj, &["label", "value"]).is_some() {
        return DataListEntry {
            label: extract_opt(obj.get("label")),
            value: extract_opt(obj.get("value")),
        };
    }

    let keys: Vec<&String> = obj.keys().filter(|k| k.as_str() != "type").collect();
    match keys.as_slice() {
        [] => DataListEntry {
            label: String::new(),
            value: extract_from_whole(obj),
        },
        [only] => DataListEntry {
            label: (*only).clone(),
            value: extract_opt(obj.get(only.as_str())),
        },
        _ => {
            let label_key = keys.iter().find(|k| LABEL_KEY.is_match(k));
            match label_key {
                Some(label_key) => {
                    let value_key = keys.iter().find(|k| *k != label_key);
                    DataListEntry {
                        label: extract_opt(obj.get(label_key.as_str())),
                        value: value_key
                            .map(|k| extract_opt(obj.get(k.as_str())))
                            .unwrap_or_default(),
                    }
                }
                None => DataListEntry {
                    label: String::new(),
                    value: extract_from_whole(obj),
                },
            }
        }
    }
}

fn extract_from_whole(obj: &Map<String, Value>) -> String {
    extract_text(&Value::Object(obj.clone()))
}

fn step_process_view(
    component: &StepProcessComponent,
) -> Result<Option<StepProcessView>, RenderError> {
    let steps = list_field(component.steps.as_ref(), ComponentType::StepProcess, "steps")?;
    let last = steps.len().saturating_sub(1);

    let steps: Vec<StepView> = steps
        .iter()
        .enumerate()
        .filter_map(|(idx, step)| {
            let (title, description) = normalize_step(step);
            if title.is_empty() && description.is_empty() {
                return None;
            }
            Some(StepView {
                number: idx + 1,
                description_html: render_markdown(&description),
                title,
                description,
                is_last: idx == last,
            })
        })
        .collect();

    let title = extract_opt(component.title.as_ref());

    if title.is_empty() && steps.is_empty() {
        return Ok(None);
    }
    Ok(Some(StepProcessView { title, steps }))
}

/// Normalize a step into `(title, description)`.
///
/// When only a title is present it is moved into the description.
pub fn normalize_step(step: &Value) -> (String, String) {
    match step {
        Value::String(s) => (String::new(), s.clone()),
        Value::Object(obj) => {
            let title = extract_opt(first_truthy(obj, &["title", "name", "step"]));
            let description = extract_opt(first_truthy(
                obj,
                &["description", "instruction", "content", "details", "text"],
            ));
            if description.is_empty() && !title.is_empty() {
                (String::new(), title)
            } else {
                (title, description)
            }
        }
        _ => (String::new(), String::new()),
    }
}

fn table_view(component: &TableComponent) -> Result<Option<TableView>, RenderError> {
    let rows = match component.rows.as_ref() {
        Some(Value::Array(rows)) if !rows.is_empty() => rows,
        _ => return Ok(None),
    };

    let headers = list_field(component.headers.as_ref(), ComponentType::Table, "headers")?
        .iter()
        .map(extract_text)
        .collect();

    let rows = rows
        .iter()
        .enumerate()
        .map(|(row, cells)| match cells {
            Value::Array(cells) => Ok(cells.iter().map(extract_text).collect()),
            _ => Err(RenderError::MalformedRow { row }),
        })
        .collect::<Result<Vec<Vec<String>>, _>>()?;

    Ok(Some(TableView {
        title: extract_opt(component.title.as_ref()),
        headers,
        rows,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view(value: Value) -> ComponentView {
        match render_component(&value) {
            Some(Rendered::View(view)) => view,
            other => panic!("expected a view, got {other:?}"),
        }
    }

    #[test]
    fn test_recognised_components_with_text_render() {
        let payloads = [
            json!({"type": "markdown", "content": "hello"}),
            json!({"type": "info_card", "title": "t"}),
            json!({"type": "info_card", "text": "body only"}),
            json!({"type": "data_list", "items": ["x"]}),
            json!({"type": "step_process", "steps": ["x"]}),
            json!({"type": "table", "rows": [["x"]]}),
        ];
        for payload in payloads {
            assert!(
                matches!(render_component(&payload), Some(Rendered::View(_))),
                "no view for {payload}"
            );
        }
    }

    #[test]
    fn test_unknown_tags_render_nothing() {
        let payloads = vec![
            json!({"type": "chart", "content": "x"}),
            json!(null),
            json!({"content": "untyped"}),
            json!(["not", "an", "object"]),
        ];
        assert!(render_components(&payloads).is_empty());
    }

    #[test]
    fn test_markdown_falls_back_through_fields() {
        let ComponentView::Markdown(md) =
            view(json!({"type": "markdown", "content": "", "value": {"text": "**v**"}}))
        else {
            panic!("expected markdown");
        };
        assert_eq!(md.text, "**v**");
        assert_eq!(md.html, "<p><strong>v</strong></p>");
    }

    #[test]
    fn test_empty_components_render_nothing() {
        assert!(render_component(&json!({"type": "markdown"})).is_none());
        assert!(render_component(&json!({"type": "markdown", "content": [""]})).is_none());
        assert!(render_component(&json!({"type": "info_card", "variant": "danger"})).is_none());
        assert!(render_component(&json!({"type": "table", "headers": ["a"]})).is_none());
        assert!(render_component(&json!({"type": "table", "rows": []})).is_none());
        assert!(render_component(&json!({"type": "table", "rows": "nope"})).is_none());
        assert!(render_component(&json!({"type": "data_list", "items": [null, ""]})).is_none());
        assert!(render_component(&json!({"type": "step_process", "steps": [{}]})).is_none());
    }

    #[test]
    fn test_info_card_variant_and_description() {
        let ComponentView::InfoCard(card) = view(json!({
            "type": "info_card",
            "variant": "nonsense",
            "title": {"label": "Note"},
            "content": "Use *care*"
        })) else {
            panic!("expected info card");
        };
        assert_eq!(card.variant, InfoVariant::Info);
        assert_eq!(card.title, "Note");
        assert_eq!(card.description, "Use *care*");
        assert_eq!(card.description_html, "<p>Use <em>care</em></p>");
    }

    #[test]
    fn test_data_list_multi_key_heuristic() {
        let entry = data_list_entry(&json!({"name": "CPU", "usage": "40%"})).unwrap();
        assert_eq!(entry.label, "CPU");
        assert_eq!(entry.value, "40%");

        let entry = data_list_entry(&json!({"usage": "40%", "Title": "CPU"})).unwrap();
        assert_eq!(entry.label, "CPU");
        assert_eq!(entry.value, "40%");
    }

    #[test]
    fn test_data_list_item_shapes() {
        let only_value = data_list_entry(&json!("plain")).unwrap();
        assert_eq!((only_value.label.as_str(), only_value.value.as_str()), ("", "plain"));

        let explicit = data_list_entry(&json!({"label": "Region", "value": 3})).unwrap();
        assert_eq!((explicit.label.as_str(), explicit.value.as_str()), ("Region", "3"));

        let single = data_list_entry(&json!({"type": "kv", "Memory": "8 GB"})).unwrap();
        assert_eq!((single.label.as_str(), single.value.as_str()), ("Memory", "8 GB"));

        let no_label_key = data_list_entry(&json!({"a": "1", "b": "2"})).unwrap();
        assert_eq!(no_label_key.label, "");
        assert_eq!(no_label_key.value, "1, 2");

        let label_only = data_list_entry(&json!({"name": "solo", "type": "x"})).unwrap();
        assert_eq!(label_only.label, "name");
        assert_eq!(label_only.value, "solo");

        assert!(data_list_entry(&json!(5)).is_none());
    }

    #[test]
    fn test_data_list_drops_empty_entries() {
        let ComponentView::DataList(list) = view(json!({
            "type": "data_list",
            "title": "Specs",
            "items": ["", {"label": "", "value": ""}, {"name": "GPU", "vram": "24 GB"}, null]
        })) else {
            panic!("expected data list");
        };
        assert_eq!(list.title, "Specs");
        assert_eq!(
            list.entries,
            vec![DataListEntry {
                label: "GPU".into(),
                value: "24 GB".into()
            }]
        );
    }

    #[test]
    fn test_step_normalization() {
        assert_eq!(
            normalize_step(&json!("just text")),
            (String::new(), "just text".to_string())
        );
        assert_eq!(
            normalize_step(&json!({"name": "Install"})),
            (String::new(), "Install".to_string())
        );
        assert_eq!(
            normalize_step(&json!({"step": "1", "instruction": "Run it"})),
            ("1".to_string(), "Run it".to_string())
        );
        assert_eq!(normalize_step(&json!(7)), (String::new(), String::new()));
    }

    #[test]
    fn test_step_numbering_follows_source_positions() {
        let ComponentView::StepProcess(process) = view(json!({
            "type": "step_process",
            "title": "Setup",
            "steps": ["one", {}, {"title": "three", "details": "do it"}]
        })) else {
            panic!("expected step process");
        };
        assert_eq!(process.steps.len(), 2);
        assert_eq!(process.steps[0].number, 1);
        assert!(!process.steps[0].is_last);
        assert_eq!(process.steps[1].number, 3);
        assert_eq!(process.steps[1].title, "three");
        assert!(process.steps[1].is_last);
    }

    #[test]
    fn test_table_cells_are_extracted() {
        let ComponentView::Table(table) = view(json!({
            "type": "table",
            "title": "Usage",
            "headers": ["Host", {"text": "Load"}],
            "rows": [["a", 0.5], ["b", {"value": "high"}]]
        })) else {
            panic!("expected table");
        };
        assert_eq!(table.headers, vec!["Host", "Load"]);
        assert_eq!(table.rows, vec![vec!["a", "0.5"], vec!["b", "high"]]);
    }

    #[test]
    fn test_structural_errors_stay_in_place() {
        let payloads = vec![
            json!({"type": "markdown", "content": "before"}),
            json!({"type": "table", "rows": [["ok"], "broken"]}),
            json!({"type": "data_list", "items": "not a list"}),
            json!({"type": "markdown", "content": "after"}),
        ];
        let rendered = render_components(&payloads);
        assert_eq!(rendered.len(), 4);
        assert_eq!(
            rendered[1].rendered,
            Rendered::Error(RenderError::MalformedRow { row: 1 })
        );
        assert!(matches!(
            rendered[2].rendered,
            Rendered::Error(RenderError::NotAList { field: "items", .. })
        ));
        assert_eq!(rendered[3].index, 3);
        assert!(matches!(rendered[3].rendered, Rendered::View(_)));
    }
}
