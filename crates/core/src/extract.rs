//! Best-effort text extraction for loosely typed agent output
//!
//! The agent is a language model, so payload fields that should be strings
//! regularly arrive as arrays, nested objects or numbers. Everything here
//! degrades to an empty string instead of failing.

use serde_json::{Map, Value};

/// Keys probed, in order, when an object carries its text directly.
const DIRECT_TEXT_KEYS: [&str; 5] = ["text", "content", "value", "description", "message"];

/// Normalize an arbitrary JSON value into a display string.
///
/// Strings are returned unchanged, scalars are stringified, arrays are joined
/// line by line (blank entries dropped) and objects are searched for a
/// text-bearing field before falling back to a comma-joined list of their
/// values.
pub fn extract_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::Array(items) => join_non_blank(items.iter(), "\n"),
        Value::Object(obj) => extract_from_object(obj),
    }
}

/// Extract text from an optional field, treating absence like `null`.
pub fn extract_opt(value: Option<&Value>) -> String {
    value.map(extract_text).unwrap_or_default()
}

/// Return the first truthy value among `keys` of `obj`.
pub fn first_truthy<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| is_truthy(value))
}

/// Loose truthiness as the producing side understands it.
///
/// `null`, `false`, zero, NaN and the empty string are falsy; everything
/// else, including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn extract_from_object(obj: &Map<String, Value>) -> String {
    if let Some(direct) = first_truthy(obj, &DIRECT_TEXT_KEYS) {
        return extract_text(direct);
    }

    // `value` and `description` are falsy here, so a bare label or title wins.
    if let Some(fallback) = first_truthy(obj, &["label", "title"]) {
        return extract_text(fallback);
    }

    join_non_blank(obj.values(), ", ")
}

fn join_non_blank<'a>(values: impl Iterator<Item = &'a Value>, separator: &str) -> String {
    values
        .map(extract_text)
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn number_to_string(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        // Whole floats print without a fractional part, like `String(2.0)`.
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_strings_are_returned_unchanged() {
        for s in ["", "hello", "  padded  ", "line\nbreak", "中文內容"] {
            assert_eq!(extract_text(&json!(s)), s);
        }
    }

    #[test]
    fn test_null_is_empty() {
        assert_eq!(extract_text(&Value::Null), "");
        assert_eq!(extract_opt(None), "");
    }

    #[test]
    fn test_scalars_are_stringified() {
        assert_eq!(extract_text(&json!(42)), "42");
        assert_eq!(extract_text(&json!(-3)), "-3");
        assert_eq!(extract_text(&json!(2.5)), "2.5");
        assert_eq!(extract_text(&json!(2.0)), "2");
        assert_eq!(extract_text(&json!(true)), "true");
        assert_eq!(extract_text(&json!(false)), "false");
    }

    #[test]
    fn test_arrays_join_non_blank_lines() {
        let value = json!(["first", "", "   ", null, {"text": "second"}, 3]);
        assert_eq!(extract_text(&value), "first\nsecond\n3");
    }

    #[test]
    fn test_object_prefers_text_fields_in_order() {
        assert_eq!(
            extract_text(&json!({"content": "c", "text": "t", "value": "v"})),
            "t"
        );
        assert_eq!(extract_text(&json!({"value": "v", "content": "c"})), "c");
        assert_eq!(
            extract_text(&json!({"message": "m", "description": "d"})),
            "d"
        );
        assert_eq!(extract_text(&json!({"message": "m"})), "m");
    }

    #[test]
    fn test_falsy_fields_are_skipped() {
        assert_eq!(extract_text(&json!({"text": "", "content": "c"})), "c");
        assert_eq!(extract_text(&json!({"text": 0, "value": "v"})), "v");
    }

    #[test]
    fn test_label_and_title_fallbacks() {
        assert_eq!(extract_text(&json!({"label": "CPU"})), "CPU");
        assert_eq!(extract_text(&json!({"title": "Heading"})), "Heading");
        assert_eq!(extract_text(&json!({"label": "L", "title": "T"})), "L");
    }

    #[test]
    fn test_unknown_object_joins_values() {
        let value = json!({"a": "one", "b": "", "c": ["two", "three"], "d": null});
        assert_eq!(extract_text(&value), "one, two\nthree");
        assert_eq!(extract_text(&json!({})), "");
        assert_eq!(extract_text(&json!({"x": null, "y": ""})), "");
    }

    #[test]
    fn test_nested_extraction_recurses() {
        let value = json!({"content": [{"text": "a"}, {"value": {"message": "b"}}]});
        assert_eq!(extract_text(&value), "a\nb");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!("0")));
    }
}
