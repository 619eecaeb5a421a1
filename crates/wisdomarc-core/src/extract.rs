//! Best-effort JSON recovery from model text
//!
//! Model output is untrusted: it may wrap JSON in prose or code fences, or
//! contain no JSON at all. Every function here is total and signals failure
//! with `None` so callers can take their fallback path.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Extract a JSON object from raw model text.
///
/// A trimmed text starting with `{` is parsed whole; otherwise the span from
/// the first `{` to the last `}` is decoded.
pub fn extract_json_object(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();

    if trimmed.starts_with('{') {
        if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(trimmed) {
            return Some(value);
        }
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }

    match serde_json::from_str::<Value>(&trimmed[start..=end]) {
        Ok(value @ Value::Object(_)) => Some(value),
        _ => None,
    }
}

/// Extract a JSON object and deserialize it into `T`.
pub fn extract_as<T: DeserializeOwned>(raw: &str) -> Option<T> {
    extract_json_object(raw).and_then(|value| serde_json::from_value(value).ok())
}

/// First present key among `keys`, rendered as text.
///
/// Strings are trimmed, lists of strings are joined with "; ", numbers and
/// booleans are stringified. Empty results count as absent.
pub fn text_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(|value| {
            let text = match value {
                Value::String(s) => s.trim().to_string(),
                Value::Array(items) => items
                    .iter()
                    .filter_map(value_as_text)
                    .collect::<Vec<_>>()
                    .join("; "),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Object(_) => String::new(),
            };
            (!text.is_empty()).then_some(text)
        })
}

/// First present key among `keys`, rendered as a list of strings.
///
/// A single string becomes a one-item list.
pub fn list_field(object: &Map<String, Value>, keys: &[&str]) -> Option<Vec<String>> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(|value| match value {
            Value::Array(items) => Some(items.iter().filter_map(value_as_text).collect()),
            Value::String(s) if !s.trim().is_empty() => Some(vec![s.trim().to_string()]),
            _ => None,
        })
}

/// First present key among `keys` that holds a number (or numeric string).
pub fn number_field(object: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(|value| match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map
            .values()
            .find_map(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        _ => None,
    }
}

/// Clamp a score into [0.0, 1.0]; NaN becomes 0.0.
pub fn clamp_unit(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// Truncate to at most `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_object() {
        let value = extract_json_object(r#"  {"score": 0.4}  "#).unwrap();
        assert_eq!(value, json!({"score": 0.4}));
    }

    #[test]
    fn test_object_inside_prose() {
        let raw = "Here is my analysis:\n```json\n{\"a\": {\"b\": 1}}\n```\nHope it helps.";
        assert_eq!(extract_json_object(raw).unwrap(), json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_no_object() {
        assert!(extract_json_object("Virtue is knowledge.").is_none());
        assert!(extract_json_object("} backwards {").is_none());
        assert!(extract_json_object("{not json}").is_none());
    }

    #[test]
    fn test_array_is_rejected() {
        assert!(extract_json_object("[1, 2, 3]").is_none());
    }

    #[test]
    fn test_text_field_aliases_and_shapes() {
        let value = json!({
            "coreInsight": "  Virtue is a habit.  ",
            "steps": ["pause", "breathe"],
            "score": 0.7,
            "empty": ""
        });
        let object = value.as_object().unwrap();

        assert_eq!(
            text_field(object, &["core_insight", "coreInsight"]).as_deref(),
            Some("Virtue is a habit.")
        );
        assert_eq!(text_field(object, &["steps"]).as_deref(), Some("pause; breathe"));
        assert_eq!(text_field(object, &["score"]).as_deref(), Some("0.7"));
        assert!(text_field(object, &["empty"]).is_none());
        assert!(text_field(object, &["missing"]).is_none());
    }

    #[test]
    fn test_list_and_number_fields() {
        let value = json!({
            "strengths": ["clear", {"point": "grounded"}, 3, null],
            "concern": "too abstract",
            "validation_score": "0.65"
        });
        let object = value.as_object().unwrap();

        assert_eq!(
            list_field(object, &["strengths"]).unwrap(),
            vec!["clear", "grounded", "3"]
        );
        assert_eq!(list_field(object, &["concern"]).unwrap(), vec!["too abstract"]);
        assert_eq!(number_field(object, &["validation_score"]), Some(0.65));
        assert_eq!(number_field(object, &["strengths"]), None);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(1.7), 1.0);
        assert_eq!(clamp_unit(-0.2), 0.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("wu wei", 2), "wu");
        assert_eq!(truncate_chars("道德經", 2), "道德");
        assert_eq!(truncate_chars("short", 200), "short");
    }
}
