//! Forgiving field deserializers for user-authored questionnaire JSON.
//!
//! A wrongly-typed leaf reads as absent instead of rejecting the whole submission.
//! Use with `#[serde(default, deserialize_with = "...")]`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A yes/no style answer submitted either as a JSON boolean or as free text ("oui").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Flag(bool),
    Text(String),
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Flag(b) => write!(f, "{b}"),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Strings pass through; numbers and booleans are stringified; anything else is absent.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_text))
}

/// A list of text items. Non-text items are dropped; a bare string becomes a one-item list.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().filter_map(value_to_text).collect(),
        Some(Value::String(s)) => vec![s],
        _ => Vec::new(),
    })
}

/// An object whose text values are kept; non-text values and non-objects are dropped.
pub fn text_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(k, v)| value_to_text(v).map(|v| (k, v)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

/// An object passed through untouched; non-objects read as empty.
pub fn object<'de, D>(deserializer: D) -> Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(map)) => map.into_iter().collect(),
        _ => BTreeMap::new(),
    })
}

/// Booleans stay booleans, text and numbers become [`Answer::Text`].
pub fn answer<'de, D>(deserializer: D) -> Result<Option<Answer>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(Answer::Flag(b)),
        Some(other) => value_to_text(other).map(Answer::Text),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "text")]
        name: Option<String>,
        #[serde(default, deserialize_with = "text_list")]
        items: Vec<String>,
        #[serde(default, deserialize_with = "text_map")]
        levels: BTreeMap<String, String>,
        #[serde(default, deserialize_with = "answer")]
        flag: Option<Answer>,
    }

    #[test]
    fn test_missing_fields_default() {
        let p: Probe = serde_json::from_value(json!({})).unwrap();
        assert!(p.name.is_none());
        assert!(p.items.is_empty());
        assert!(p.levels.is_empty());
        assert!(p.flag.is_none());
    }

    #[test]
    fn test_wrong_types_read_as_absent() {
        let p: Probe = serde_json::from_value(json!({
            "name": {"nested": true},
            "items": 42,
            "levels": ["a"],
            "flag": null
        }))
        .unwrap();
        assert!(p.name.is_none());
        assert!(p.items.is_empty());
        assert!(p.levels.is_empty());
        assert!(p.flag.is_none());
    }

    #[test]
    fn test_scalars_are_stringified() {
        let p: Probe = serde_json::from_value(json!({
            "name": 45000,
            "items": ["Rust", 3, null, "Go"],
            "levels": {"Rust": "expert", "Go": false, "C": [1]},
            "flag": "oui"
        }))
        .unwrap();
        assert_eq!(p.name.as_deref(), Some("45000"));
        assert_eq!(p.items, vec!["Rust", "3", "Go"]);
        assert_eq!(p.levels.len(), 2);
        assert_eq!(p.levels["Go"], "false");
        assert_eq!(p.flag, Some(Answer::Text("oui".to_string())));
    }

    #[test]
    fn test_answer_keeps_booleans() {
        let p: Probe = serde_json::from_value(json!({"flag": false})).unwrap();
        assert_eq!(p.flag, Some(Answer::Flag(false)));
        assert_eq!(p.flag.unwrap().to_string(), "false");
    }
}
