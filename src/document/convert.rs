//! Conversion between `Value` and `serde_yaml::Value`.
//!
//! Documents are parsed with serde_yaml (JSON is a subset of YAML) and
//! converted into the path-addressable tree. Output goes back through
//! `serde_yaml::Value`, which also serializes cleanly with serde_json.

use super::value::{Number, Value};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_yaml::Value as SerdeValue;

/// Parses a YAML (or JSON) string into a `Value`.
///
/// # Example
///
/// ```
/// use pathquill::document::convert::parse_document;
///
/// let value = parse_document("{a: {b: 1}, c: [2, 3]}").unwrap();
/// assert!(value.is_object());
/// assert_eq!(value.len(), 2);
/// ```
pub fn parse_document(source: &str) -> Result<Value> {
    let parsed: SerdeValue = serde_yaml::from_str(source).context("Failed to parse document")?;
    Ok(from_serde_value(&parsed))
}

/// Converts a serde_yaml value into a `Value`.
///
/// Non-string mapping keys are stringified; tags are dropped.
pub fn from_serde_value(value: &SerdeValue) -> Value {
    match value {
        SerdeValue::Null => Value::Null,
        SerdeValue::Bool(b) => Value::Boolean(*b),
        SerdeValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(Number::Integer(i))
            } else {
                // u64 beyond i64::MAX and all floats
                Value::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        SerdeValue::String(s) => Value::String(s.clone()),
        SerdeValue::Sequence(items) => Value::Array(items.iter().map(from_serde_value).collect()),
        SerdeValue::Mapping(entries) => {
            let fields: IndexMap<String, Value> = entries
                .iter()
                .map(|(k, v)| (key_to_string(k), from_serde_value(v)))
                .collect();
            Value::Object(fields)
        }
        SerdeValue::Tagged(tagged) => from_serde_value(&tagged.value),
    }
}

fn key_to_string(key: &SerdeValue) -> String {
    match key {
        SerdeValue::String(s) => s.clone(),
        SerdeValue::Number(n) => n.to_string(),
        SerdeValue::Bool(b) => b.to_string(),
        SerdeValue::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Converts a `Value` back into a serde_yaml value for rendering.
pub fn to_serde_value(value: &Value) -> SerdeValue {
    match value {
        Value::Object(fields) => {
            let map: serde_yaml::Mapping = fields
                .iter()
                .map(|(k, v)| (SerdeValue::String(k.clone()), to_serde_value(v)))
                .collect();
            SerdeValue::Mapping(map)
        }
        Value::Array(items) => SerdeValue::Sequence(items.iter().map(to_serde_value).collect()),
        Value::String(s) => SerdeValue::String(s.clone()),
        Value::Number(Number::Integer(i)) => SerdeValue::Number((*i).into()),
        Value::Number(Number::Float(f)) => SerdeValue::Number((*f).into()),
        Value::Boolean(b) => SerdeValue::Bool(*b),
        Value::Null => SerdeValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse_document("42").unwrap(), Value::from(42));
        assert_eq!(parse_document("1.5").unwrap(), Value::from(1.5));
        assert_eq!(parse_document("true").unwrap(), Value::from(true));
        assert_eq!(parse_document("null").unwrap(), Value::Null);
        assert_eq!(parse_document("hello").unwrap(), Value::from("hello"));
    }

    #[test]
    fn test_parse_json_input() {
        let value = parse_document(r#"{"users": [{"name": "Alice"}]}"#).unwrap();
        let Value::Object(fields) = &value else {
            panic!("expected object");
        };
        assert!(fields["users"].is_array());
    }

    #[test]
    fn test_mapping_order_preserved() {
        let value = parse_document("z: 1\na: 2\nm: 3\n").unwrap();
        let Value::Object(fields) = value else {
            panic!("expected object");
        };
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_non_string_keys_are_stringified() {
        let value = parse_document("1: one\ntrue: yes\n").unwrap();
        assert!(value.has_key("1"));
        assert!(value.has_key("true"));
    }

    #[test]
    fn test_tagged_values_are_unwrapped() {
        let value = parse_document("a: !custom 5").unwrap();
        let Value::Object(fields) = value else {
            panic!("expected object");
        };
        assert_eq!(fields["a"], Value::from(5));
    }

    #[test]
    fn test_invalid_document_fails() {
        assert!(parse_document("a: [1, 2").is_err());
    }

    #[test]
    fn test_back_to_serde() {
        let value = parse_document("{a: [1, 2.5, x, null, false]}").unwrap();
        let serde = to_serde_value(&value);
        assert_eq!(from_serde_value(&serde), value);
    }
}
