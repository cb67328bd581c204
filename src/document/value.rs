//! In-memory value tree addressed by paths.
//!
//! `Value` is the owned tree that every path operation reads from or writes
//! into. Mappings keep insertion order (backed by `IndexMap`) so that key
//! enumeration is deterministic.
//!
//! # Example
//!
//! ```
//! use pathquill::document::value::{Value, ValueKind};
//! use indexmap::IndexMap;
//!
//! let mut fields = IndexMap::new();
//! fields.insert("name".to_string(), Value::from("pathquill"));
//! let object = Value::Object(fields);
//!
//! assert_eq!(object.kind(), ValueKind::Mapping);
//! assert!(object.has_key("name"));
//! ```

use indexmap::IndexMap;
use std::fmt;

/// Numbers are kept as integers when the source was integral.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// Zero and NaN are the only falsy numbers.
    pub fn is_zero_or_nan(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::Float(f) => *f == 0.0 || f.is_nan(),
        }
    }
}

/// The closed set of shapes a value can take during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// An ordered key/value mapping.
    Mapping,
    /// An ordered sequence addressed by index.
    Sequence,
    /// A string, number or boolean.
    Scalar,
    /// An explicit null.
    Nullish,
}

/// A node of the value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A mapping of string keys to values, in insertion order
    Object(IndexMap<String, Value>),
    /// An ordered sequence of values
    Array(Vec<Value>),
    String(String),
    Number(Number),
    Boolean(bool),
    Null,
}

impl Value {
    /// Classifies this value for traversal.
    ///
    /// # Example
    ///
    /// ```
    /// use pathquill::document::value::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Array(vec![]).kind(), ValueKind::Sequence);
    /// assert_eq!(Value::from(3).kind(), ValueKind::Scalar);
    /// assert_eq!(Value::Null.kind(), ValueKind::Nullish);
    /// ```
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Object(_) => ValueKind::Mapping,
            Value::Array(_) => ValueKind::Sequence,
            Value::String(_) | Value::Number(_) | Value::Boolean(_) => ValueKind::Scalar,
            Value::Null => ValueKind::Nullish,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true for mappings and sequences.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    /// Returns true for values that a write may replace with a fresh container:
    /// null, `false`, zero, NaN and the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Boolean(b) => !b,
            Value::Number(n) => n.is_zero_or_nan(),
            Value::String(s) => s.is_empty(),
            Value::Object(_) | Value::Array(_) => false,
        }
    }

    /// Creates an empty mapping.
    pub fn object() -> Self {
        Value::Object(IndexMap::new())
    }

    /// Creates an empty sequence.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Looks up a named member.
    ///
    /// Sequences answer to canonical decimal keys (`"0"`, `"12"`), mirroring
    /// how property names address array slots.
    pub fn has_key(&self, key: &str) -> bool {
        match self {
            Value::Object(fields) => fields.contains_key(key),
            Value::Array(items) => canonical_index(key).is_some_and(|idx| idx < items.len()),
            _ => false,
        }
    }

    /// Looks up a numeric member. Mappings answer to the decimal key.
    pub fn has_index(&self, index: usize) -> bool {
        match self {
            Value::Object(fields) => fields.contains_key(&index.to_string()),
            Value::Array(items) => index < items.len(),
            _ => false,
        }
    }

    /// Number of direct children, zero for scalars and null.
    pub fn len(&self) -> usize {
        match self {
            Value::Object(fields) => fields.len(),
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parses a canonical array index: ASCII digits without a leading zero
/// (except `"0"` itself).
pub fn canonical_index(key: &str) -> Option<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if canonical {
        key.parse().ok()
    } else {
        None
    }
}

impl fmt::Display for Value {
    /// Short, single-line rendering used in messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Object(fields) => write!(f, "{{...}} ({} keys)", fields.len()),
            Value::Array(items) => write!(f, "[...] ({} items)", items.len()),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Value::Object(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Value::object().kind(), ValueKind::Mapping);
        assert_eq!(Value::array().kind(), ValueKind::Sequence);
        assert_eq!(Value::from("x").kind(), ValueKind::Scalar);
        assert_eq!(Value::from(true).kind(), ValueKind::Scalar);
        assert_eq!(Value::Null.kind(), ValueKind::Nullish);
    }

    #[test]
    fn test_falsy_values() {
        assert!(Value::Null.is_falsy());
        assert!(Value::from(false).is_falsy());
        assert!(Value::from(0).is_falsy());
        assert!(Value::from(0.0).is_falsy());
        assert!(Value::from(f64::NAN).is_falsy());
        assert!(Value::from("").is_falsy());
    }

    #[test]
    fn test_truthy_values() {
        assert!(!Value::from(1).is_falsy());
        assert!(!Value::from("0").is_falsy());
        assert!(!Value::from(true).is_falsy());
        // Empty containers are still containers
        assert!(!Value::object().is_falsy());
        assert!(!Value::array().is_falsy());
    }

    #[test]
    fn test_canonical_index() {
        assert_eq!(canonical_index("0"), Some(0));
        assert_eq!(canonical_index("42"), Some(42));
        assert_eq!(canonical_index("007"), None);
        assert_eq!(canonical_index(""), None);
        assert_eq!(canonical_index("-1"), None);
        assert_eq!(canonical_index("1a"), None);
    }

    #[test]
    fn test_membership() {
        let mut fields = IndexMap::new();
        fields.insert("a".to_string(), Value::Null);
        fields.insert("3".to_string(), Value::from(1));
        let object = Value::Object(fields);
        assert!(object.has_key("a"));
        assert!(object.has_index(3));
        assert!(!object.has_key("b"));

        let array = Value::Array(vec![Value::from(1), Value::from(2)]);
        assert!(array.has_index(1));
        assert!(array.has_key("1"));
        assert!(!array.has_index(2));
        assert!(!array.has_key("length"));

        assert!(!Value::from("abc").has_index(0));
        assert!(!Value::Null.has_key("a"));
    }

    #[test]
    fn test_display_is_single_line() {
        assert_eq!(Value::from(1).to_string(), "1");
        assert_eq!(Value::from("hi").to_string(), "\"hi\"");
        assert_eq!(Value::array().to_string(), "[...] (0 items)");
    }
}
