//! Read access along a parsed path.
//!
//! Reads never fail: a missing member, a null, a scalar or a neutralized
//! segment anywhere along the way yields `None`.

use crate::document::value::{canonical_index, Value};
use crate::path::{Path, PathSegment};

/// Resolves the first `depth` segments of `path` against `root`.
///
/// `depth` is clamped to the path length; a depth of zero returns the root.
///
/// # Example
///
/// ```
/// use pathquill::document::convert::parse_document;
/// use pathquill::path::parse;
/// use pathquill::document::value::Value;
/// use pathquill::tree::read;
///
/// let doc = parse_document("{a: {b: [10, 20]}}").unwrap();
/// let path = parse("a.b[1]").unwrap();
/// assert_eq!(read(&doc, &path, path.len()), Some(&Value::from(20)));
/// assert!(read(&doc, &path, 1).unwrap().is_object());
/// ```
pub fn read<'a>(root: &'a Value, path: &Path, depth: usize) -> Option<&'a Value> {
    path.segments()
        .iter()
        .take(depth)
        .try_fold(root, |current, segment| member(current, segment))
}

/// Mutable counterpart of [`read`]. Never creates anything.
pub fn read_mut<'a>(root: &'a mut Value, path: &Path, depth: usize) -> Option<&'a mut Value> {
    path.segments()
        .iter()
        .take(depth)
        .try_fold(root, |current, segment| member_mut(current, segment))
}

/// Looks up a single segment inside a container.
pub fn member<'a>(container: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    match (container, segment) {
        (Value::Object(fields), PathSegment::Key(key)) => fields.get(key),
        (Value::Object(fields), PathSegment::Index(idx)) => fields.get(&idx.to_string()),
        (Value::Array(items), PathSegment::Index(idx)) => items.get(*idx),
        (Value::Array(items), PathSegment::Key(key)) => {
            canonical_index(key).and_then(|idx| items.get(idx))
        }
        _ => None,
    }
}

fn member_mut<'a>(container: &'a mut Value, segment: &PathSegment) -> Option<&'a mut Value> {
    match (container, segment) {
        (Value::Object(fields), PathSegment::Key(key)) => fields.get_mut(key),
        (Value::Object(fields), PathSegment::Index(idx)) => fields.get_mut(&idx.to_string()),
        (Value::Array(items), PathSegment::Index(idx)) => items.get_mut(*idx),
        (Value::Array(items), PathSegment::Key(key)) => {
            canonical_index(key).and_then(move |idx| items.get_mut(idx))
        }
        _ => None,
    }
}
