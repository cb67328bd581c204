//! Write access along a parsed path, creating missing containers on the way.

use super::error::TraversalError;
use crate::document::value::{canonical_index, Value};
use crate::path::{Path, PathSegment, SegmentName};
use tracing::{debug, warn};

/// Most null slots a single write may append before the target index.
pub const MAX_ARRAY_PADDING: usize = 10_000;

/// Assigns `value` at `path` inside `root` and returns `root`.
///
/// Every segment but the last is walked with auto-vivification: an absent or
/// falsy member is replaced by an empty array when the next segment is an
/// index, and by an empty object otherwise. Writing past the end of an array
/// pads it with nulls, at most [`MAX_ARRAY_PADDING`] of them.
///
/// A path containing a neutralized segment leaves `root` untouched.
///
/// Containers created before a failing segment stay in place; the write is
/// not atomic.
///
/// # Example
///
/// ```
/// use pathquill::document::value::Value;
/// use pathquill::path::parse;
/// use pathquill::tree::{read, write};
///
/// let mut root = Value::object();
/// let path = parse("a[0].b").unwrap();
/// write(&mut root, &path, Value::from(5)).unwrap();
/// assert_eq!(read(&root, &path, path.len()), Some(&Value::from(5)));
/// ```
///
/// # Errors
///
/// - [`TraversalError::EmptyPath`] for a path without segments
/// - [`TraversalError::ScalarDescent`] when a truthy scalar (or a scalar
///   root) sits where a container is needed
/// - [`TraversalError::NonIndexKey`] when a named key is applied to an array
/// - [`TraversalError::IndexOutOfRange`] when an index lies more than
///   [`MAX_ARRAY_PADDING`] slots past the end of an array
pub fn write<'a>(
    root: &'a mut Value,
    path: &Path,
    value: Value,
) -> Result<&'a mut Value, TraversalError> {
    if path.is_empty() {
        return Err(TraversalError::EmptyPath);
    }

    let Some(names) = path.names() else {
        warn!(
            %path,
            segment = path.neutralized_position().unwrap_or_default(),
            "ignoring write through reserved segment"
        );
        return Ok(root);
    };

    let segments = path.segments();
    let last = names.len() - 1;
    {
        let mut current = &mut *root;
        for (idx, name) in names[..last].iter().enumerate() {
            current = descend(current, idx, name, &segments[idx + 1])?;
        }
        *slot(current, last, &names[last])? = value;
    }

    Ok(root)
}

/// Steps into `name`, replacing an absent or falsy member with a container
/// shaped for the `next` segment.
fn descend<'a>(
    container: &'a mut Value,
    idx: usize,
    name: &SegmentName,
    next: &PathSegment,
) -> Result<&'a mut Value, TraversalError> {
    let member = slot(container, idx, name)?;
    if member.is_falsy() {
        *member = if next.is_index() {
            Value::array()
        } else {
            Value::object()
        };
        debug!(segment = idx, %name, kind = ?member.kind(), "auto-vivified container");
    }
    Ok(member)
}

/// Returns a mutable reference to the member slot, creating it as null when
/// missing.
fn slot<'a>(
    container: &'a mut Value,
    idx: usize,
    name: &SegmentName,
) -> Result<&'a mut Value, TraversalError> {
    match (container, name) {
        (Value::Object(fields), SegmentName::Key(key)) => {
            Ok(fields.entry(key.clone()).or_insert(Value::Null))
        }
        (Value::Object(fields), SegmentName::Index(index)) => {
            Ok(fields.entry(index.to_string()).or_insert(Value::Null))
        }
        (Value::Array(items), SegmentName::Index(index)) => array_slot(items, idx, *index),
        (Value::Array(items), SegmentName::Key(key)) => match canonical_index(key) {
            Some(index) => array_slot(items, idx, index),
            None => Err(TraversalError::NonIndexKey {
                segment: idx,
                key: key.clone(),
            }),
        },
        (found, name) => Err(TraversalError::ScalarDescent {
            segment: idx,
            name: name.clone(),
            found: found.clone(),
        }),
    }
}

fn array_slot(
    items: &mut Vec<Value>,
    idx: usize,
    index: usize,
) -> Result<&mut Value, TraversalError> {
    let len = items.len();
    if index >= len {
        if index - len > MAX_ARRAY_PADDING {
            return Err(TraversalError::IndexOutOfRange {
                segment: idx,
                index,
                len,
            });
        }
        items.resize(index + 1, Value::Null);
    }
    Ok(&mut items[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::convert::parse_document;
    use crate::path::parse;
    use crate::tree::read;

    fn set(root: &mut Value, path: &str, value: Value) -> Result<(), TraversalError> {
        write(root, &parse(path).unwrap(), value).map(|_| ())
    }

    #[test]
    fn test_write_top_level() {
        let mut root = Value::object();
        set(&mut root, "a", Value::from(1)).unwrap();
        assert_eq!(root, parse_document("{a: 1}").unwrap());
    }

    #[test]
    fn test_write_creates_objects() {
        let mut root = Value::object();
        set(&mut root, "a.b.c", Value::from("x")).unwrap();
        assert_eq!(root, parse_document("{a: {b: {c: x}}}").unwrap());
    }

    #[test]
    fn test_write_creates_array_for_index() {
        let mut root = Value::object();
        set(&mut root, "a[0].b", Value::from(5)).unwrap();
        assert_eq!(root, parse_document("{a: [{b: 5}]}").unwrap());
    }

    #[test]
    fn test_write_pads_array_with_null() {
        let mut root = Value::object();
        set(&mut root, "a[2]", Value::from(true)).unwrap();
        assert_eq!(root, parse_document("{a: [null, null, true]}").unwrap());
    }

    #[test]
    fn test_write_padding_limit() {
        let mut root = Value::object();
        let path = format!("a[{}]", MAX_ARRAY_PADDING);
        set(&mut root, &path, Value::from(1)).unwrap();
        assert_eq!(
            read(&root, &parse(&path).unwrap(), 2),
            Some(&Value::from(1))
        );

        let mut root = parse_document("{a: [0]}").unwrap();
        let index = MAX_ARRAY_PADDING + 2;
        let err = set(&mut root, &format!("a[{}]", index), Value::from(1)).unwrap_err();
        assert_eq!(
            err,
            TraversalError::IndexOutOfRange {
                segment: 1,
                index,
                len: 1
            }
        );
        assert_eq!(root, parse_document("{a: [0]}").unwrap());
    }

    #[test]
    fn test_write_huge_index_fails() {
        for index in [100_000_000_000_000usize, usize::MAX] {
            let mut root = Value::object();
            let err = set(&mut root, &format!("a[{}]", index), Value::from(1)).unwrap_err();
            assert_eq!(
                err,
                TraversalError::IndexOutOfRange {
                    segment: 1,
                    index,
                    len: 0
                }
            );
            assert_eq!(root, parse_document("{a: []}").unwrap());
        }

        let mut root = parse_document("{list: []}").unwrap();
        let err = set(&mut root, &format!("list.{}.x", usize::MAX), Value::Null).unwrap_err();
        assert!(matches!(err, TraversalError::IndexOutOfRange { segment: 1, .. }));
    }

    #[test]
    fn test_write_keeps_existing_containers() {
        let mut root = parse_document("{a: {keep: 1}}").unwrap();
        set(&mut root, "a.new", Value::from(2)).unwrap();
        assert_eq!(root, parse_document("{a: {keep: 1, new: 2}}").unwrap());
    }

    #[test]
    fn test_write_replaces_falsy_intermediates() {
        let mut root = parse_document("{a: null, b: 0, c: '', d: false}").unwrap();
        set(&mut root, "a.x", Value::from(1)).unwrap();
        set(&mut root, "b.x", Value::from(1)).unwrap();
        set(&mut root, "c[0]", Value::from(1)).unwrap();
        set(&mut root, "d.x", Value::from(1)).unwrap();
        assert_eq!(
            root,
            parse_document("{a: {x: 1}, b: {x: 1}, c: [1], d: {x: 1}}").unwrap()
        );
    }

    #[test]
    fn test_write_overwrites_terminal() {
        let mut root = parse_document("{a: {b: 1}}").unwrap();
        set(&mut root, "a.b", parse_document("[1, 2]").unwrap()).unwrap();
        assert_eq!(root, parse_document("{a: {b: [1, 2]}}").unwrap());
    }

    #[test]
    fn test_write_returns_root() {
        let mut root = Value::object();
        let path = parse("x.y").unwrap();
        let returned = write(&mut root, &path, Value::from(1)).unwrap();
        assert!(returned.has_key("x"));
    }

    #[test]
    fn test_write_scalar_descent_fails() {
        let mut root = parse_document("{a: 1}").unwrap();
        let err = set(&mut root, "a.b", Value::from(2)).unwrap_err();
        assert_eq!(
            err,
            TraversalError::ScalarDescent {
                segment: 1,
                name: SegmentName::Key("b".to_string()),
                found: Value::from(1),
            }
        );
        assert_eq!(root, parse_document("{a: 1}").unwrap());
    }

    #[test]
    fn test_write_scalar_root_fails() {
        let mut root = Value::from("text");
        let err = set(&mut root, "a", Value::from(1)).unwrap_err();
        assert!(matches!(err, TraversalError::ScalarDescent { segment: 0, .. }));

        let mut root = Value::Null;
        assert!(set(&mut root, "a", Value::from(1)).is_err());
    }

    #[test]
    fn test_write_failure_keeps_earlier_state() {
        let mut root = parse_document("{a: {b: 7}}").unwrap();
        set(&mut root, "q.r", Value::from(7)).unwrap();
        let err = set(&mut root, "q.r.s", Value::from(1)).unwrap_err();
        assert!(matches!(err, TraversalError::ScalarDescent { segment: 2, .. }));
        assert_eq!(root, parse_document("{a: {b: 7}, q: {r: 7}}").unwrap());
    }

    #[test]
    fn test_write_key_on_array_fails() {
        let mut root = parse_document("{a: [1, 2]}").unwrap();
        let err = set(&mut root, "a.name", Value::from(1)).unwrap_err();
        assert_eq!(
            err,
            TraversalError::NonIndexKey {
                segment: 1,
                key: "name".to_string()
            }
        );
    }

    #[test]
    fn test_write_canonical_key_on_array() {
        let mut root = parse_document("{a: [1, 2]}").unwrap();
        set(&mut root, "a.1", Value::from(9)).unwrap();
        assert_eq!(root, parse_document("{a: [1, 9]}").unwrap());
    }

    #[test]
    fn test_write_neutralized_is_noop() {
        let mut root = Value::object();
        set(&mut root, "constructor.x", Value::from(1)).unwrap();
        set(&mut root, "a.__proto__", Value::from(1)).unwrap();
        set(&mut root, "a.prototype.b", Value::from(1)).unwrap();
        assert_eq!(root, Value::object());
    }

    #[test]
    fn test_write_empty_path_fails() {
        let mut root = Value::object();
        let err = write(&mut root, &Path::default(), Value::Null).unwrap_err();
        assert_eq!(err, TraversalError::EmptyPath);
    }

    #[test]
    fn test_write_then_read() {
        let mut root = Value::object();
        let path = parse("deep[1].list[0].name").unwrap();
        write(&mut root, &path, Value::from("v")).unwrap();
        assert_eq!(read(&root, &path, path.len()), Some(&Value::from("v")));
    }
}
