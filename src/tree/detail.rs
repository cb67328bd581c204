//! Detailed lookup: parent, terminal name, value and existence in one pass.

use super::reader::read;
use crate::document::value::Value;
use crate::path::{Path, SegmentName};

/// Everything known about the target of a path.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult<'a> {
    /// The container directly holding the target (the root for one-segment paths).
    pub parent: Option<&'a Value>,
    /// The terminal key or index; `None` when the terminal segment is neutralized.
    pub name: Option<SegmentName>,
    /// The resolved value, if any.
    pub value: Option<&'a Value>,
    /// Whether `name` is a member of a non-null `parent`.
    pub exists: bool,
}

/// Resolves `path` against `root` and reports parent, name, value and existence.
///
/// A member holding `null` still exists; a missing member does not.
pub fn lookup<'a>(root: &'a Value, path: &Path) -> LookupResult<'a> {
    let len = path.len();
    let parent = if len > 1 {
        read(root, path, len - 1)
    } else {
        Some(root)
    };
    let value = read(root, path, len);
    let name = path.last().and_then(|segment| segment.name());

    let exists = match (parent, &name) {
        (Some(parent), Some(name)) => has_member(parent, name),
        _ => false,
    };

    LookupResult {
        parent,
        name,
        value,
        exists,
    }
}

fn has_member(parent: &Value, name: &SegmentName) -> bool {
    match name {
        SegmentName::Key(key) => parent.has_key(key),
        SegmentName::Index(idx) => parent.has_index(*idx),
    }
}
