//! Depth-first enumeration of every member path in a tree.

use super::error::WalkError;
use crate::document::value::Value;
use crate::path::{escape_key, is_reserved};

/// Default nesting limit for [`PathWalker`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Collects the path of every member below a root.
///
/// Keys are escaped so each emitted path parses back to the member it names;
/// array elements are written as plain numbers (`list.0`). Members named after
/// a reserved segment are skipped together with their subtrees.
#[derive(Debug, Clone)]
pub struct PathWalker {
    max_depth: usize,
}

impl Default for PathWalker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl PathWalker {
    /// Creates a walker that refuses to list members nested deeper than
    /// `max_depth` levels below the root.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Lists every member path of `root`, each prefixed with `prefix`.
    ///
    /// # Example
    ///
    /// ```
    /// use pathquill::document::convert::parse_document;
    /// use pathquill::tree::PathWalker;
    ///
    /// let doc = parse_document("{a: {b: 1}, c: [2, 3]}").unwrap();
    /// let paths = PathWalker::default().collect(&doc, &[]).unwrap();
    /// assert_eq!(paths, vec!["a", "a.b", "c", "c.0", "c.1"]);
    /// ```
    pub fn collect(&self, root: &Value, prefix: &[&str]) -> Result<Vec<String>, WalkError> {
        let mut trail: Vec<String> = prefix.iter().map(|p| escape_key(p)).collect();
        let mut out = Vec::new();
        self.walk(root, 1, &mut trail, &mut out)?;
        Ok(out)
    }

    fn walk(
        &self,
        value: &Value,
        level: usize,
        trail: &mut Vec<String>,
        out: &mut Vec<String>,
    ) -> Result<(), WalkError> {
        match value {
            Value::Object(fields) => {
                for (key, child) in fields {
                    if is_reserved(key) {
                        continue;
                    }
                    self.visit(escape_key(key), child, level, trail, out)?;
                }
            }
            Value::Array(items) => {
                for (idx, child) in items.iter().enumerate() {
                    self.visit(idx.to_string(), child, level, trail, out)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn visit(
        &self,
        segment: String,
        child: &Value,
        level: usize,
        trail: &mut Vec<String>,
        out: &mut Vec<String>,
    ) -> Result<(), WalkError> {
        if level > self.max_depth {
            return Err(WalkError::DepthExceeded {
                limit: self.max_depth,
                path: trail.join("."),
            });
        }

        trail.push(segment);
        out.push(trail.join("."));
        if child.is_container() {
            self.walk(child, level + 1, trail, out)?;
        }
        trail.pop();
        Ok(())
    }
}
