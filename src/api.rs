//! Path-string operations on value trees.
//!
//! These functions parse the path on every call and then delegate to the
//! traversal primitives in [`crate::tree`].
//!
//! # Example
//!
//! ```
//! use pathquill::{get, set, Value};
//!
//! let mut doc = Value::object();
//! set(&mut doc, "server.ports[0]", Value::from(8080)).unwrap();
//! assert_eq!(get(&doc, "server.ports[0]").unwrap(), Some(&Value::from(8080)));
//! ```

use crate::config::Config;
use crate::document::value::Value;
use crate::error::Error;
use crate::path::{parse_with, ParseError, ParseOptions};
use crate::tree::{lookup, write, LookupResult, PathWalker, WalkError, DEFAULT_MAX_DEPTH};

/// Options shared by the path operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessOptions {
    /// Reject reserved segment names instead of neutralizing them.
    pub strict_reserved: bool,
    /// Nesting limit for [`all_paths_with`].
    pub max_depth: usize,
}

impl Default for AccessOptions {
    fn default() -> Self {
        Self {
            strict_reserved: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AccessOptions {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict_reserved: self.strict_reserved,
        }
    }
}

impl From<&Config> for AccessOptions {
    fn from(config: &Config) -> Self {
        Self {
            strict_reserved: config.strict_reserved,
            max_depth: config.max_depth,
        }
    }
}

/// Flat membership test: is `key` a direct member of `container`?
///
/// The key is used verbatim; dots and brackets have no special meaning here.
/// Scalars have no members, so strings do not expose indices or `length`.
///
/// ```
/// use pathquill::{exists, Value};
/// use pathquill::document::convert::parse_document;
///
/// let doc = parse_document("{'a.b': 1, a: {b: 2}}").unwrap();
/// assert!(exists(&doc, "a.b"));
/// assert!(!exists(&doc, "b"));
/// assert!(!exists(&Value::Null, "a"));
/// ```
pub fn exists(container: &Value, key: &str) -> bool {
    container.has_key(key)
}

/// Reads the value at `path`, or `None` when any step is missing.
pub fn get<'a>(container: &'a Value, path: &str) -> Result<Option<&'a Value>, ParseError> {
    get_with(container, path, AccessOptions::default())
}

pub fn get_with<'a>(
    container: &'a Value,
    path: &str,
    options: AccessOptions,
) -> Result<Option<&'a Value>, ParseError> {
    Ok(detail_with(container, path, options)?.value)
}

/// Writes `value` at `path`, creating intermediate containers as needed.
///
/// `container` is mutated in place; the returned reference is the same root.
pub fn set<'a>(container: &'a mut Value, path: &str, value: Value) -> Result<&'a mut Value, Error> {
    set_with(container, path, value, AccessOptions::default())
}

pub fn set_with<'a>(
    container: &'a mut Value,
    path: &str,
    value: Value,
    options: AccessOptions,
) -> Result<&'a mut Value, Error> {
    let parsed = parse_with(path, options.parse_options())?;
    Ok(write(container, &parsed, value)?)
}

/// Resolves `path` and reports the parent container, terminal name, value
/// and whether the member exists.
pub fn detail<'a>(container: &'a Value, path: &str) -> Result<LookupResult<'a>, ParseError> {
    detail_with(container, path, AccessOptions::default())
}

pub fn detail_with<'a>(
    container: &'a Value,
    path: &str,
    options: AccessOptions,
) -> Result<LookupResult<'a>, ParseError> {
    let parsed = parse_with(path, options.parse_options())?;
    Ok(lookup(container, &parsed))
}

/// Lists the path of every member of `container`, depth first.
pub fn all_paths(container: &Value) -> Result<Vec<String>, WalkError> {
    all_paths_with(container, &[], AccessOptions::default())
}

/// Lists member paths below `container`, each prefixed with the raw keys
/// in `prefix`.
pub fn all_paths_with(
    container: &Value,
    prefix: &[&str],
    options: AccessOptions,
) -> Result<Vec<String>, WalkError> {
    PathWalker::new(options.max_depth).collect(container, prefix)
}
