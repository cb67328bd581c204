//! PathQuill - read and write deeply nested values with path strings.
//!
//! A path such as `servers[0].tags.primary` is parsed into typed segments
//! and walked against an in-memory [`Value`] tree. Reads never fail on
//! missing members; writes create missing intermediate containers.
//!
//! ```
//! use pathquill::{all_paths, detail, get, set, Value};
//!
//! let mut doc = Value::object();
//! set(&mut doc, "a[0].b", Value::from(5)).unwrap();
//!
//! assert_eq!(get(&doc, "a[0].b").unwrap(), Some(&Value::from(5)));
//! assert!(detail(&doc, "a[0]").unwrap().exists);
//! assert_eq!(all_paths(&doc).unwrap(), vec!["a", "a.0", "a.0.b"]);
//! ```

pub mod api;
pub mod config;
pub mod document;
pub mod error;
pub mod file;
pub mod path;
pub mod tree;

pub use api::{
    all_paths, all_paths_with, detail, detail_with, exists, get, get_with, set, set_with,
    AccessOptions,
};
pub use document::value::{Number, Value, ValueKind};
pub use error::Error;
pub use path::{ParseError, Path, PathSegment, SegmentName};
pub use tree::{LookupResult, TraversalError, WalkError};
