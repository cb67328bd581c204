//! Path strings for addressing nested values.
//!
//! # Supported Syntax
//!
//! - `a.b.c` - Named properties separated by dots
//! - `a[2]` or `a.[2]` - Array index
//! - `a\.b` - Escaped dot inside a key (also `\[`, `\]` and `\\`)
//! - `constructor`, `__proto__`, `prototype` - Reserved; neutralized by
//!   default, rejected in strict mode
//!
//! # Examples
//!
//! ```
//! // users[0].name  - name of the first user
//! // servers.eu\.west.port - key "eu.west" under "servers"
//! ```

pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{escape_key, Path, PathSegment, SegmentName};
pub use error::ParseError;
pub use parser::{is_reserved, parse, parse_with, ParseOptions, Parser, RESERVED_SEGMENTS};
