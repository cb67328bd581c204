//! Traversal of value trees along parsed paths.

pub mod detail;
pub mod error;
pub mod reader;
pub mod walker;
pub mod writer;

pub use detail::{lookup, LookupResult};
pub use error::{TraversalError, WalkError};
pub use reader::{read, read_mut};
pub use walker::{PathWalker, DEFAULT_MAX_DEPTH};
pub use writer::{write, MAX_ARRAY_PADDING};
