//! Error types for tree traversal.

use crate::document::value::Value;
use crate::path::SegmentName;
use std::fmt;

/// Errors raised while writing through a path.
#[derive(Debug, Clone, PartialEq)]
pub enum TraversalError {
    /// The path had no segments to write to.
    EmptyPath,
    /// A segment tried to descend into or assign through a scalar.
    ScalarDescent {
        /// Zero-based index of the offending segment.
        segment: usize,
        /// The key or index that could not be addressed.
        name: SegmentName,
        /// The scalar found where a container was needed.
        found: Value,
    },
    /// A named key was applied to a sequence.
    NonIndexKey { segment: usize, key: String },
    /// An array index lies too far past the end of the array to pad up to.
    IndexOutOfRange {
        segment: usize,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalError::EmptyPath => write!(f, "Cannot write through an empty path"),
            TraversalError::ScalarDescent {
                segment,
                name,
                found,
            } => write!(
                f,
                "Cannot descend into scalar value {} at segment {} ('{}')",
                found, segment, name
            ),
            TraversalError::NonIndexKey { segment, key } => write!(
                f,
                "Cannot use key '{}' on an array at segment {}",
                key, segment
            ),
            TraversalError::IndexOutOfRange {
                segment,
                index,
                len,
            } => write!(
                f,
                "Index {} is too far past the end of an array of length {} at segment {}",
                index, len, segment
            ),
        }
    }
}

impl std::error::Error for TraversalError {}

/// Errors raised while enumerating paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// Nesting went deeper than the configured limit.
    DepthExceeded { limit: usize, path: String },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::DepthExceeded { limit, path } => write!(
                f,
                "Maximum depth {} exceeded below '{}'",
                limit, path
            ),
        }
    }
}

impl std::error::Error for WalkError {}
