//! Error types for path parsing.

use std::fmt;

/// Errors that can occur while parsing a path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The path string was empty.
    Empty,
    /// A separator produced an empty segment (leading, trailing or doubled dot).
    EmptySegment { position: usize },
    /// A bracketed index did not fit in `usize`.
    InvalidIndex { position: usize, token: String },
    /// A reserved segment name was used while strict mode was on.
    ReservedSegment { position: usize, name: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Path is empty"),
            ParseError::EmptySegment { position } => {
                write!(f, "Empty path segment at position {}", position)
            }
            ParseError::InvalidIndex { position, token } => {
                write!(f, "Invalid array index '{}' at position {}", token, position)
            }
            ParseError::ReservedSegment { position, name } => write!(
                f,
                "Reserved segment name '{}' at position {} is not allowed",
                name, position
            ),
        }
    }
}

impl std::error::Error for ParseError {}
