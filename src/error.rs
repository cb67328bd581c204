//! Crate-level error type.

use crate::path::ParseError;
use crate::tree::TraversalError;
use std::fmt;

/// Any failure from a path-string operation that both parses and writes.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The path string could not be parsed.
    Parse(ParseError),
    /// The parsed path could not be written through.
    Traversal(TraversalError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "{}", err),
            Error::Traversal(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Traversal(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<TraversalError> for Error {
    fn from(err: TraversalError) -> Self {
        Error::Traversal(err)
    }
}
