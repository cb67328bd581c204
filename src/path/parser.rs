//! Path string parser.
//!
//! Splits `a.b[2].c` style strings into typed segments. A backslash escapes
//! `.`, `[` or `]`; any other backslash is kept literally.

use super::ast::{is_escapable, Path, PathSegment};
use super::error::ParseError;
use tracing::trace;

/// Segment names that are never allowed to address a member.
pub const RESERVED_SEGMENTS: [&str; 3] = ["constructor", "__proto__", "prototype"];

/// Returns true if `name` is one of the reserved segment names.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_SEGMENTS.contains(&name)
}

/// Parser behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Reject reserved segment names instead of neutralizing them.
    pub strict_reserved: bool,
}

/// A token as it appeared in the input, escapes still in place.
struct RawToken {
    text: String,
    position: usize,
}

/// Parser for path strings.
pub struct Parser<'a> {
    input: &'a str,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given path string.
    pub fn new(input: &'a str, options: ParseOptions) -> Self {
        Self { input, options }
    }

    /// Parses the path string with default (lenient) options.
    pub fn parse(input: &str) -> Result<Path, ParseError> {
        Parser::new(input, ParseOptions::default()).parse_path()
    }

    /// Parses the path string with the given options.
    pub fn parse_with(input: &str, options: ParseOptions) -> Result<Path, ParseError> {
        Parser::new(input, options).parse_path()
    }

    fn parse_path(&self) -> Result<Path, ParseError> {
        if self.input.is_empty() {
            return Err(ParseError::Empty);
        }

        let segments = self
            .tokenize()?
            .into_iter()
            .map(|token| self.classify(token))
            .collect::<Result<Vec<_>, _>>()?;

        trace!(path = self.input, segments = segments.len(), "parsed path");
        Ok(Path::new(segments))
    }

    /// Splits the input on unescaped dots. An unescaped `[` that follows a
    /// non-empty token also starts a new token, so `a[2]` reads as `a.[2]`.
    fn tokenize(&self) -> Result<Vec<RawToken>, ParseError> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut start = 0;
        let mut chars = self.input.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '\\' => {
                    current.push('\\');
                    if let Some(&(_, next)) = chars.peek() {
                        if is_escapable(next) {
                            current.push(next);
                            chars.next();
                        }
                    }
                }
                '.' => {
                    tokens.push(Self::finish(&mut current, start)?);
                    start = pos + 1;
                }
                '[' if !current.is_empty() => {
                    tokens.push(Self::finish(&mut current, start)?);
                    start = pos;
                    current.push('[');
                }
                _ => current.push(ch),
            }
        }
        tokens.push(Self::finish(&mut current, start)?);

        Ok(tokens)
    }

    fn finish(current: &mut String, position: usize) -> Result<RawToken, ParseError> {
        if current.is_empty() {
            return Err(ParseError::EmptySegment { position });
        }
        Ok(RawToken {
            text: std::mem::take(current),
            position,
        })
    }

    fn classify(&self, token: RawToken) -> Result<PathSegment, ParseError> {
        if is_reserved(&token.text) {
            if self.options.strict_reserved {
                return Err(ParseError::ReservedSegment {
                    position: token.position,
                    name: token.text,
                });
            }
            return Ok(PathSegment::Neutralized(token.text));
        }

        if let Some(digits) = index_digits(&token.text) {
            return digits
                .parse::<usize>()
                .map(PathSegment::Index)
                .map_err(|_| ParseError::InvalidIndex {
                    position: token.position,
                    token: token.text.clone(),
                });
        }

        Ok(PathSegment::Key(unescape(&token.text)))
    }
}

/// Parses a path string with default options.
///
/// # Example
///
/// ```
/// use pathquill::path::{parse, PathSegment};
///
/// let path = parse("a.b[2].c").unwrap();
/// assert_eq!(path.segments()[2], PathSegment::Index(2));
/// ```
pub fn parse(input: &str) -> Result<Path, ParseError> {
    Parser::parse(input)
}

/// Parses a path string with explicit options.
pub fn parse_with(input: &str, options: ParseOptions) -> Result<Path, ParseError> {
    Parser::parse_with(input, options)
}

impl std::str::FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::parse(s)
    }
}

/// Returns the digits of an exact `[<digits>]` token.
fn index_digits(token: &str) -> Option<&str> {
    let inner = token.strip_prefix('[')?.strip_suffix(']')?;
    if !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit()) {
        Some(inner)
    } else {
        None
    }
}

fn unescape(token: &str) -> String {
    let mut key = String::with_capacity(token.len());
    let mut chars = token.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(&next) = chars.peek() {
                if is_escapable(next) {
                    key.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        key.push(ch);
    }
    key
}
