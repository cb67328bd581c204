//! Parsed path types.

use std::fmt;

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Named property (`name`, `a\.b`)
    Key(String),
    /// Array index (`[0]`)
    Index(usize),
    /// A reserved token (`constructor`, `__proto__`, `prototype`) that was
    /// neutralized at parse time. It never addresses anything.
    Neutralized(String),
}

impl PathSegment {
    /// The member this segment addresses, or `None` for a neutralized segment.
    pub fn name(&self) -> Option<SegmentName> {
        match self {
            PathSegment::Key(key) => Some(SegmentName::Key(key.clone())),
            PathSegment::Index(idx) => Some(SegmentName::Index(*idx)),
            PathSegment::Neutralized(_) => None,
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, PathSegment::Index(_))
    }

    pub fn is_neutralized(&self) -> bool {
        matches!(self, PathSegment::Neutralized(_))
    }
}

/// The key or index a segment resolves to inside its parent container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentName {
    Key(String),
    Index(usize),
}

impl fmt::Display for SegmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentName::Key(key) => write!(f, "{}", key),
            SegmentName::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// A complete parsed path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates a path from already-typed segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Position of the first neutralized segment, if any.
    pub fn neutralized_position(&self) -> Option<usize> {
        self.segments.iter().position(PathSegment::is_neutralized)
    }

    /// Resolves every segment to a member name, or `None` when any segment
    /// is neutralized.
    pub fn names(&self) -> Option<Vec<SegmentName>> {
        self.segments.iter().map(PathSegment::name).collect()
    }
}

impl fmt::Display for Path {
    /// Renders the path in the same grammar the parser accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
                PathSegment::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(&escape_key(key))?;
                }
                PathSegment::Neutralized(token) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(token)?;
                }
            }
        }
        Ok(())
    }
}

/// Characters that lose their special meaning when preceded by a backslash.
pub(crate) fn is_escapable(ch: char) -> bool {
    matches!(ch, '.' | '[' | ']')
}

/// Escapes a raw key so that it parses back as a single `Key` segment.
///
/// Backslashes are left alone, so a key ending in a backslash only parses
/// back when it is the last segment of a path.
///
/// # Example
///
/// ```
/// use pathquill::path::escape_key;
///
/// assert_eq!(escape_key("a.b"), "a\\.b");
/// assert_eq!(escape_key("[0]"), "\\[0\\]");
/// assert_eq!(escape_key("plain"), "plain");
/// ```
pub fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for ch in key.chars() {
        if is_escapable(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
