//! JSON Pointer representation for schema and instance locations.
//!
//! This module provides [`JsonPointer`] and [`PathSegment`] for addressing
//! positions inside a schema (keyword locations) and inside the validated
//! document (instance locations). Pointers render as RFC 6901 strings.

use std::fmt::{self, Display};

use thiserror::Error;

/// A segment of a JSON Pointer.
///
/// Segments are either property names or array indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A property or keyword name (e.g., `properties`, `email`)
    Field(String),
    /// An array index (e.g., `0`, `42`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }

    /// Returns the field name, or `None` for index segments.
    pub fn as_field(&self) -> Option<&str> {
        match self {
            PathSegment::Field(name) => Some(name),
            PathSegment::Index(_) => None,
        }
    }

    fn parse(token: &str, pointer: &str) -> Result<Self, PointerError> {
        let mut unescaped = String::with_capacity(token.len());
        let mut chars = token.chars();
        while let Some(c) = chars.next() {
            if c != '~' {
                unescaped.push(c);
                continue;
            }
            match chars.next() {
                Some('0') => unescaped.push('~'),
                Some('1') => unescaped.push('/'),
                _ => {
                    return Err(PointerError::InvalidEscape {
                        pointer: pointer.to_string(),
                        token: token.to_string(),
                    })
                }
            }
        }

        if is_array_index(&unescaped) {
            if let Ok(idx) = unescaped.parse() {
                return Ok(PathSegment::Index(idx));
            }
        }
        Ok(PathSegment::Field(unescaped))
    }
}

fn is_array_index(token: &str) -> bool {
    match token.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

/// Error raised when a pointer string is malformed.
///
/// A malformed pointer handed over by an evaluator indicates an evaluator
/// bug, so parsing fails immediately instead of producing a best-effort
/// location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointerError {
    /// A non-empty pointer did not start with `/`.
    #[error("JSON pointer '{0}' must be empty or start with '/'")]
    MissingLeadingSlash(String),

    /// A `~` was not followed by `0` or `1`.
    #[error("JSON pointer '{pointer}' has an invalid escape in token '{token}'")]
    InvalidEscape {
        /// The full pointer being parsed.
        pointer: String,
        /// The offending reference token.
        token: String,
    },
}

/// A JSON Pointer into a schema or a document.
///
/// `JsonPointer` represents locations like `/properties/users/items` and
/// provides methods for building pointers incrementally. Every push returns a
/// new pointer, so a parent location can be shared by any number of children.
///
/// # Example
///
/// ```rust
/// use schema_verdict::JsonPointer;
///
/// let pointer = JsonPointer::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(pointer.to_string(), "/users/0/email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPointer {
    segments: Vec<PathSegment>,
}

impl JsonPointer {
    /// Creates an empty pointer referring to the whole value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a pointer from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Creates a pointer from a single index segment.
    pub fn from_index(idx: usize) -> Self {
        Self {
            segments: vec![PathSegment::Index(idx)],
        }
    }

    /// Parses an RFC 6901 pointer string.
    ///
    /// Reference tokens made only of digits (no leading zero) become
    /// [`PathSegment::Index`]; everything else is a field.
    ///
    /// # Errors
    ///
    /// Returns [`PointerError`] when the string is neither empty nor starts
    /// with `/`, or when it contains an escape other than `~0` / `~1`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_verdict::{JsonPointer, PathSegment};
    ///
    /// let pointer = JsonPointer::parse("/properties/a~1b/0").unwrap();
    /// assert_eq!(pointer.last(), Some(&PathSegment::Index(0)));
    /// assert_eq!(pointer.to_string(), "/properties/a~1b/0");
    ///
    /// assert!(JsonPointer::parse("properties").is_err());
    /// ```
    pub fn parse(pointer: &str) -> Result<Self, PointerError> {
        if pointer.is_empty() {
            return Ok(Self::root());
        }
        let rest = pointer
            .strip_prefix('/')
            .ok_or_else(|| PointerError::MissingLeadingSlash(pointer.to_string()))?;

        let segments = rest
            .split('/')
            .map(|token| PathSegment::parse(token, pointer))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    /// Returns a new pointer with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new pointer with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this is the root pointer (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this pointer.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this pointer has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => {
                    write!(f, "/{}", name.replace('~', "~0").replace('/', "~1"))?
                }
                PathSegment::Index(idx) => write!(f, "/{}", idx)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_pointer_is_empty() {
        let pointer = JsonPointer::root();
        assert!(pointer.is_root());
        assert!(pointer.is_empty());
        assert_eq!(pointer.len(), 0);
        assert_eq!(pointer.to_string(), "");
    }

    #[test]
    fn test_field_with_index() {
        let pointer = JsonPointer::root().push_field("users").push_index(0);
        assert_eq!(pointer.to_string(), "/users/0");
    }

    #[test]
    fn test_escaping() {
        let pointer = JsonPointer::root().push_field("a/b").push_field("m~n");
        assert_eq!(pointer.to_string(), "/a~1b/m~0n");
    }

    #[test]
    fn test_parse_unescapes() {
        let pointer = JsonPointer::parse("/a~1b/m~0n").unwrap();
        let segments: Vec<_> = pointer.segments().collect();
        assert_eq!(segments[0], &PathSegment::field("a/b"));
        assert_eq!(segments[1], &PathSegment::field("m~n"));
    }

    #[test]
    fn test_parse_indices() {
        let pointer = JsonPointer::parse("/items/0/12/01/").unwrap();
        let segments: Vec<_> = pointer.segments().cloned().collect();
        assert_eq!(
            segments,
            vec![
                PathSegment::field("items"),
                PathSegment::index(0),
                PathSegment::index(12),
                PathSegment::field("01"),
                PathSegment::field(""),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_missing_slash() {
        assert_eq!(
            JsonPointer::parse("items/0"),
            Err(PointerError::MissingLeadingSlash("items/0".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_bad_escape() {
        let err = JsonPointer::parse("/a~2b").unwrap_err();
        assert!(matches!(err, PointerError::InvalidEscape { ref token, .. } if token == "a~2b"));

        assert!(JsonPointer::parse("/trailing~").is_err());
    }

    #[test]
    fn test_pointer_immutability() {
        let base = JsonPointer::root().push_field("anyOf");
        let branch_a = base.push_index(0);
        let branch_b = base.push_index(1);

        assert_eq!(base.to_string(), "/anyOf");
        assert_eq!(branch_a.to_string(), "/anyOf/0");
        assert_eq!(branch_b.to_string(), "/anyOf/1");
    }
}
