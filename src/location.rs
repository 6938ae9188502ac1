//! Where an entry came from: the schema keyword and the document position.

use std::fmt::{self, Display};

use crate::pointer::{JsonPointer, PointerError};

/// The origin of an error or annotation.
///
/// A `Location` pairs the keyword location (the path through the schema,
/// ending in the keyword that produced the entry) with the instance location
/// (the position in the validated document). When the evaluator resolved the
/// schema through a `$ref`, it may also record the absolute keyword location.
///
/// # Example
///
/// ```rust
/// use schema_verdict::{JsonPointer, Location};
///
/// let location = Location::new(
///     JsonPointer::root().push_field("properties").push_field("age").push_field("minimum"),
///     JsonPointer::from_field("age"),
/// );
///
/// assert_eq!(location.keyword(), Some("minimum"));
/// assert_eq!(location.to_string(), "/age (/properties/age/minimum)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location {
    keyword_location: JsonPointer,
    absolute_keyword_location: Option<String>,
    instance_location: JsonPointer,
}

impl Location {
    /// Creates a location from a keyword location and an instance location.
    pub fn new(keyword_location: JsonPointer, instance_location: JsonPointer) -> Self {
        Self {
            keyword_location,
            absolute_keyword_location: None,
            instance_location,
        }
    }

    /// Parses both pointers from their RFC 6901 string forms.
    ///
    /// # Errors
    ///
    /// Returns the [`PointerError`] of whichever pointer is malformed.
    pub fn parse(keyword_location: &str, instance_location: &str) -> Result<Self, PointerError> {
        Ok(Self::new(
            JsonPointer::parse(keyword_location)?,
            JsonPointer::parse(instance_location)?,
        ))
    }

    /// Sets the absolute keyword location (a resolved schema URI).
    pub fn with_absolute(mut self, uri: impl Into<String>) -> Self {
        self.absolute_keyword_location = Some(uri.into());
        self
    }

    /// Returns the path through the schema to the keyword.
    pub fn keyword_location(&self) -> &JsonPointer {
        &self.keyword_location
    }

    /// Returns the absolute keyword location, if the evaluator supplied one.
    pub fn absolute_keyword_location(&self) -> Option<&str> {
        self.absolute_keyword_location.as_deref()
    }

    /// Returns the position in the document.
    pub fn instance_location(&self) -> &JsonPointer {
        &self.instance_location
    }

    /// Returns the keyword name, i.e. the last keyword-location segment when
    /// it is a property name.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword_location.last().and_then(|s| s.as_field())
    }

    /// Returns a location one keyword deeper into the schema, at the same
    /// instance position. The absolute keyword location is dropped since it
    /// no longer describes the new keyword.
    pub fn push_keyword(&self, keyword: impl Into<String>) -> Self {
        Self::new(
            self.keyword_location.push_field(keyword),
            self.instance_location.clone(),
        )
    }

    /// Returns the location of the `index`-th subschema of an array-valued
    /// keyword (e.g. `/anyOf` becomes `/anyOf/1`).
    pub fn push_subschema(&self, index: usize) -> Self {
        Self::new(
            self.keyword_location.push_index(index),
            self.instance_location.clone(),
        )
    }

    /// Returns a copy of this location pointing at a different document
    /// position.
    pub fn at_instance(&self, instance_location: JsonPointer) -> Self {
        Self {
            keyword_location: self.keyword_location.clone(),
            absolute_keyword_location: self.absolute_keyword_location.clone(),
            instance_location,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_location.is_root() {
            write!(f, "(root)")?;
        } else {
            write!(f, "{}", self.instance_location)?;
        }
        match &self.absolute_keyword_location {
            Some(uri) => write!(f, " ({})", uri),
            None => write!(f, " ({})", self.keyword_location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_is_last_field() {
        let location = Location::parse("/allOf/0/type", "/items/3").unwrap();
        assert_eq!(location.keyword(), Some("type"));
        assert_eq!(location.instance_location().to_string(), "/items/3");
    }

    #[test]
    fn test_keyword_absent_for_index_or_root() {
        assert_eq!(Location::parse("/anyOf/1", "").unwrap().keyword(), None);
        assert_eq!(Location::default().keyword(), None);
    }

    #[test]
    fn test_parse_fails_fast() {
        assert!(Location::parse("type", "").is_err());
        assert!(Location::parse("/type", "name").is_err());
    }

    #[test]
    fn test_push_subschema() {
        let any_of = Location::parse("/anyOf", "/id").unwrap();
        let branch = any_of.push_subschema(2).push_keyword("type");
        assert_eq!(branch.keyword_location().to_string(), "/anyOf/2/type");
        assert_eq!(branch.instance_location(), any_of.instance_location());
    }

    #[test]
    fn test_display_prefers_absolute() {
        let location = Location::parse("/$ref/type", "")
            .unwrap()
            .with_absolute("https://example.com/user.json#/type");
        assert_eq!(
            location.to_string(),
            "(root) (https://example.com/user.json#/type)"
        );
        assert_eq!(
            location.absolute_keyword_location(),
            Some("https://example.com/user.json#/type")
        );
    }
}
