//! Annotation entries.

use serde_json::Value;

use crate::location::Location;
use crate::pointer::JsonPointer;

/// Informational output of a keyword, e.g. the property names that
/// `properties` evaluated, or the `title` of a schema.
///
/// Annotations are collected whether or not the construct was valid, so
/// keywords like `unevaluatedProperties` and report formatters can see them.
///
/// # Example
///
/// ```rust
/// use schema_verdict::{AnnotationEntry, Location};
/// use serde_json::json;
///
/// let annotation = AnnotationEntry::new(
///     Location::parse("/properties", "").unwrap(),
///     json!(["name", "age"]),
/// );
///
/// assert_eq!(annotation.keyword(), Some("properties"));
/// assert_eq!(annotation.branch, None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationEntry {
    /// Where the annotation originated.
    pub location: Location,
    /// The annotation payload.
    pub value: Value,
    /// Index of the disjunction branch this annotation came from, set only
    /// when that branch did not contribute to the disjunction's outcome and
    /// the annotation was kept anyway.
    pub branch: Option<usize>,
}

impl AnnotationEntry {
    /// Creates a new annotation.
    pub fn new(location: Location, value: impl Into<Value>) -> Self {
        Self {
            location,
            value: value.into(),
            branch: None,
        }
    }

    /// Returns the keyword that produced this annotation.
    pub fn keyword(&self) -> Option<&str> {
        self.location.keyword()
    }

    /// Returns the document position this annotation applies to.
    pub fn instance_location(&self) -> &JsonPointer {
        self.location.instance_location()
    }

    /// Returns true unless the annotation was kept from a branch that did
    /// not contribute to the outcome.
    pub fn is_contributing(&self) -> bool {
        self.branch.is_none()
    }

    /// Marks this annotation as coming from the non-contributing branch
    /// `index`. An existing mark from a deeper disjunction is kept.
    pub(crate) fn tagged(mut self, index: usize) -> Self {
        if self.branch.is_none() {
            self.branch = Some(index);
        }
        self
    }
}
