//! The outcome of evaluating one schema construct at one document location.
//!
//! [`ValidationResult`] is an immutable value: a validity flag plus ordered
//! errors and annotations. Results are built once by a keyword evaluation or
//! by merging child results (see [`combine`](crate::combine)) and are only
//! read afterwards.

use indexmap::IndexMap;
use stillwater::prelude::*;
use stillwater::Validation;

use crate::entry::{AnnotationEntry, Entry, ErrorEntries, ErrorEntry};
use crate::location::Location;
use crate::pointer::JsonPointer;

/// Validity plus the evidence gathered while deciding it.
///
/// The `valid` flag is the only source of truth for pass/fail. A valid result
/// may still carry errors (informational warnings, or whatever an evaluator
/// chose to attach), so never infer validity from `errors().is_empty()`.
///
/// Entries keep their insertion order and are never deduplicated.
///
/// # Example
///
/// ```rust
/// use schema_verdict::{AnnotationEntry, ErrorEntry, Location, ValidationResult};
/// use serde_json::json;
///
/// let location = Location::parse("/properties", "").unwrap();
/// let result = ValidationResult::invalid(vec![ErrorEntry::new(location.clone(), "bad name")])
///     .with_annotation(AnnotationEntry::new(location, json!(["name"])));
///
/// assert!(!result.is_valid());
/// assert_eq!(result.errors().len(), 1);
/// assert_eq!(result.annotations().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<ErrorEntry>,
    annotations: Vec<AnnotationEntry>,
}

impl ValidationResult {
    /// Creates a result from a validity outcome and its entries.
    ///
    /// Errors supplied alongside `valid = true` are kept as they are.
    pub fn new(valid: bool, errors: Vec<ErrorEntry>, annotations: Vec<AnnotationEntry>) -> Self {
        Self {
            valid,
            errors,
            annotations,
        }
    }

    /// A valid result with no entries.
    pub fn valid() -> Self {
        Self::new(true, Vec::new(), Vec::new())
    }

    /// An invalid result explained by `errors`.
    pub fn invalid(errors: Vec<ErrorEntry>) -> Self {
        Self::new(false, errors, Vec::new())
    }

    /// Creates a result from one interleaved stream of entries, splitting it
    /// into errors and annotations while keeping the relative order of each.
    pub fn from_entries(valid: bool, entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut errors = Vec::new();
        let mut annotations = Vec::new();
        for entry in entries {
            match entry {
                Entry::Error(e) => errors.push(e),
                Entry::Annotation(a) => annotations.push(a),
            }
        }
        Self::new(valid, errors, annotations)
    }

    /// Returns a new result with `error` appended. Validity is unchanged.
    pub fn with_error(mut self, error: ErrorEntry) -> Self {
        self.errors.push(error);
        self
    }

    /// Returns a new result with `annotation` appended.
    pub fn with_annotation(mut self, annotation: AnnotationEntry) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Whether the construct was satisfied.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The errors, in evaluation order.
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    /// The annotations, in evaluation order.
    pub fn annotations(&self) -> &[AnnotationEntry] {
        &self.annotations
    }

    /// Returns true if any error explains a failure (as opposed to a warning).
    pub fn has_blocking_errors(&self) -> bool {
        self.errors.iter().any(ErrorEntry::is_blocking)
    }

    /// Returns all errors reported at the given document position.
    pub fn errors_at(&self, instance_location: &JsonPointer) -> Vec<&ErrorEntry> {
        self.errors
            .iter()
            .filter(|e| e.instance_location() == instance_location)
            .collect()
    }

    /// Returns all errors with the specified code.
    pub fn errors_with_code(&self, code: &str) -> Vec<&ErrorEntry> {
        self.errors.iter().filter(|e| e.code == code).collect()
    }

    /// Returns all annotations produced by `keyword`, in order.
    pub fn annotations_for(&self, keyword: &str) -> Vec<&AnnotationEntry> {
        self.annotations
            .iter()
            .filter(|a| a.keyword() == Some(keyword))
            .collect()
    }

    /// Groups errors by document position. Positions appear in the order of
    /// their first error; errors keep their order within each group.
    pub fn errors_by_instance(&self) -> IndexMap<&JsonPointer, Vec<&ErrorEntry>> {
        let mut grouped: IndexMap<&JsonPointer, Vec<&ErrorEntry>> = IndexMap::new();
        for error in &self.errors {
            grouped
                .entry(error.instance_location())
                .or_default()
                .push(error);
        }
        grouped
    }

    /// Splits the result into its parts.
    pub fn into_parts(self) -> (bool, Vec<ErrorEntry>, Vec<AnnotationEntry>) {
        (self.valid, self.errors, self.annotations)
    }

    /// Returns every entry, errors first then annotations, each in order.
    pub fn into_entries(self) -> Vec<Entry> {
        self.errors
            .into_iter()
            .map(Entry::from)
            .chain(self.annotations.into_iter().map(Entry::from))
            .collect()
    }

    /// Converts to stillwater's `Validation`.
    ///
    /// A valid result becomes `Success` with its annotations; errors attached
    /// to a valid result are dropped. An invalid result becomes `Failure` with
    /// its errors. If an invalid result carries no errors at all, a single
    /// `validation_failed` entry at `location` stands in for them.
    pub fn into_validation(
        self,
        location: &Location,
    ) -> Validation<Vec<AnnotationEntry>, ErrorEntries> {
        if self.valid {
            return Validation::Success(self.annotations);
        }
        let errors = ErrorEntries::from_vec(self.errors).unwrap_or_else(|| {
            ErrorEntries::single(
                ErrorEntry::new(location.clone(), "validation failed")
                    .with_code("validation_failed"),
            )
        });
        Validation::Failure(errors)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

/// Conjunctive merge: both must hold, entries concatenate in order.
impl Semigroup for ValidationResult {
    fn combine(mut self, other: Self) -> Self {
        self.valid &= other.valid;
        self.errors.extend(other.errors);
        self.annotations.extend(other.annotations);
        self
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationResult>();
    assert_sync::<ValidationResult>();
};
