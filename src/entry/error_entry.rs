//! Error entries attached to validation results.
//!
//! This module provides [`ErrorEntry`] for a single failure diagnostic and
//! [`ErrorEntries`] for a non-empty batch of them.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::location::Location;
use crate::pointer::JsonPointer;

/// How much weight an error entry carries.
///
/// Warnings are informational: an evaluator may attach them to a valid
/// result (e.g. use of a deprecated property) without flipping validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// The entry explains why the construct failed.
    #[default]
    Error,
    /// The entry is informational only.
    Warning,
}

/// A single diagnostic produced by a keyword evaluation.
///
/// `ErrorEntry` captures:
/// - **location**: which keyword produced it and where in the document
/// - **message**: human-readable description of the failure
/// - **code**: machine-readable code for programmatic handling
/// - **severity**: whether it explains a failure or is informational
/// - **expected** / **got**: optional detail
///
/// # Example
///
/// ```rust
/// use schema_verdict::{ErrorEntry, Location, Severity};
///
/// let location = Location::parse("/properties/email/format", "/email").unwrap();
/// let error = ErrorEntry::new(location, "invalid email format")
///     .with_code("format")
///     .with_got("not-an-email")
///     .with_expected("email");
///
/// assert_eq!(error.code, "format");
/// assert_eq!(error.severity, Severity::Error);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEntry {
    /// Where the error originated.
    pub location: Location,
    /// Human-readable error message.
    pub message: String,
    /// Machine-readable error code (e.g., `one_of_multiple_matched`).
    pub code: String,
    /// Whether this entry explains a failure or is informational.
    pub severity: Severity,
    /// Description of what was expected.
    pub expected: Option<String>,
    /// The actual value that was received (formatted as string).
    pub got: Option<String>,
}

impl ErrorEntry {
    /// Creates a new error entry with the given location and message.
    ///
    /// The code defaults to the keyword at `location` when there is one, and
    /// to `"validation_error"` otherwise.
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        let code = location.keyword().unwrap_or("validation_error").to_string();
        Self {
            location,
            message: message.into(),
            code,
            severity: Severity::Error,
            expected: None,
            got: None,
        }
    }

    /// Creates an informational entry that does not explain a failure.
    pub fn warning(location: Location, message: impl Into<String>) -> Self {
        Self::new(location, message).with_severity(Severity::Warning)
    }

    /// Sets the error code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the severity and returns self for chaining.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the "expected" field and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Sets the "got" field and returns self for chaining.
    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    /// Returns the document position this entry applies to.
    pub fn instance_location(&self) -> &JsonPointer {
        self.location.instance_location()
    }

    /// Returns true for entries that explain a failure.
    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.severity == Severity::Warning {
            write!(f, "warning: ")?;
        }
        write!(f, "{}: {}", self.location, self.message)?;

        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }

        Ok(())
    }
}

/// A non-empty batch of error entries.
///
/// `ErrorEntries` is the failure side of
/// [`ValidationResult::into_validation`](crate::ValidationResult::into_validation):
/// a failed `Validation` always explains itself with at least one entry.
/// Batches combine through `Semigroup`, preserving order.
///
/// ```rust
/// use schema_verdict::{ErrorEntries, ErrorEntry, Location};
/// use stillwater::prelude::*;
///
/// let first = ErrorEntries::single(ErrorEntry::new(Location::default(), "first"));
/// let second = ErrorEntries::single(ErrorEntry::new(Location::default(), "second"));
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().message, "first");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEntries(NonEmptyVec<ErrorEntry>);

// never empty
#[allow(clippy::len_without_is_empty)]
impl ErrorEntries {
    /// Creates a batch containing a single entry.
    pub fn single(error: ErrorEntry) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a batch from a vec, or `None` when the vec is empty.
    pub fn from_vec(errors: Vec<ErrorEntry>) -> Option<Self> {
        let mut rest = errors.into_iter();
        let head = rest.next()?;
        Some(rest.fold(Self::single(head), |acc, e| acc.combine(Self::single(e))))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first entry.
    pub fn first(&self) -> &ErrorEntry {
        self.0.head()
    }

    /// Returns an iterator over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.0.iter()
    }

    /// Returns all entries with the specified code.
    pub fn with_code(&self, code: &str) -> Vec<&ErrorEntry> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// Converts the batch into a `Vec<ErrorEntry>`.
    pub fn into_vec(self) -> Vec<ErrorEntry> {
        self.0.into_vec()
    }
}

impl Semigroup for ErrorEntries {
    fn combine(self, other: Self) -> Self {
        ErrorEntries(self.0.combine(other.0))
    }
}

impl Display for ErrorEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl IntoIterator for ErrorEntries {
    type Item = ErrorEntry;
    type IntoIter = std::vec::IntoIter<ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}
