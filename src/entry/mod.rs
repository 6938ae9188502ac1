//! Entries carried by validation results.
//!
//! Errors and annotations are distinct types joined by the closed [`Entry`]
//! union. The payloads are opaque to the combination rules, which only decide
//! ordering and which entries survive.

mod annotation;
mod error_entry;

pub use annotation::AnnotationEntry;
pub use error_entry::{ErrorEntries, ErrorEntry, Severity};

use crate::location::Location;

/// Either kind of entry.
///
/// Evaluators that produce their evidence as one interleaved stream can hand
/// it to [`ValidationResult::from_entries`](crate::ValidationResult::from_entries),
/// which splits it into the two ordered sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A diagnostic explaining a failure, or an informational warning.
    Error(ErrorEntry),
    /// Informational output kept regardless of validity.
    Annotation(AnnotationEntry),
}

impl Entry {
    /// Returns the origin of the entry.
    pub fn location(&self) -> &Location {
        match self {
            Entry::Error(e) => &e.location,
            Entry::Annotation(a) => &a.location,
        }
    }

    /// Returns true for error entries.
    pub fn is_error(&self) -> bool {
        matches!(self, Entry::Error(_))
    }
}

impl From<ErrorEntry> for Entry {
    fn from(error: ErrorEntry) -> Self {
        Entry::Error(error)
    }
}

impl From<AnnotationEntry> for Entry {
    fn from(annotation: AnnotationEntry) -> Self {
        Entry::Annotation(annotation)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Entry>();
    assert_sync::<Entry>();
};
