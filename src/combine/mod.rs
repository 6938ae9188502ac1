//! Rules for merging child results into a parent result.
//!
//! When a schema construct applies several subschemas to the same document
//! location, each subschema yields its own [`ValidationResult`] and the
//! construct's result is derived from them:
//!
//! - [`all_of`]: every child must hold (`allOf`, `properties`, `items`, ...)
//! - [`any_of`]: at least one child must hold
//! - [`one_of`]: exactly one child must hold
//! - [`not`]: the child must not hold
//! - [`if_then_else`]: the condition selects which child decides
//!
//! The functions here use [`CombineOptions::default`]; call the methods on
//! [`CombineOptions`] to choose another policy. Every rule consumes its
//! children and builds fresh sequences, and none of them reorders or
//! deduplicates entries.
//!
//! # Example
//!
//! ```rust
//! use schema_verdict::combine;
//! use schema_verdict::{ErrorEntry, Location, ValidationResult};
//!
//! let location = Location::parse("/anyOf", "/id").unwrap();
//! let as_string = ValidationResult::invalid(vec![
//!     ErrorEntry::new(location.push_subschema(0).push_keyword("type"), "expected string"),
//! ]);
//! let as_integer = ValidationResult::valid();
//!
//! let result = combine::any_of(vec![as_string, as_integer], &location);
//! assert!(result.is_valid());
//! // the failed alternative leaves no trace
//! assert!(result.errors().is_empty());
//! ```

mod options;
mod rules;

pub use options::{CombineOptions, Retention};

use crate::location::Location;
use crate::result::ValidationResult;

/// Conjunctive merge with default options. See [`CombineOptions::all_of`].
pub fn all_of(children: impl IntoIterator<Item = ValidationResult>) -> ValidationResult {
    CombineOptions::default().all_of(children)
}

/// At-least-one merge with default options. See [`CombineOptions::any_of`].
pub fn any_of(
    children: impl IntoIterator<Item = ValidationResult>,
    location: &Location,
) -> ValidationResult {
    CombineOptions::default().any_of(children, location)
}

/// Exactly-one merge with default options. See [`CombineOptions::one_of`].
pub fn one_of(
    children: impl IntoIterator<Item = ValidationResult>,
    location: &Location,
) -> ValidationResult {
    CombineOptions::default().one_of(children, location)
}

/// Negation with default options. See [`CombineOptions::not`].
pub fn not(child: ValidationResult, location: &Location) -> ValidationResult {
    CombineOptions::default().not(child, location)
}

/// Conditional application with default options. See
/// [`CombineOptions::if_then_else`].
pub fn if_then_else(
    condition: ValidationResult,
    then: Option<ValidationResult>,
    otherwise: Option<ValidationResult>,
) -> ValidationResult {
    CombineOptions::default().if_then_else(condition, then, otherwise)
}
