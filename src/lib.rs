//! # schema-verdict
//!
//! The result model of a JSON-Schema-style validator: what one schema
//! construct concluded about one document location, and how such conclusions
//! merge as validation recurses through subschemas.
//!
//! ## Overview
//!
//! A [`ValidationResult`] is an immutable value holding a validity flag and
//! two ordered sequences: errors explaining failures, and annotations that
//! keywords emit whether or not they passed. Keyword evaluators (outside this
//! crate) build leaf results; the rules in [`combine`] derive a parent result
//! from its children:
//!
//! - conjunction (`allOf`, `properties`, ...): all must hold, everything is kept
//! - disjunction (`anyOf`, `oneOf`): only contributing branches are kept on success
//! - negation (`not`) and conditionals (`if` / `then` / `else`)
//!
//! Validation failure is data, never a Rust error: the `valid` flag is the
//! single source of truth.
//!
//! ## Core Types
//!
//! - [`ValidationResult`]: validity plus ordered errors and annotations
//! - [`ErrorEntry`] / [`AnnotationEntry`] / [`Entry`]: the evidence, with its [`Location`]
//! - [`JsonPointer`]: keyword and instance locations (RFC 6901)
//! - [`CombineOptions`]: annotation retention and failure-summary policy
//! - [`Evaluator`] / [`Applicator`]: running subschemas and merging their results
//!
//! ## Example
//!
//! ```rust
//! use schema_verdict::{combine, AnnotationEntry, ErrorEntry, Location, ValidationResult};
//! use serde_json::json;
//!
//! let properties = Location::parse("/properties", "").unwrap();
//! let name = ValidationResult::valid()
//!     .with_annotation(AnnotationEntry::new(properties.clone(), json!(["name"])));
//! let age = ValidationResult::invalid(vec![ErrorEntry::new(
//!     Location::parse("/properties/age/minimum", "/age").unwrap(),
//!     "must be >= 0",
//! )]);
//!
//! let result = combine::all_of(vec![name, age]);
//! assert!(!result.is_valid());
//! assert_eq!(result.errors().len(), 1);
//! // annotations survive a failing sibling
//! assert_eq!(result.annotations().len(), 1);
//! ```

pub mod applicator;
pub mod combine;
pub mod entry;
pub mod location;
pub mod pointer;
pub mod result;

pub use applicator::{Applicator, Evaluator, EvaluatorRef};
pub use combine::{CombineOptions, Retention};
pub use entry::{AnnotationEntry, Entry, ErrorEntries, ErrorEntry, Severity};
pub use location::Location;
pub use pointer::{JsonPointer, PathSegment, PointerError};
pub use result::ValidationResult;
