//! The seam keyword evaluators plug into.

use serde_json::Value;

use crate::combine::CombineOptions;
use crate::location::Location;
use crate::result::ValidationResult;

/// Something that evaluates a schema construct against a document location.
///
/// Keyword implementations live outside this crate; they implement
/// `Evaluator` (or are plain closures) so that [`Applicator`](super::Applicator)
/// can run them and merge what they return.
///
/// The `Send + Sync` bounds allow evaluators to be shared across threads and
/// evaluated in parallel.
///
/// # Example
///
/// ```rust
/// use schema_verdict::{Evaluator, ErrorEntry, Location, ValidationResult};
/// use serde_json::{json, Value};
///
/// let is_string = |instance: &Value, location: &Location| {
///     let location = location.push_keyword("type");
///     if instance.is_string() {
///         ValidationResult::valid()
///     } else {
///         ValidationResult::invalid(vec![ErrorEntry::new(location, "expected string")])
///     }
/// };
///
/// let root = Location::default();
/// assert!(is_string.evaluate(&json!("hi"), &root).is_valid());
/// assert!(!is_string.evaluate(&json!(1), &root).is_valid());
/// ```
pub trait Evaluator: Send + Sync {
    /// Evaluates `instance`, the value found at `location.instance_location()`.
    ///
    /// `location.keyword_location()` is the schema path of the construct
    /// being evaluated; entries the evaluator produces should extend it.
    fn evaluate(&self, instance: &Value, location: &Location) -> ValidationResult;

    /// Evaluates `instance` with `options` governing every merge below this
    /// point, including merges inside nested applicators.
    ///
    /// Evaluators that never merge child results can rely on the default,
    /// which ignores `options`.
    fn evaluate_with(
        &self,
        instance: &Value,
        location: &Location,
        options: &CombineOptions,
    ) -> ValidationResult {
        let _ = options;
        self.evaluate(instance, location)
    }
}

impl<F> Evaluator for F
where
    F: Fn(&Value, &Location) -> ValidationResult + Send + Sync,
{
    fn evaluate(&self, instance: &Value, location: &Location) -> ValidationResult {
        self(instance, location)
    }
}
