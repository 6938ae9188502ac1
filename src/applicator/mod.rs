//! Applying subschemas to an instance.
//!
//! This module provides the [`Evaluator`] trait that keyword implementations
//! plug into, and [`Applicator`], which runs child evaluators for the
//! in-place applicator keywords (`allOf`, `anyOf`, `oneOf`, `not`, `if`) and
//! merges their results.

mod combinators;
mod traits;

pub use combinators::{Applicator, EvaluatorRef};
pub use traits::Evaluator;
