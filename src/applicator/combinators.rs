//! Applicators: keywords that apply subschemas to the current instance.
//!
//! An [`Applicator`] runs its child evaluators against one instance and
//! merges the child results with the rules in [`combine`](crate::combine):
//! - `AllOf`: all children must hold
//! - `AnyOf`: at least one child must hold
//! - `OneOf`: exactly one child must hold
//! - `Not`: the child must not hold
//! - `IfThenElse`: the condition selects `then` or `else`
//!
//! # Example
//!
//! ```rust
//! use schema_verdict::{Applicator, Evaluator, ErrorEntry, Location, ValidationResult};
//! use serde_json::{json, Value};
//!
//! fn type_is(name: &'static str) -> Box<dyn Evaluator> {
//!     Box::new(move |instance: &Value, location: &Location| {
//!         let matches = match name {
//!             "string" => instance.is_string(),
//!             "integer" => instance.is_i64() || instance.is_u64(),
//!             _ => false,
//!         };
//!         if matches {
//!             ValidationResult::valid()
//!         } else {
//!             let location = location.push_keyword("type");
//!             ValidationResult::invalid(vec![ErrorEntry::new(location, format!("expected {}", name))])
//!         }
//!     })
//! }
//!
//! // string or integer id
//! let id = Applicator::any_of(vec![type_is("string"), type_is("integer")]);
//!
//! let root = Location::default();
//! assert!(id.evaluate(&json!("abc"), &root).is_valid());
//! assert!(id.evaluate(&json!(7), &root).is_valid());
//!
//! let result = id.evaluate(&json!(1.5), &root);
//! assert!(!result.is_valid());
//! assert_eq!(result.errors().len(), 2);
//! assert_eq!(
//!     result.errors()[1].location.keyword_location().to_string(),
//!     "/anyOf/1/type"
//! );
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use serde_json::Value;
use tracing::trace;

use crate::combine::CombineOptions;
use crate::location::Location;
use crate::result::ValidationResult;

use super::traits::Evaluator;

/// Shared handle to a child evaluator.
pub type EvaluatorRef = Arc<dyn Evaluator>;

/// A keyword that applies subschemas to the instance it is evaluated on.
///
/// The `location` handed to [`evaluate`](Evaluator::evaluate) is the location
/// of the schema object that holds the keyword. The applicator appends its
/// own keyword (and the subschema index for array-valued keywords) before
/// handing locations to its children.
#[derive(Clone)]
pub enum Applicator {
    /// All subschemas must hold.
    AllOf(Vec<EvaluatorRef>),

    /// At least one subschema must hold. Every subschema is evaluated so that
    /// the annotations of all matching branches are collected.
    AnyOf(Vec<EvaluatorRef>),

    /// Exactly one subschema must hold.
    OneOf(Vec<EvaluatorRef>),

    /// The subschema must not hold.
    Not(EvaluatorRef),

    /// `condition` decides whether `then` or `otherwise` applies. Either
    /// branch may be absent, in which case it is vacuously valid.
    IfThenElse {
        condition: EvaluatorRef,
        then: Option<EvaluatorRef>,
        otherwise: Option<EvaluatorRef>,
    },
}

impl Applicator {
    /// Creates an `allOf` applicator.
    pub fn all_of(evaluators: Vec<Box<dyn Evaluator>>) -> Self {
        Applicator::AllOf(shared(evaluators))
    }

    /// Creates an `anyOf` applicator.
    pub fn any_of(evaluators: Vec<Box<dyn Evaluator>>) -> Self {
        Applicator::AnyOf(shared(evaluators))
    }

    /// Creates a `oneOf` applicator.
    pub fn one_of(evaluators: Vec<Box<dyn Evaluator>>) -> Self {
        Applicator::OneOf(shared(evaluators))
    }

    /// Creates a `not` applicator.
    pub fn not(evaluator: Box<dyn Evaluator>) -> Self {
        Applicator::Not(Arc::from(evaluator))
    }

    /// Creates an `if` / `then` / `else` applicator.
    pub fn if_then_else(
        condition: Box<dyn Evaluator>,
        then: Option<Box<dyn Evaluator>>,
        otherwise: Option<Box<dyn Evaluator>>,
    ) -> Self {
        Applicator::IfThenElse {
            condition: Arc::from(condition),
            then: then.map(Arc::from),
            otherwise: otherwise.map(Arc::from),
        }
    }

    /// Returns the keyword this applicator implements.
    pub fn keyword(&self) -> &'static str {
        match self {
            Applicator::AllOf(_) => "allOf",
            Applicator::AnyOf(_) => "anyOf",
            Applicator::OneOf(_) => "oneOf",
            Applicator::Not(_) => "not",
            Applicator::IfThenElse { .. } => "if",
        }
    }

    fn apply(
        &self,
        instance: &Value,
        location: &Location,
        options: &CombineOptions,
    ) -> ValidationResult {
        match self {
            Applicator::AllOf(children)
            | Applicator::AnyOf(children)
            | Applicator::OneOf(children) => {
                let own = location.push_keyword(self.keyword());
                let results: Vec<_> = children
                    .iter()
                    .enumerate()
                    .map(|(i, child)| {
                        child.evaluate_with(instance, &own.push_subschema(i), options)
                    })
                    .collect();
                self.merge(results, &own, options)
            }
            Applicator::Not(child) => {
                let own = location.push_keyword("not");
                options.not(child.evaluate_with(instance, &own, options), &own)
            }
            Applicator::IfThenElse {
                condition,
                then,
                otherwise,
            } => {
                let condition_result =
                    condition.evaluate_with(instance, &location.push_keyword("if"), options);
                if condition_result.is_valid() {
                    let branch = then
                        .as_ref()
                        .map(|child| {
                            child.evaluate_with(instance, &location.push_keyword("then"), options)
                        });
                    options.if_then_else(condition_result, branch, None)
                } else {
                    let branch = otherwise
                        .as_ref()
                        .map(|child| {
                            child.evaluate_with(instance, &location.push_keyword("else"), options)
                        });
                    options.if_then_else(condition_result, None, branch)
                }
            }
        }
    }

    /// Like [`Evaluator::evaluate_with`], but evaluates the subschemas of
    /// `allOf` / `anyOf` / `oneOf` in parallel. Nested applicators below
    /// those subschemas evaluate sequentially under the same `options`.
    ///
    /// Results are collected in subschema order and merged once all of them
    /// have completed, so the outcome is identical to sequential evaluation.
    /// `not` and `if` evaluate sequentially.
    pub fn evaluate_par(
        &self,
        instance: &Value,
        location: &Location,
        options: &CombineOptions,
    ) -> ValidationResult {
        match self {
            Applicator::AllOf(children)
            | Applicator::AnyOf(children)
            | Applicator::OneOf(children) => {
                let own = location.push_keyword(self.keyword());
                trace!(
                    keyword = self.keyword(),
                    branches = children.len(),
                    "evaluating subschemas in parallel"
                );
                let results: Vec<_> = children
                    .par_iter()
                    .enumerate()
                    .map(|(i, child)| {
                        child.evaluate_with(instance, &own.push_subschema(i), options)
                    })
                    .collect();
                self.merge(results, &own, options)
            }
            _ => self.apply(instance, location, options),
        }
    }

    fn merge(
        &self,
        results: Vec<ValidationResult>,
        own: &Location,
        options: &CombineOptions,
    ) -> ValidationResult {
        match self {
            Applicator::AnyOf(_) => options.any_of(results, own),
            Applicator::OneOf(_) => options.one_of(results, own),
            _ => options.all_of(results),
        }
    }
}

impl Evaluator for Applicator {
    fn evaluate(&self, instance: &Value, location: &Location) -> ValidationResult {
        self.apply(instance, location, &CombineOptions::default())
    }

    /// Runs the children one after another and merges their results under
    /// `options`, passing `options` down to nested applicators.
    fn evaluate_with(
        &self,
        instance: &Value,
        location: &Location,
        options: &CombineOptions,
    ) -> ValidationResult {
        self.apply(instance, location, options)
    }
}

fn shared(evaluators: Vec<Box<dyn Evaluator>>) -> Vec<EvaluatorRef> {
    evaluators.into_iter().map(Arc::from).collect()
}
