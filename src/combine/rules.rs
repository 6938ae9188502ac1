//! The merge rules themselves.

use tracing::{debug, trace};

use crate::entry::{AnnotationEntry, ErrorEntry};
use crate::location::Location;
use crate::result::ValidationResult;

use super::options::{CombineOptions, Retention};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disjunction {
    AnyOf,
    OneOf,
}

impl Disjunction {
    fn keyword(self) -> &'static str {
        match self {
            Disjunction::AnyOf => "anyOf",
            Disjunction::OneOf => "oneOf",
        }
    }

    fn none_matched_code(self) -> &'static str {
        match self {
            Disjunction::AnyOf => "any_of_none_matched",
            Disjunction::OneOf => "one_of_none_matched",
        }
    }
}

impl CombineOptions {
    /// Conjunctive merge: every child must hold.
    ///
    /// Validity is the AND of the children; errors and annotations are the
    /// concatenation of the children's, in child order. Annotations of
    /// invalid children are kept. No children means valid with no entries.
    pub fn all_of(&self, children: impl IntoIterator<Item = ValidationResult>) -> ValidationResult {
        let mut valid = true;
        let mut errors = Vec::new();
        let mut annotations = Vec::new();
        let mut count = 0usize;

        for child in children {
            let (child_valid, child_errors, child_annotations) = child.into_parts();
            valid &= child_valid;
            errors.extend(child_errors);
            annotations.extend(child_annotations);
            count += 1;
        }

        trace!(keyword = "allOf", branches = count, valid, "combined results");
        ValidationResult::new(valid, errors, annotations)
    }

    /// Disjunctive merge: at least one child must hold.
    ///
    /// On success only the valid branches contribute: their errors and
    /// annotations are kept in child order and everything from invalid
    /// branches is dropped (or, under [`Retention::TagAll`], their
    /// annotations are kept tagged with the branch index).
    ///
    /// On failure every branch explains the outcome, so all errors and
    /// annotations are kept in child order, led by an `any_of_none_matched`
    /// summary at `location` when [`CombineOptions::summary`] is set or when
    /// there are no branches.
    pub fn any_of(
        &self,
        children: impl IntoIterator<Item = ValidationResult>,
        location: &Location,
    ) -> ValidationResult {
        self.disjunction(Disjunction::AnyOf, children.into_iter().collect(), location)
    }

    /// Exactly-one disjunction.
    ///
    /// Behaves like [`any_of`](Self::any_of) when zero or one branch is
    /// valid. When two or more are valid the result is invalid with a single
    /// synthetic `one_of_multiple_matched` error at `location` naming the
    /// matching branches. No branch errors are copied; the matching branches'
    /// annotations are kept and the others follow the retention policy.
    pub fn one_of(
        &self,
        children: impl IntoIterator<Item = ValidationResult>,
        location: &Location,
    ) -> ValidationResult {
        self.disjunction(Disjunction::OneOf, children.into_iter().collect(), location)
    }

    /// Negation: valid exactly when `child` is invalid.
    ///
    /// The child's errors and annotations never propagate. A valid child
    /// produces a `not_matched` error at `location`.
    pub fn not(&self, child: ValidationResult, location: &Location) -> ValidationResult {
        let (child_valid, _, child_annotations) = child.into_parts();
        let annotations = self.retain_tagged(Vec::new(), 0, child_annotations);

        trace!(keyword = "not", valid = !child_valid, "combined results");
        if child_valid {
            let error = ErrorEntry::new(location.clone(), "value must not match the schema")
                .with_code("not_matched");
            ValidationResult::new(false, vec![error], annotations)
        } else {
            ValidationResult::new(true, Vec::new(), annotations)
        }
    }

    /// Conditional application (`if` / `then` / `else`).
    ///
    /// The condition only selects a branch: its errors never propagate, and
    /// its annotations are kept only when it held. The selected branch, or a
    /// vacuously valid result if it is absent, decides validity and supplies
    /// the remaining entries.
    pub fn if_then_else(
        &self,
        condition: ValidationResult,
        then: Option<ValidationResult>,
        otherwise: Option<ValidationResult>,
    ) -> ValidationResult {
        let (held, _, condition_annotations) = condition.into_parts();

        let mut annotations = if held {
            condition_annotations
        } else {
            self.retain_tagged(Vec::new(), 0, condition_annotations)
        };

        let selected = if held { then } else { otherwise };
        let (valid, errors, branch_annotations) =
            selected.unwrap_or_else(ValidationResult::valid).into_parts();
        annotations.extend(branch_annotations);

        trace!(keyword = "if", condition = held, valid, "combined results");
        ValidationResult::new(valid, errors, annotations)
    }

    fn disjunction(
        &self,
        kind: Disjunction,
        children: Vec<ValidationResult>,
        location: &Location,
    ) -> ValidationResult {
        let matched: Vec<usize> = children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.is_valid())
            .map(|(i, _)| i)
            .collect();

        trace!(
            keyword = kind.keyword(),
            branches = children.len(),
            matched = matched.len(),
            "combining results"
        );

        match (kind, matched.len()) {
            (_, 0) => self.none_matched(kind, children, location),
            (Disjunction::OneOf, n) if n > 1 => self.ambiguous(children, &matched, location),
            _ => self.matched(children),
        }
    }

    fn matched(&self, children: Vec<ValidationResult>) -> ValidationResult {
        let mut errors = Vec::new();
        let mut annotations = Vec::new();

        for (index, child) in children.into_iter().enumerate() {
            let (valid, child_errors, child_annotations) = child.into_parts();
            if valid {
                errors.extend(child_errors);
                annotations.extend(child_annotations);
            } else {
                annotations = self.retain_tagged(annotations, index, child_annotations);
            }
        }

        ValidationResult::new(true, errors, annotations)
    }

    fn none_matched(
        &self,
        kind: Disjunction,
        children: Vec<ValidationResult>,
        location: &Location,
    ) -> ValidationResult {
        let mut errors = Vec::new();
        if self.summary() || children.is_empty() {
            errors.push(
                ErrorEntry::new(
                    location.clone(),
                    format!("value did not match any of {} schemas", children.len()),
                )
                .with_code(kind.none_matched_code()),
            );
        }

        let mut annotations = Vec::new();
        for child in children {
            let (_, child_errors, child_annotations) = child.into_parts();
            errors.extend(child_errors);
            annotations.extend(child_annotations);
        }

        ValidationResult::new(false, errors, annotations)
    }

    fn ambiguous(
        &self,
        children: Vec<ValidationResult>,
        matched: &[usize],
        location: &Location,
    ) -> ValidationResult {
        debug!(
            instance = %location.instance_location(),
            matched = ?matched,
            "oneOf matched more than one branch"
        );

        let error = ErrorEntry::new(
            location.clone(),
            format!(
                "value matched {} schemas (indices {:?}), expected exactly one",
                matched.len(),
                matched
            ),
        )
        .with_code("one_of_multiple_matched")
        .with_expected("exactly one matching schema")
        .with_got(format!("{} matching schemas", matched.len()));

        let mut annotations = Vec::new();
        for (index, child) in children.into_iter().enumerate() {
            let (_, _, child_annotations) = child.into_parts();
            if matched.contains(&index) {
                annotations.extend(child_annotations);
            } else {
                annotations = self.retain_tagged(annotations, index, child_annotations);
            }
        }

        ValidationResult::new(false, vec![error], annotations)
    }

    fn retain_tagged(
        &self,
        mut into: Vec<AnnotationEntry>,
        index: usize,
        annotations: Vec<AnnotationEntry>,
    ) -> Vec<AnnotationEntry> {
        if self.retention() == Retention::TagAll {
            into.extend(annotations.into_iter().map(|a| a.tagged(index)));
        }
        into
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loc(keyword_location: &str) -> Location {
        Location::parse(keyword_location, "").unwrap()
    }

    fn branch(valid: bool, name: &str) -> ValidationResult {
        let location = loc(&format!("/{}", name));
        let result = ValidationResult::new(valid, Vec::new(), Vec::new())
            .with_annotation(AnnotationEntry::new(location.clone(), json!(name)));
        if valid {
            result
        } else {
            result.with_error(ErrorEntry::new(location, format!("{} failed", name)))
        }
    }

    #[test]
    fn test_tag_all_marks_discarded_branches() {
        let options = CombineOptions::new().with_retention(Retention::TagAll);
        let result = options.any_of(
            vec![branch(false, "a"), branch(true, "b"), branch(false, "c")],
            &loc("/anyOf"),
        );

        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        let tags: Vec<_> = result.annotations().iter().map(|a| a.branch).collect();
        assert_eq!(tags, vec![Some(0), None, Some(2)]);
    }

    #[test]
    fn test_summary_leads_failed_disjunction() {
        let options = CombineOptions::new().with_summary(true);
        let result = options.one_of(vec![branch(false, "a"), branch(false, "b")], &loc("/oneOf"));

        let codes: Vec<_> = result.errors().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["one_of_none_matched", "a", "b"]);
        assert!(result.errors()[0].message.contains("any of 2 schemas"));
    }

    #[test]
    fn test_ambiguity_keeps_matching_annotations() {
        let options = CombineOptions::new();
        let result = options.one_of(
            vec![branch(true, "a"), branch(false, "b"), branch(true, "c")],
            &loc("/oneOf"),
        );

        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].message.contains("indices [0, 2]"));
        let values: Vec<_> = result.annotations().iter().map(|a| a.value.clone()).collect();
        assert_eq!(values, vec![json!("a"), json!("c")]);
    }

    #[test]
    fn test_tag_all_ambiguity_tags_only_non_matching() {
        let options = CombineOptions::new().with_retention(Retention::TagAll);
        let result = options.one_of(
            vec![branch(true, "a"), branch(false, "b"), branch(true, "c")],
            &loc("/oneOf"),
        );

        assert!(!result.is_valid());
        assert_eq!(result.errors_with_code("one_of_multiple_matched").len(), 1);
        let tags: Vec<_> = result.annotations().iter().map(|a| a.branch).collect();
        assert_eq!(tags, vec![None, Some(1), None]);
        let values: Vec<_> = result.annotations().iter().map(|a| a.value.clone()).collect();
        assert_eq!(values, vec![json!("a"), json!("b"), json!("c")]);
    }

    #[test]
    fn test_tag_all_leaves_failed_disjunction_untagged() {
        let options = CombineOptions::new().with_retention(Retention::TagAll);
        let result = options.any_of(vec![branch(false, "a"), branch(false, "b")], &loc("/anyOf"));

        assert!(!result.is_valid());
        let tags: Vec<_> = result.annotations().iter().map(|a| a.branch).collect();
        assert_eq!(tags, vec![None, None]);
    }
}
