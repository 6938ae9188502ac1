//! Integration tests for `not` and `if` / `then` / `else` combination.

use schema_verdict::combine::{self, CombineOptions, Retention};
use schema_verdict::{AnnotationEntry, ErrorEntry, Location, ValidationResult};
use serde_json::json;

fn loc(keyword_location: &str) -> Location {
    Location::parse(keyword_location, "/payment").unwrap()
}

fn passing(keyword_location: &str) -> ValidationResult {
    ValidationResult::valid().with_annotation(AnnotationEntry::new(
        loc(keyword_location),
        json!(keyword_location),
    ))
}

fn failing(keyword_location: &str) -> ValidationResult {
    ValidationResult::invalid(vec![ErrorEntry::new(
        loc(keyword_location),
        format!("{} failed", keyword_location),
    )])
    .with_annotation(AnnotationEntry::new(
        loc(keyword_location),
        json!(keyword_location),
    ))
}

// ====== not ======

#[test]
fn test_not_of_valid_child_fails_with_own_error() {
    let result = combine::not(passing("/not/type"), &loc("/not"));

    assert!(!result.is_valid());
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].code, "not_matched");
    assert_eq!(result.errors()[0].location, loc("/not"));
    assert!(result.annotations().is_empty());
}

#[test]
fn test_not_of_invalid_child_passes_without_entries() {
    let result = combine::not(failing("/not/type"), &loc("/not"));

    assert!(result.is_valid());
    assert!(result.errors().is_empty());
    assert!(result.annotations().is_empty());
}

#[test]
fn test_double_negation_restores_validity_only() {
    let inner = combine::not(failing("/not/not/type"), &loc("/not/not"));
    let outer = combine::not(inner, &loc("/not"));

    assert!(!outer.is_valid());
    assert_eq!(outer.errors()[0].location, loc("/not"));
}

#[test]
fn test_not_tags_annotations_when_retaining_all() {
    let options = CombineOptions::new().with_retention(Retention::TagAll);
    let result = options.not(failing("/not/type"), &loc("/not"));

    assert!(result.is_valid());
    assert_eq!(result.annotations().len(), 1);
    assert_eq!(result.annotations()[0].branch, Some(0));
}

// ====== if / then / else ======

#[test]
fn test_if_holds_then_decides() {
    let result = combine::if_then_else(
        passing("/if"),
        Some(failing("/then")),
        Some(passing("/else")),
    );

    assert!(!result.is_valid());
    let messages: Vec<_> = result.errors().iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["/then failed"]);
    let values: Vec<_> = result.annotations().iter().map(|a| a.value.clone()).collect();
    assert_eq!(values, vec![json!("/if"), json!("/then")]);
}

#[test]
fn test_if_fails_else_decides() {
    let result = combine::if_then_else(
        failing("/if"),
        Some(failing("/then")),
        Some(passing("/else")),
    );

    assert!(result.is_valid());
    // the condition's own error is never reported
    assert!(result.errors().is_empty());
    let values: Vec<_> = result.annotations().iter().map(|a| a.value.clone()).collect();
    assert_eq!(values, vec![json!("/else")]);
}

#[test]
fn test_missing_branch_is_vacuously_valid() {
    let result = combine::if_then_else(passing("/if"), None, Some(failing("/else")));
    assert!(result.is_valid());
    assert_eq!(result.annotations().len(), 1);

    let result = combine::if_then_else(failing("/if"), Some(failing("/then")), None);
    assert!(result.is_valid());
    assert!(result.annotations().is_empty());
}

#[test]
fn test_failed_condition_annotations_tagged_when_retaining_all() {
    let options = CombineOptions::new().with_retention(Retention::TagAll);
    let result = options.if_then_else(failing("/if"), None, Some(passing("/else")));

    let tags: Vec<_> = result.annotations().iter().map(|a| a.branch).collect();
    assert_eq!(tags, vec![Some(0), None]);
}
