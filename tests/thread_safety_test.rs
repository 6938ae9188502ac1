//! Tests for sharing results and evaluators across threads.

use std::sync::Arc;
use std::thread;

use schema_verdict::combine;
use schema_verdict::{Applicator, ErrorEntry, Evaluator, Location, ValidationResult};
use serde_json::{json, Value};

fn positive() -> Box<dyn Evaluator> {
    Box::new(|instance: &Value, location: &Location| {
        match instance.as_i64() {
            Some(n) if n > 0 => ValidationResult::valid(),
            _ => ValidationResult::invalid(vec![ErrorEntry::new(
                location.push_keyword("exclusiveMinimum"),
                "must be positive",
            )]),
        }
    })
}

#[test]
fn test_results_merged_after_threads_complete() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let location = Location::parse(&format!("/allOf/{}", i), "").unwrap();
                if i % 3 == 0 {
                    ValidationResult::invalid(vec![ErrorEntry::new(location, format!("branch {}", i))])
                } else {
                    ValidationResult::valid()
                }
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let merged = combine::all_of(results);

    assert!(!merged.is_valid());
    let messages: Vec<_> = merged.errors().iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["branch 0", "branch 3", "branch 6"]);
}

#[test]
fn test_shared_result_read_concurrently() {
    let result = Arc::new(ValidationResult::invalid(vec![ErrorEntry::new(
        Location::default(),
        "shared",
    )]));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let result = Arc::clone(&result);
            thread::spawn(move || {
                assert!(!result.is_valid());
                assert_eq!(result.errors()[0].message, "shared");
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_applicator_evaluation() {
    let schema = Arc::new(Applicator::all_of(vec![positive(), positive()]));

    let handles: Vec<_> = (-5..5)
        .map(|n: i64| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let result = schema.evaluate(&json!(n), &Location::default());
                assert_eq!(result.is_valid(), n > 0);
                if n <= 0 {
                    assert_eq!(result.errors().len(), 2);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
