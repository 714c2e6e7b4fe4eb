//! End-to-End Harness Tests
//!
//! Runs every suite through the wall-clock runner the way the CLI does,
//! and exercises both report formats.

use harness::{report, suites, BenchmarkResult};

const ITERATIONS: u32 = 25;

fn run_everything() -> Vec<BenchmarkResult> {
    suites::all_suites()
        .expect("fixtures are valid")
        .iter()
        .flat_map(|suite| suite.run(ITERATIONS))
        .collect()
}

/// Test: every benchmark in every suite completes successfully
#[test]
fn test_e2e_all_suites_run_clean() {
    let results = run_everything();
    assert!(!results.is_empty());

    for result in &results {
        assert!(
            result.success,
            "{}/{} failed: {:?}",
            result.name, result.library, result.error
        );
        assert_eq!(result.iterations, ITERATIONS);
        assert!(result.mean_ns > 0.0);
    }
}

/// Test: the suite list matches the advertised names
#[test]
fn test_e2e_suite_names() {
    let suites = suites::all_suites().expect("fixtures are valid");
    let names: Vec<&str> = suites.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, suites::SUITE_NAMES);
}

/// Test: the text report groups results by operation
#[test]
fn test_e2e_text_report_groups_by_operation() {
    let results = run_everything();
    let text = report::format_results(&results);

    // Each operation heads exactly one group.
    for operation in [
        "now_utc",
        "parse_from_timestamp",
        "to_rfc3339_string",
        "shift_forward",
        "next_saturday",
    ] {
        let occurrences = text
            .lines()
            .filter(|line| line.trim() == operation)
            .count();
        assert_eq!(occurrences, 1, "missing group for {operation}:\n{text}");
    }

    // The winner of every group is the x1.00 baseline.
    assert!(text.contains("x1.00"));
}

/// Test: the JSON report round-trips through serde
#[test]
fn test_e2e_json_report_round_trips() {
    let results = run_everything();
    let json = report::format_results_json(&results).expect("serialization failed");

    let back: Vec<BenchmarkResult> = serde_json::from_str(&json).expect("deserialization failed");
    assert_eq!(back.len(), results.len());
    for (a, b) in results.iter().zip(&back) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.library, b.library);
        assert_eq!(a.success, b.success);
    }
}
