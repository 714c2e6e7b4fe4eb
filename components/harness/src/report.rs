//! Result formatting, grouped by operation
//!
//! The text report shows one block per operation, libraries sorted fastest
//! first, with each library's slowdown relative to the group's winner.

use crate::runner::BenchmarkResult;

/// Group results by operation name, preserving first-seen order.
pub fn group_by_operation(results: &[BenchmarkResult]) -> Vec<(String, Vec<&BenchmarkResult>)> {
    let mut groups: Vec<(String, Vec<&BenchmarkResult>)> = Vec::new();

    for result in results {
        match groups.iter_mut().find(|(name, _)| *name == result.name) {
            Some((_, members)) => members.push(result),
            None => groups.push((result.name.clone(), vec![result])),
        }
    }

    groups
}

/// Format benchmark results as a text report.
pub fn format_results(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();

    for (operation, mut members) in group_by_operation(results) {
        members.sort_by(|a, b| {
            // Failures sink to the bottom of the group.
            b.success
                .cmp(&a.success)
                .then(a.mean_ns.total_cmp(&b.mean_ns))
        });

        let fastest = members
            .iter()
            .find(|r| r.success)
            .map(|r| r.mean_ns)
            .unwrap_or(0.0);

        output.push_str(&format!("{}\n{}\n", operation, "-".repeat(65)));
        for result in &members {
            if result.success {
                let relative = if fastest > 0.0 {
                    result.mean_ns / fastest
                } else {
                    1.0
                };
                output.push_str(&format!(
                    "  {:<12} {:>14.1} ns/iter {:>16.0} ops/s   x{:.2}\n",
                    result.library.as_str(),
                    result.mean_ns,
                    result.ops_per_sec.unwrap_or(0.0),
                    relative,
                ));
            } else {
                output.push_str(&format!(
                    "  {:<12} {:>14} {}\n",
                    result.library.as_str(),
                    "FAILED",
                    result.error.as_deref().unwrap_or("unknown error"),
                ));
            }
        }
        output.push('\n');
    }

    output
}

/// Format benchmark results as JSON
pub fn format_results_json(results: &[BenchmarkResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}
