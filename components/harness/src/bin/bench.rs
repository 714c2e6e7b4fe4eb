//! Datetime Benchmark CLI
//!
//! Command-line interface for the wall-clock comparison harness. For the
//! statistically rigorous numbers, run the criterion benchmark instead:
//! `cargo bench -p harness`.

use clap::{Parser, ValueEnum};
use harness::{report, suites, BenchmarkResult, BenchmarkSuite};
use std::process;

/// Which suite(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SuiteChoice {
    /// Current-instant reads
    Clock,
    /// Timestamp, ISO 8601 and RFC 3339 parsing
    Parse,
    /// Datetime to RFC 3339 string
    Dump,
    /// Shifts, durations and weekday queries
    Manipulate,
    /// Everything
    All,
}

#[derive(Debug, Parser)]
#[command(
    name = "datetime-bench",
    about = "Compare Rust datetime libraries on parsing, formatting and arithmetic"
)]
struct Cli {
    /// Benchmark suite to run
    #[arg(value_enum, default_value = "all")]
    suite: SuiteChoice,

    /// Output results as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Timed iterations per benchmark
    #[arg(long, default_value_t = 10_000)]
    iterations: u32,

    /// List the benchmarks that would run, without running them
    #[arg(long)]
    list: bool,
}

fn selected_suites(choice: SuiteChoice) -> Result<Vec<BenchmarkSuite>, contenders::ContenderError> {
    match choice {
        SuiteChoice::Clock => Ok(vec![suites::clock_suite()?]),
        SuiteChoice::Parse => Ok(vec![suites::parse_suite()?]),
        SuiteChoice::Dump => Ok(vec![suites::dump_suite()?]),
        SuiteChoice::Manipulate => Ok(vec![suites::manipulate_suite()?]),
        SuiteChoice::All => suites::all_suites(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let selected = selected_suites(cli.suite)?;

    if cli.list {
        for suite in &selected {
            println!("{}:", suite.name);
            for benchmark in &suite.benchmarks {
                println!("  {}/{}", benchmark.name, benchmark.library);
            }
        }
        return Ok(());
    }

    let mut results: Vec<BenchmarkResult> = Vec::new();
    for suite in &selected {
        if !cli.json {
            println!("=== {} ({} iterations) ===\n", suite.name, cli.iterations);
        }
        results.extend(suite.run(cli.iterations));
        if !cli.json {
            let suite_results = &results[results.len() - suite.benchmarks.len()..];
            print!("{}", report::format_results(suite_results));
        }
    }

    let failed = results.iter().filter(|r| !r.success).count();

    if cli.json {
        println!("{}", report::format_results_json(&results)?);
    } else {
        let total_time: f64 = results.iter().map(|r| r.duration_ms).sum();
        println!("Summary:");
        println!("  Total benchmarks: {}", results.len());
        println!("  Successful: {}", results.len() - failed);
        println!("  Failed: {}", failed);
        println!("  Total time: {:.2} ms", total_time);
    }

    if failed > 0 {
        process::exit(1);
    }

    Ok(())
}
