//! Benchmark runner and result types
//!
//! Provides infrastructure for running contender operations repeatedly and
//! collecting per-library results.

use contenders::{Contender, ContenderError, Library};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::Instant;

/// One library's entry in a benchmarked operation.
pub struct Benchmark {
    /// Name of the operation, used to group results
    pub name: String,
    /// The library being measured
    pub library: Library,
    op: Box<dyn Fn() -> Result<(), ContenderError> + Send + Sync>,
}

/// Result of running a benchmark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Name of the operation
    pub name: String,
    /// The library that was measured
    pub library: Library,
    /// Number of iterations that were timed
    pub iterations: u32,
    /// Total wall-clock duration in milliseconds
    pub duration_ms: f64,
    /// Mean duration of a single iteration in nanoseconds
    pub mean_ns: f64,
    /// Iterations per second
    pub ops_per_sec: Option<f64>,
    /// Whether every iteration completed successfully
    pub success: bool,
    /// Error message if an iteration failed
    pub error: Option<String>,
}

impl Benchmark {
    /// Wrap a contender so its result is consumed through `black_box` and
    /// the closure can be timed without the optimizer discarding the work.
    pub fn from_contender<T: 'static>(name: impl Into<String>, contender: Contender<T>) -> Self {
        let library = contender.library;
        Benchmark {
            name: name.into(),
            library,
            op: Box::new(move || {
                contender.run().map(|value| {
                    black_box(value);
                })
            }),
        }
    }

    /// Run this benchmark for the given number of iterations.
    ///
    /// The first failing iteration stops the run; the failure is recorded
    /// in the result rather than propagated, so one library's unsupported
    /// input never aborts a suite.
    pub fn run(&self, iterations: u32) -> BenchmarkResult {
        let iterations = iterations.max(1);
        let start = Instant::now();

        for _ in 0..iterations {
            if let Err(e) = (self.op)() {
                let duration = start.elapsed();
                return BenchmarkResult {
                    name: self.name.clone(),
                    library: self.library,
                    iterations,
                    duration_ms: duration.as_secs_f64() * 1000.0,
                    mean_ns: 0.0,
                    ops_per_sec: None,
                    success: false,
                    error: Some(e.to_string()),
                };
            }
        }

        let duration = start.elapsed();
        let duration_ms = duration.as_secs_f64() * 1000.0;
        let mean_ns = duration.as_nanos() as f64 / iterations as f64;

        BenchmarkResult {
            name: self.name.clone(),
            library: self.library,
            iterations,
            duration_ms,
            mean_ns,
            ops_per_sec: if mean_ns > 0.0 {
                Some(1_000_000_000.0 / mean_ns)
            } else {
                None
            },
            success: true,
            error: None,
        }
    }
}

/// Suite of benchmarks
pub struct BenchmarkSuite {
    /// Name of the suite
    pub name: String,
    /// Benchmarks in this suite
    pub benchmarks: Vec<Benchmark>,
}

impl BenchmarkSuite {
    /// Create an empty suite.
    pub fn new(name: impl Into<String>) -> Self {
        BenchmarkSuite {
            name: name.into(),
            benchmarks: Vec::new(),
        }
    }

    /// Add a benchmark to the suite.
    pub fn add(&mut self, benchmark: Benchmark) {
        self.benchmarks.push(benchmark);
    }

    /// Add one benchmark per contender in a table.
    pub fn add_contenders<T: 'static>(
        &mut self,
        operation: &str,
        contenders: Vec<Contender<T>>,
    ) {
        for contender in contenders {
            self.add(Benchmark::from_contender(operation, contender));
        }
    }

    /// Run every benchmark in order.
    pub fn run(&self, iterations: u32) -> Vec<BenchmarkResult> {
        self.benchmarks.iter().map(|b| b.run(iterations)).collect()
    }
}
