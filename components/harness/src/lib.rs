//! Benchmark infrastructure for the datetime library comparison
//!
//! This crate provides the wall-clock harness around the contender tables.
//! It includes:
//!
//! - A benchmark runner with timing and per-library results
//! - Suite builders for the clock, parse, dump and manipulate operations
//! - Result formatting, grouped by operation, as text or JSON
//!
//! The statistically rigorous numbers come from the criterion benchmark in
//! `benches/comparison.rs`; this harness is the quick, scriptable view of
//! the same contender tables.
//!
//! # Examples
//!
//! ```rust,no_run
//! use harness::suites;
//!
//! let suite = suites::parse_suite().unwrap();
//! for result in suite.run(1_000) {
//!     println!("{}/{}: {:.0} ns/iter", result.name, result.library, result.mean_ns);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod report;
pub mod runner;
pub mod suites;

pub use runner::{Benchmark, BenchmarkResult, BenchmarkSuite};
