//! Datetime operations implemented against every contender library
//!
//! This crate wraps the same small set of datetime operations — reading the
//! clock, parsing, formatting, and arithmetic — in each of the contender
//! libraries, so the harness can time them against each other and the tests
//! can check that they agree. It includes:
//!
//! - Per-operation contender tables (one entry per library that supports it)
//! - A normalized datetime representation for cross-library comparison
//! - Shared input fixtures for the parsing operations
//!
//! # Examples
//!
//! ```rust
//! use contenders::parse;
//!
//! for contender in parse::from_timestamp_contenders(parse::UNIX_TIMESTAMP_SAMPLE) {
//!     let parsed = contender.run().unwrap();
//!     assert_eq!(parsed.unix_seconds, parse::UNIX_TIMESTAMP_SAMPLE);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod contender;
pub mod dump;
pub mod error;
pub mod manipulate;
pub mod normalized;
pub mod parse;

pub use contender::{Contender, Library};
pub use error::{ContenderError, ContenderResult};
pub use normalized::NormalizedDateTime;
