//! Contender libraries and the closures that exercise them
//!
//! A [`Contender`] pairs a [`Library`] with the operation being measured.
//! The closure owns any prepared inputs (pre-built native datetime values,
//! parse fixtures) so that running it measures the operation itself, not
//! the setup.

use crate::error::ContenderResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The datetime libraries under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    /// The `chrono` crate
    Chrono,
    /// The `time` crate
    Time,
    /// The `jiff` crate
    Jiff,
    /// The `speedate` crate (pydantic-core's parser)
    Speedate,
    /// The `humantime` crate
    Humantime,
    /// `std::time` baseline
    #[serde(rename = "std")]
    Stdlib,
}

impl Library {
    /// The name used in benchmark IDs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Library::Chrono => "chrono",
            Library::Time => "time",
            Library::Jiff => "jiff",
            Library::Speedate => "speedate",
            Library::Humantime => "humantime",
            Library::Stdlib => "std",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One library's implementation of a benchmarked operation.
pub struct Contender<T> {
    /// The library this implementation belongs to
    pub library: Library,
    run: Box<dyn Fn() -> ContenderResult<T> + Send + Sync>,
}

impl<T> Contender<T> {
    /// Create a contender from a library and its operation closure.
    pub fn new<F>(library: Library, run: F) -> Self
    where
        F: Fn() -> ContenderResult<T> + Send + Sync + 'static,
    {
        Contender {
            library,
            run: Box::new(run),
        }
    }

    /// Execute the operation once.
    pub fn run(&self) -> ContenderResult<T> {
        (self.run)()
    }
}

impl<T> fmt::Debug for Contender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contender")
            .field("library", &self.library)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_names_are_unique() {
        let libraries = [
            Library::Chrono,
            Library::Time,
            Library::Jiff,
            Library::Speedate,
            Library::Humantime,
            Library::Stdlib,
        ];
        let mut names: Vec<&str> = libraries.iter().map(|l| l.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), libraries.len());
    }

    #[test]
    fn test_library_display() {
        assert_eq!(Library::Chrono.to_string(), "chrono");
        assert_eq!(Library::Stdlib.to_string(), "std");
    }

    #[test]
    fn test_contender_runs_closure() {
        let contender = Contender::new(Library::Stdlib, || Ok(42u8));
        assert_eq!(contender.run().unwrap(), 42);
        assert_eq!(contender.library, Library::Stdlib);
    }
}
