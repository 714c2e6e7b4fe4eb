//! Error types for contender operations

use crate::contender::Library;
use thiserror::Error;

/// Errors a contender operation can report.
///
/// These are recorded per-benchmark by the harness rather than aborting a
/// run; a library that rejects an input it should accept shows up as a
/// failed benchmark in the report.
#[derive(Debug, Clone, Error)]
pub enum ContenderError {
    /// The library rejected an input string
    #[error("{library} failed to parse {input:?}: {message}")]
    Parse {
        /// Library that produced the error
        library: Library,
        /// The rejected input
        input: String,
        /// Library-reported reason
        message: String,
    },

    /// The library failed to render a value
    #[error("{library} failed to format: {message}")]
    Format {
        /// Library that produced the error
        library: Library,
        /// Library-reported reason
        message: String,
    },

    /// A value fell outside the library's representable range
    #[error("{library} value out of range: {message}")]
    OutOfRange {
        /// Library that produced the error
        library: Library,
        /// Library-reported reason
        message: String,
    },
}

impl ContenderError {
    /// Build a parse error from a library's own error value.
    pub fn parse(library: Library, input: &str, err: impl ToString) -> Self {
        ContenderError::Parse {
            library,
            input: input.to_string(),
            message: err.to_string(),
        }
    }

    /// Build a format error from a library's own error value.
    pub fn format(library: Library, err: impl ToString) -> Self {
        ContenderError::Format {
            library,
            message: err.to_string(),
        }
    }

    /// Build an out-of-range error from a library's own error value.
    pub fn out_of_range(library: Library, err: impl ToString) -> Self {
        ContenderError::OutOfRange {
            library,
            message: err.to_string(),
        }
    }
}

/// Result type for contender operations
pub type ContenderResult<T> = Result<T, ContenderError>;
