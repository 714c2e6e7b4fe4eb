//! Integration test crate for the datetime benchmark workspace.
//!
//! The tests live in `tests/`; this library exists only so the package has
//! a build target.
