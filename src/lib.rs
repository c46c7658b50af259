//! Runnables: short, self-contained examples of language features, each an
//! assertion-driven test run through a tiny reporting harness.
//!
//! The [`harness`] module is the reusable part; [`suites`] holds the examples
//! and [`cli`] drives them from the `runnables` binary.

pub mod cli;
pub mod config;
pub mod errors;
pub mod harness;
pub mod suites;

pub use crate::errors::CliError;
pub use crate::harness::{ExampleError, FailureKind, FailureRecord, SourceLocation};
