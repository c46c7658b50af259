//! Failure signals raised by examples.
//!
//! [`FailureRecord`] is the structured failure the assertion and expectation
//! engines produce. [`ExampleError`] is what an example returns: either a
//! harness failure, which the runner reports and recovers from, or any other
//! error, which the runner lets through so the whole run stops.

use miette::Diagnostic;
use thiserror::Error;

use super::SourceLocation;

/// The two kinds of violation the harness knows how to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A checked condition evaluated to `false`.
    ConditionFailed,
    /// An operation expected to fail completed successfully.
    ExpectedFailureNotRaised,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::ConditionFailed => "ConditionFailed",
            FailureKind::ExpectedFailureNotRaised => "ExpectedFailureNotRaised",
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            FailureKind::ConditionFailed => "assertion failed",
            FailureKind::ExpectedFailureNotRaised => "no exception thrown as expected",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected violation. Immutable once built.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
#[diagnostic(code(runnables::harness::failure))]
pub struct FailureRecord {
    location: SourceLocation,
    kind: FailureKind,
    message: String,
}

impl FailureRecord {
    pub fn new(kind: FailureKind, location: SourceLocation) -> Self {
        let message = format!("{} @ {}", kind.describe(), location);
        Self {
            location,
            kind,
            message,
        }
    }

    pub fn condition_failed(location: SourceLocation) -> Self {
        Self::new(FailureKind::ConditionFailed, location)
    }

    pub fn expected_failure_not_raised(location: SourceLocation) -> Self {
        Self::new(FailureKind::ExpectedFailureNotRaised, location)
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Everything an example can raise.
///
/// Only [`ExampleError::Failure`] is recovered by the runner.
#[derive(Error, Diagnostic, Debug)]
pub enum ExampleError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Failure(#[from] FailureRecord),

    #[error("I/O error: {0}")]
    #[diagnostic(code(runnables::example::io))]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    #[diagnostic(
        code(runnables::example::other),
        help("errors other than harness failures abort the run; fix the example")
    )]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl ExampleError {
    /// Wrap an arbitrary error raised by example code.
    pub fn other<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        ExampleError::Other(err.into())
    }

    /// The harness failure carried by this error, if it is one.
    pub fn as_failure(&self) -> Option<&FailureRecord> {
        match self {
            ExampleError::Failure(record) => Some(record),
            _ => None,
        }
    }
}
