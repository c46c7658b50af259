//! # Runnables Harness
//!
//! A minimal assertion and reporting framework shared by every example.
//!
//! - [`assertion`]: `check!`, `check_eq!`, `check_ne!` and the functions behind them.
//! - [`expectation`]: `expect_failure!`, satisfied by any `Err` or panic.
//! - [`runner`]: `run_example!`, which prints `  name... OK` or
//!   `  name... FAILED` followed by the failure message.
//!
//! Harness failures are ordinary values ([`FailureRecord`] inside
//! [`ExampleError::Failure`]) that the checks propagate with `?`, so the first
//! violation ends the example. The runner recovers exactly those and nothing
//! else.
//!
//! ```
//! use runnables::harness::ExampleError;
//! use runnables::{check, check_eq, expect_failure};
//!
//! fn parsing() -> Result<(), ExampleError> {
//!     check_eq!("42".parse::<i32>().ok(), Some(42));
//!     expect_failure!(|| "forty-two".parse::<i32>());
//!     check!(i32::MAX.checked_add(1).is_none());
//!     Ok(())
//! }
//!
//! let mut out = termcolor::NoColor::new(Vec::new());
//! runnables::run_example!(&mut out, parsing).unwrap();
//! assert_eq!(out.into_inner(), b"  parsing... OK\n");
//! ```

pub mod assertion;
pub mod expectation;
pub mod failure;
pub mod location;
pub mod runner;

pub use assertion::{assert_condition, assert_equal, assert_not_equal};
pub use expectation::{expect_failure, panic_expected, Completion, ExpectedPanic};
pub use failure::{ExampleError, FailureKind, FailureRecord};
pub use location::SourceLocation;
pub use runner::{run_example, run_registered, Example, ExampleFn, ExampleResult, Status};
