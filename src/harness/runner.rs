//! Example runner.
//!
//! [`run_example`] prints one progress line per example. Harness failures
//! ([`ExampleError::Failure`]) are reported and swallowed so the driver can
//! move on; every other error is handed back to the caller untouched, and a
//! panic simply unwinds through.
//!
//! Output for an uncolored writer is byte-exact:
//!
//! ```text
//!   name... OK
//!   name... FAILED
//!     assertion failed @ src/file.rs:12
//! ```

use termcolor::{Color, ColorSpec, WriteColor};

use super::ExampleError;

/// The zero-argument body of an example.
pub type ExampleFn = fn() -> Result<(), ExampleError>;

/// A named, registered example.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub name: &'static str,
    pub run: ExampleFn,
}

impl Example {
    pub const fn new(name: &'static str, run: ExampleFn) -> Self {
        Self { name, run }
    }
}

/// Outcome status of a single example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Passed,
    Failed,
}

/// What was printed for one example. Not retained by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleResult {
    pub name: String,
    pub status: Status,
    pub message: Option<String>,
}

impl ExampleResult {
    pub fn passed(&self) -> bool {
        self.status == Status::Passed
    }
}

/// Run one example and report it to `out`.
///
/// Returns `Err` only for signals that are not harness failures; the caller
/// is expected to abort the run when that happens.
pub fn run_example<W, F>(out: &mut W, name: &str, operation: F) -> Result<ExampleResult, ExampleError>
where
    W: WriteColor + ?Sized,
    F: FnOnce() -> Result<(), ExampleError>,
{
    write!(out, "  {}... ", name)?;
    out.flush()?;

    tracing::debug!(example = name, "running example");

    match operation() {
        Ok(()) => {
            write_status(out, "OK", Color::Green)?;
            writeln!(out)?;
            Ok(ExampleResult {
                name: name.to_string(),
                status: Status::Passed,
                message: None,
            })
        }
        Err(ExampleError::Failure(record)) => {
            tracing::warn!(
                example = name,
                kind = %record.kind(),
                location = %record.location(),
                "example failed"
            );
            write_status(out, "FAILED", Color::Red)?;
            writeln!(out)?;
            writeln!(out, "    {}", record.message())?;
            Ok(ExampleResult {
                name: name.to_string(),
                status: Status::Failed,
                message: Some(record.message().to_string()),
            })
        }
        Err(fatal) => {
            tracing::error!(example = name, error = %fatal, "example raised a non-harness error");
            Err(fatal)
        }
    }
}

/// Run a registered [`Example`].
pub fn run_registered<W>(out: &mut W, example: &Example) -> Result<ExampleResult, ExampleError>
where
    W: WriteColor + ?Sized,
{
    run_example(out, example.name, example.run)
}

/// Run a function as an example, naming it after the expression.
#[macro_export]
macro_rules! run_example {
    ($out:expr, $func:expr $(,)?) => {
        $crate::harness::run_example($out, stringify!($func), $func)
    };
}

fn write_status<W>(out: &mut W, text: &str, color: Color) -> std::io::Result<()>
where
    W: WriteColor + ?Sized,
{
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{assert_condition, expect_failure, SourceLocation};
    use std::cell::Cell;
    use std::io::{self, Write};
    use std::rc::Rc;
    use termcolor::NoColor;

    /// Uncolored sink that counts `flush` calls.
    struct FlushCounter {
        inner: NoColor<Vec<u8>>,
        flushes: Rc<Cell<usize>>,
    }

    impl Write for FlushCounter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.inner.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes.set(self.flushes.get() + 1);
            self.inner.flush()
        }
    }

    impl WriteColor for FlushCounter {
        fn supports_color(&self) -> bool {
            false
        }

        fn set_color(&mut self, _spec: &ColorSpec) -> io::Result<()> {
            Ok(())
        }

        fn reset(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn printed(buf: NoColor<Vec<u8>>) -> String {
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn passing_example_prints_ok() {
        let mut out = NoColor::new(Vec::new());
        let result = run_example(&mut out, "x", || Ok(())).unwrap();
        assert!(result.passed());
        assert_eq!(result.message, None);
        assert_eq!(printed(out), "  x... OK\n");
    }

    #[test]
    fn assertion_failure_is_reported() {
        let loc = SourceLocation::new("src/a.rs", 10);
        let mut out = NoColor::new(Vec::new());
        let result = run_example(&mut out, "x", || {
            assert_condition(false, loc)?;
            Ok(())
        })
        .unwrap();
        assert_eq!(result.status, Status::Failed);
        assert_eq!(
            result.message.as_deref(),
            Some("assertion failed @ src/a.rs:10")
        );
        assert_eq!(
            printed(out),
            "  x... FAILED\n    assertion failed @ src/a.rs:10\n"
        );
    }

    #[test]
    fn unmet_expectation_is_reported() {
        let loc = SourceLocation::new("src/b.rs", 4);
        let mut out = NoColor::new(Vec::new());
        run_example(&mut out, "x", || {
            expect_failure(|| {}, loc)?;
            Ok(())
        })
        .unwrap();
        assert_eq!(
            printed(out),
            "  x... FAILED\n    no exception thrown as expected @ src/b.rs:4\n"
        );
    }

    #[test]
    fn other_errors_propagate_after_the_progress_prefix() {
        let mut out = NoColor::new(Vec::new());
        let err = run_example(&mut out, "x", || Err(ExampleError::other("broken"))).unwrap_err();
        assert!(err.as_failure().is_none());
        assert_eq!(printed(out), "  x... ");
    }

    #[test]
    fn progress_prefix_is_flushed_before_the_operation_runs() {
        let flushes = Rc::new(Cell::new(0));
        let mut out = FlushCounter {
            inner: NoColor::new(Vec::new()),
            flushes: Rc::clone(&flushes),
        };
        let seen = Cell::new(None);
        run_example(&mut out, "x", || {
            seen.set(Some(flushes.get()));
            Err(ExampleError::other("aborts the run"))
        })
        .unwrap_err();
        assert!(seen.get().is_some_and(|n| n >= 1));
        assert_eq!(printed(out.inner), "  x... ");
    }

    #[test]
    fn colored_output_keeps_the_same_text() {
        let mut out = termcolor::Buffer::ansi();
        run_example(&mut out, "x", || Ok(())).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.starts_with("  x... "));
        assert!(text.contains("OK"));
        assert!(text.contains("\x1b["));
    }

    fn named_example() -> Result<(), ExampleError> {
        Ok(())
    }

    #[test]
    fn macro_uses_the_function_name() {
        let mut out = NoColor::new(Vec::new());
        let result = crate::run_example!(&mut out, named_example).unwrap();
        assert_eq!(result.name, "named_example");
        assert_eq!(printed(out), "  named_example... OK\n");
    }
}
