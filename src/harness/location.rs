//! Call-site locations for harness failures.
//!
//! Every failure produced by the assertion and expectation engines names the
//! line that performed the check. The location is always captured where the
//! primitive is invoked: the macros expand `file!()`/`line!()` in place, and
//! [`SourceLocation::caller`] relies on `#[track_caller]` for plain function
//! calls.

use std::fmt;
use std::panic::Location;

/// A file path and line number captured at a check's call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of whoever called the enclosing `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(loc: &'static Location<'static>) -> Self {
        Self::new(loc.file(), loc.line())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Expands to the [`SourceLocation`] of the macro invocation.
#[macro_export]
macro_rules! here {
    () => {
        $crate::harness::SourceLocation::new(file!(), line!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_file_colon_line() {
        let loc = SourceLocation::new("src/suites/ownership.rs", 42);
        assert_eq!(loc.to_string(), "src/suites/ownership.rs:42");
    }

    #[test]
    fn here_captures_the_invocation_line() {
        let expected_line = line!() + 1;
        let loc = crate::here!();
        assert_eq!(loc.file, file!());
        assert_eq!(loc.line, expected_line);
    }

    #[track_caller]
    fn located() -> SourceLocation {
        SourceLocation::caller()
    }

    #[test]
    fn caller_reports_the_outer_call_site() {
        let expected_line = line!() + 1;
        let loc = located();
        assert_eq!(loc.line, expected_line);
        assert!(loc.file.ends_with("location.rs"));
    }
}
