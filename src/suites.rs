//! Registered example suites.
//!
//! Suites and the examples inside them run in the fixed order listed here.
//! There is no discovery: adding an example means adding it to a suite's
//! `EXAMPLES` table.

use termcolor::WriteColor;

use crate::harness::{run_registered, Example, ExampleError, ExampleResult};

pub mod concurrency;
pub mod generics;
pub mod library;
pub mod ownership;

/// A titled, ordered group of examples.
#[derive(Debug, Clone, Copy)]
pub struct Suite {
    pub name: &'static str,
    pub title: &'static str,
    pub examples: &'static [Example],
}

impl Suite {
    /// Print the suite header, then run every example in order.
    ///
    /// Stops at the first example that raises a non-harness error.
    pub fn run<W>(&self, out: &mut W) -> Result<Vec<ExampleResult>, ExampleError>
    where
        W: WriteColor + ?Sized,
    {
        writeln!(out, "{} runnable examples:", self.title)?;
        let _span = tracing::info_span!("suite", name = self.name).entered();

        let mut results = Vec::with_capacity(self.examples.len());
        for example in self.examples {
            results.push(run_registered(out, example)?);
        }
        Ok(results)
    }
}

pub const SUITES: &[Suite] = &[
    Suite {
        name: "ownership",
        title: "Ownership & borrowing",
        examples: ownership::EXAMPLES,
    },
    Suite {
        name: "generics",
        title: "Generics, traits & closures",
        examples: generics::EXAMPLES,
    },
    Suite {
        name: "concurrency",
        title: "Concurrency",
        examples: concurrency::EXAMPLES,
    },
    Suite {
        name: "library",
        title: "Standard library",
        examples: library::EXAMPLES,
    },
];

/// Look a suite up by name.
pub fn find(name: &str) -> Option<&'static Suite> {
    SUITES.iter().find(|s| s.name == name)
}

/// Comma-separated suite names, for diagnostics.
pub fn names() -> String {
    SUITES
        .iter()
        .map(|s| s.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn suite_names_are_unique() {
        let names: HashSet<_> = SUITES.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SUITES.len());
    }

    #[test]
    fn example_names_are_unique_within_a_suite() {
        for suite in SUITES {
            let names: HashSet<_> = suite.examples.iter().map(|e| e.name).collect();
            assert_eq!(names.len(), suite.examples.len(), "duplicate in {}", suite.name);
        }
    }

    #[test]
    fn find_by_name() {
        assert_eq!(find("library").map(|s| s.title), Some("Standard library"));
        assert!(find("cpp11").is_none());
        assert_eq!(names(), "ownership, generics, concurrency, library");
    }
}
