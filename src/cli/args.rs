//! Command-line arguments for the `runnables` binary.
//!
//! Uses the `clap` derive API.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ColorMode;

/// Run the registered example suites and report each example.
#[derive(Debug, Parser)]
#[command(
    name = "runnables",
    version,
    about = "Small, assertion-driven examples of language features."
)]
pub struct RunnablesArgs {
    /// Suites to run, in the order given. Defaults to every suite.
    #[arg(value_name = "SUITE")]
    pub suites: Vec<String>,

    /// List suites and their examples without running anything.
    #[arg(long)]
    pub list: bool,

    /// When to color the report.
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// YAML file with default `suites` and `color`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        RunnablesArgs::command().debug_assert();
    }

    #[test]
    fn parses_suites_and_flags() {
        let args = RunnablesArgs::parse_from(["runnables", "library", "--color", "never"]);
        assert_eq!(args.suites, ["library"]);
        assert_eq!(args.color, Some(ColorMode::Never));
        assert!(!args.list);
        assert!(args.config.is_none());
    }
}
