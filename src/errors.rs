//! Driver-level errors.
//!
//! Harness signals live in [`crate::harness::failure`]; these are the errors
//! that stop the `runnables` binary before, or instead of, reporting.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::harness::ExampleError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("could not read config file {}", path.display())]
    #[diagnostic(code(runnables::config::read))]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    #[diagnostic(
        code(runnables::config::parse),
        help("expected YAML with optional `suites: [...]` and `color: auto|always|never`")
    )]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unknown suite '{name}'")]
    #[diagnostic(code(runnables::cli::unknown_suite), help("available suites: {available}"))]
    UnknownSuite { name: String, available: String },

    #[error("example run aborted")]
    #[diagnostic(code(runnables::run::aborted))]
    Aborted(
        #[from]
        #[diagnostic_source]
        ExampleError,
    ),

    #[error("could not write report: {0}")]
    #[diagnostic(code(runnables::io))]
    Io(#[from] std::io::Error),
}
