//! The `runnables` command-line driver.
//!
//! Resolves the run configuration, then runs each selected suite in order.
//! Harness failures show up only in the printed report and never change the
//! exit status; any other error raised by an example aborts the run.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::args::RunnablesArgs;
use crate::config::{ConfigFile, RunConfig};
use crate::errors::CliError;

pub mod args;
pub mod output;

/// Environment variable holding the `tracing` filter for stderr logs.
pub const LOG_ENV: &str = "RUNNABLES_LOG";

/// The main entry point for the CLI.
pub fn run() -> miette::Result<()> {
    init_tracing();
    let args = RunnablesArgs::parse();
    execute(&args)?;
    Ok(())
}

/// Install a stderr `fmt` subscriber. Stdout is reserved for the report.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // a subscriber may already be installed when embedded; keep that one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI for already-parsed arguments.
pub fn execute(args: &RunnablesArgs) -> Result<(), CliError> {
    let file = args
        .config
        .as_deref()
        .map(ConfigFile::load)
        .transpose()?;
    let config = RunConfig::resolve(file, &args.suites, args.color)?;
    tracing::debug!(
        suites = config.suites.len(),
        color = ?config.color,
        "resolved run configuration"
    );

    let stdout = output::stdout(config.color);
    let mut out = stdout.lock();

    if args.list {
        output::print_listing(&mut out, &config.suites)?;
        return Ok(());
    }

    for suite in &config.suites {
        let results = suite.run(&mut out)?;
        let failed = results.iter().filter(|r| !r.passed()).count();
        tracing::info!(suite = suite.name, total = results.len(), failed, "suite finished");
    }
    Ok(())
}
