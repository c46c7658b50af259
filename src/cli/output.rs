//! Terminal output for the CLI.
//!
//! The report itself is written by the harness; this module only sets up the
//! stream and prints the `--list` view.

use std::io;

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::config::ColorMode;
use crate::suites::Suite;

/// Stdout, colored according to `mode`.
pub fn stdout(mode: ColorMode) -> StandardStream {
    StandardStream::stdout(mode.choice())
}

/// Print every suite with its examples, one per line.
pub fn print_listing<W>(out: &mut W, suites: &[&Suite]) -> io::Result<()>
where
    W: WriteColor + ?Sized,
{
    for suite in suites {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(out, "{}", suite.name)?;
        out.reset()?;
        writeln!(out, " ({})", suite.title)?;
        for example in suite.examples {
            writeln!(out, "  {}", example.name)?;
        }
    }
    out.flush()
}
