//! Run configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults
//! (every suite, `auto` color), an optional YAML file, and command-line flags.
//!
//! ```yaml
//! suites: [ownership, concurrency]
//! color: never
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use termcolor::ColorChoice;

use crate::errors::CliError;
use crate::suites::{self, Suite};

/// When to color the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// Contents of a config file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub suites: Vec<String>,
    pub color: Option<ColorMode>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, CliError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub suites: Vec<&'static Suite>,
    pub color: ColorMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            suites: suites::SUITES.iter().collect(),
            color: ColorMode::default(),
        }
    }
}

impl RunConfig {
    /// Merge the file layer and the command-line layer over the defaults.
    ///
    /// A non-empty suite list on the command line replaces the file's list
    /// entirely; it is not appended.
    pub fn resolve(
        file: Option<ConfigFile>,
        cli_suites: &[String],
        cli_color: Option<ColorMode>,
    ) -> Result<Self, CliError> {
        let file = file.unwrap_or_default();
        let mut config = Self::default();

        let selected: &[String] = if cli_suites.is_empty() {
            &file.suites
        } else {
            cli_suites
        };
        if !selected.is_empty() {
            config.suites = selected
                .iter()
                .map(|name| lookup(name))
                .collect::<Result<_, _>>()?;
        }

        config.color = cli_color.or(file.color).unwrap_or(config.color);
        Ok(config)
    }
}

fn lookup(name: &str) -> Result<&'static Suite, CliError> {
    suites::find(name).ok_or_else(|| CliError::UnknownSuite {
        name: name.to_string(),
        available: suites::names(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(config: &RunConfig) -> Vec<&'static str> {
        config.suites.iter().map(|s| s.name).collect()
    }

    #[test]
    fn defaults_select_every_suite() {
        let config = RunConfig::resolve(None, &[], None).unwrap();
        assert_eq!(names(&config).len(), suites::SUITES.len());
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn file_values_apply() {
        let file = ConfigFile::parse(Path::new("r.yaml"), "suites: [library]\ncolor: never\n").unwrap();
        let config = RunConfig::resolve(Some(file), &[], None).unwrap();
        assert_eq!(names(&config), ["library"]);
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn command_line_overrides_file() {
        let file = ConfigFile {
            suites: vec!["library".to_string()],
            color: Some(ColorMode::Never),
        };
        let cli = vec!["concurrency".to_string(), "ownership".to_string()];
        let config = RunConfig::resolve(Some(file), &cli, Some(ColorMode::Always)).unwrap();
        assert_eq!(names(&config), ["concurrency", "ownership"]);
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn unknown_suite_is_rejected() {
        let err = RunConfig::resolve(None, &["cpp11".to_string()], None).unwrap_err();
        assert!(matches!(err, CliError::UnknownSuite { ref name, .. } if name == "cpp11"));
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ConfigFile::parse(Path::new("e.yaml"), "  \n").unwrap(), ConfigFile::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ConfigFile::parse(Path::new("bad.yaml"), "suits: [library]\n").unwrap_err();
        assert!(matches!(err, CliError::ConfigParse { .. }));
    }

    #[test]
    fn explicit_modes_ignore_the_terminal() {
        assert_eq!(ColorMode::Always.choice(), ColorChoice::Always);
        assert_eq!(ColorMode::Never.choice(), ColorChoice::Never);
    }
}
