//! CLI command implementations for Depths.

pub(crate) mod run;
pub(crate) mod show_config;

mod output;

use clap::ValueEnum;
use depths::ConfigError;
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable event log.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

/// Load the config file if one was given, otherwise use defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<depths::Config, CliError> {
    match path {
        Some(path) => Ok(depths::Config::load(path)?),
        None => Ok(depths::Config::default()),
    }
}
