//! Run command implementation.

use super::output::{format_summary, format_text};
use super::{load_config, CliError, OutputFormat};
use depths::{run_script, RunResult};
use std::path::Path;

/// Execute the run command.
///
/// Command-line values override the config file.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the result cannot be
/// serialized.
pub(crate) fn execute(
    config_path: Option<&Path>,
    turns: Option<u32>,
    iterations: Option<u32>,
    seed: Option<u64>,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let mut config = load_config(config_path)?;

    if let Some(turns) = turns {
        config.simulation.max_turns = turns;
    }
    if let Some(iterations) = iterations {
        config.script.iterations = iterations;
    }
    if let Some(seed) = seed {
        config.simulation.seed = seed;
    }
    config.simulation.validate()?;

    log::debug!("running with {config:?}");

    let result = run_script(config.simulation, config.script.iterations);

    print!("{}", render(&result, format, quiet)?);
    Ok(())
}

/// Render a finished run in the requested format.
///
/// `quiet` keeps only the final stats, for text and JSON alike.
fn render(result: &RunResult, format: OutputFormat, quiet: bool) -> Result<String, CliError> {
    match format {
        OutputFormat::Text if quiet => Ok(format_summary(result)),
        OutputFormat::Text => Ok(format_text(result)),
        OutputFormat::Json => {
            let json = if quiet {
                serde_json::to_string_pretty(&result.stats)
            } else {
                serde_json::to_string_pretty(result)
            }
            .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            Ok(format!("{json}\n"))
        }
    }
}
