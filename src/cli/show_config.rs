//! Config command implementation.

use super::{load_config, CliError};
use std::path::Path;

/// Print the effective configuration as TOML.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or rendered.
pub(crate) fn execute(config_path: Option<&Path>) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let text = config
        .to_toml()
        .map_err(|e| CliError::new(format!("TOML serialization failed: {e}")))?;
    print!("{text}");
    Ok(())
}
