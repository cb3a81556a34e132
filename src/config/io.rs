//! Handles reading the configuration file.

use super::path::get_config_file_path;
use super::structure::Config;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::environment::Environment;
use crate::error::{BonError, Result};

/// Loads the user defaults for this invocation
///
/// A missing file, or no resolvable location, yields the default config.
///
/// # Errors
///
/// Returns an error if:
/// - File reading fails
/// - JSON parsing fails
pub fn load_config(env: &Environment) -> Result<Config> {
    match get_config_file_path(env) {
        Some(config_path) => load_config_from_file(&config_path),
        None => {
            debug!("no configuration path could be determined");
            Ok(Config::default())
        }
    }
}

/// Loads configuration from a specific file
///
/// # Arguments
///
/// * `config_path` - Path to the configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File reading fails
/// - JSON parsing fails
pub fn load_config_from_file<P: AsRef<Path>>(config_path: P) -> Result<Config> {
    let config_path = config_path.as_ref();

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %config_path.display(), "no configuration file");
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(BonError::io(
                format!("Failed to read configuration file at {}", config_path.display()),
                e,
            ))
        }
    };

    // Handle empty file case
    let trimmed_content = config_content.trim();
    if trimmed_content.is_empty() {
        return Ok(Config::default());
    }

    let mut config: Config =
        serde_json::from_str(trimmed_content).map_err(|source| BonError::ConfigParse {
            path: config_path.to_path_buf(),
            source,
        })?;
    config.path = config_path.to_path_buf();

    debug!(path = %config_path.display(), ?config, "loaded configuration");
    Ok(config)
}
