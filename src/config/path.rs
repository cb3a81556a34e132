//! Handles the logic for determining the configuration file path.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_PATH_ENV;
use crate::environment::Environment;

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Returns the path to the configuration file
///
/// Resolution order:
/// - `$BON_CONFIG`, resolved against the working directory
/// - The platform-specific application configuration directory:
///   - Linux: `$XDG_CONFIG_HOME/bon/config.json` or `$HOME/.config/bon/config.json`
///   - macOS: `$HOME/Library/Application Support/bon/config.json`
///   - Windows: `%APPDATA%/bon/config.json`
/// - `$HOME/.config/bon/config.json`
///
/// Returns `None` when no candidate can be determined.
pub fn get_config_file_path(env: &Environment) -> Option<PathBuf> {
    if let Some(explicit) = env.var(CONFIG_PATH_ENV) {
        return Some(env.resolve_path(explicit));
    }

    if let Some(project_dirs) = ProjectDirs::from("", "", "bon") {
        return Some(project_dirs.config_dir().join(CONFIG_FILE_NAME));
    }

    env.var("HOME").map(|home| {
        Path::new(home)
            .join(".config")
            .join("bon")
            .join(CONFIG_FILE_NAME)
    })
}
