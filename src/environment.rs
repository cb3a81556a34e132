//! One-shot capture of process-wide state.
//!
//! [`Environment::capture`] runs once at startup. Everything downstream takes
//! `&Environment` so tests can hand-build the inputs instead of mutating the
//! real process environment.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Immutable snapshot of the inputs the tool reads from its surroundings
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Environment variables; entries that are not valid UTF-8 are dropped
    pub vars: HashMap<String, String>,
    /// Operating system identifier, as in `std::env::consts::OS`
    pub platform: String,
    /// Kernel release string (`uname -r`); empty where unavailable
    pub os_release: String,
    /// Locale reported by the OS locale API
    pub os_locale: Option<String>,
    /// Working directory of the invocation
    pub current_dir: PathBuf,
    /// Path of the running executable, when it can be determined
    pub executable: Option<PathBuf>,
}

impl Environment {
    /// Captures the real process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined
    pub fn capture() -> io::Result<Self> {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();

        let env = Environment {
            vars,
            platform: std::env::consts::OS.to_string(),
            os_release: kernel_release(),
            os_locale: sys_locale::get_locale(),
            current_dir: std::env::current_dir()?,
            executable: std::env::current_exe().ok(),
        };

        debug!(
            platform = %env.platform,
            os_release = %env.os_release,
            os_locale = ?env.os_locale,
            "captured environment"
        );

        Ok(env)
    }

    /// Returns a variable's value, treating empty values as unset
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Resolves `path` against the captured working directory
    pub fn resolve_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir.join(path)
        }
    }
}

#[cfg(unix)]
fn kernel_release() -> String {
    match nix::sys::utsname::uname() {
        Ok(uts) => uts.release().to_string_lossy().into_owned(),
        Err(e) => {
            debug!("uname failed: {}", e);
            String::new()
        }
    }
}

#[cfg(not(unix))]
fn kernel_release() -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_ignores_empty_values() {
        let mut env = Environment::default();
        env.vars.insert("LANG".to_string(), String::new());
        env.vars.insert("LC_ALL".to_string(), "ja_JP.UTF-8".to_string());

        assert_eq!(env.var("LANG"), None);
        assert_eq!(env.var("LC_ALL"), Some("ja_JP.UTF-8"));
        assert_eq!(env.var("MISSING"), None);
    }

    #[test]
    fn test_resolve_path_relative_and_absolute() {
        let env = Environment {
            current_dir: PathBuf::from("/work"),
            ..Environment::default()
        };

        assert_eq!(env.resolve_path("project"), PathBuf::from("/work/project"));
        assert_eq!(env.resolve_path("/abs/dir"), PathBuf::from("/abs/dir"));
    }

    #[test]
    fn test_capture_reads_platform() {
        let env = Environment::capture().unwrap();
        assert_eq!(env.platform, std::env::consts::OS);
        assert!(env.current_dir.is_absolute());
    }
}
