//! Error taxonomy for a single invocation.
//!
//! Every variant is fatal. The binary prints one diagnostic line,
//! `[bon] <CODE>: <message>`, and exits with [`BonError::exit_code`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T, E = BonError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum BonError {
    /// Unknown flag, missing flag value, or invalid enumerated value
    #[error("{0}")]
    InvalidArgument(String),

    /// The instructions file exists and `--force` was not given
    #[error("{file_name} already exists at {}. Use --force to overwrite.", path.display())]
    AlreadyExists { file_name: String, path: PathBuf },

    /// Directory creation, write, or copy failure
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// The user defaults file holds a value outside the allowed set
    #[error("Invalid configuration file at {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    /// The user defaults file is not valid JSON
    #[error("Failed to parse configuration file at {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl BonError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        BonError::Io {
            context: context.into(),
            source,
        }
    }

    /// Stable short code included in the diagnostic line
    pub fn code(&self) -> &'static str {
        match self {
            BonError::InvalidArgument(_) => "E_ARGS",
            BonError::AlreadyExists { .. } => "E_EXISTS",
            BonError::Io { .. } => "E_IO",
            BonError::InvalidConfig { .. } | BonError::ConfigParse { .. } => "E_CONFIG",
        }
    }

    /// Argument errors follow the usage-error convention of clap
    pub fn exit_code(&self) -> i32 {
        match self {
            BonError::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}
