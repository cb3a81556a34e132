//! Defines the `Config` struct and its implementation.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{BonError, Result};
use crate::locale::Locale;
use crate::options::{Editor, Language};

/// User defaults applied when the matching flag is not given
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default `--lang` value
    pub lang: Option<String>,
    /// Default `--editor` value
    pub editor: Option<String>,
    /// Forces `en` or `ja` and skips locale detection
    pub locale: Option<String>,
    /// Source directory for skill assets, ahead of the bundled tree
    pub skills_dir: Option<PathBuf>,
    /// File this configuration was read from
    #[serde(skip)]
    pub path: PathBuf,
}

impl Config {
    /// Returns the configured language, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a supported language
    pub fn language(&self) -> Result<Option<Language>> {
        self.lang
            .as_deref()
            .map(|value| value.parse::<Language>().map_err(|message| self.invalid(message)))
            .transpose()
    }

    /// Returns the configured editor, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a supported editor
    pub fn editor(&self) -> Result<Option<Editor>> {
        self.editor
            .as_deref()
            .map(|value| value.parse::<Editor>().map_err(|message| self.invalid(message)))
            .transpose()
    }

    /// Returns the forced locale, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither `en` nor `ja`
    pub fn locale(&self) -> Result<Option<Locale>> {
        self.locale
            .as_deref()
            .map(|value| value.parse::<Locale>().map_err(|message| self.invalid(message)))
            .transpose()
    }

    fn invalid(&self, message: String) -> BonError {
        BonError::InvalidConfig {
            path: self.path.clone(),
            message,
        }
    }
}
