//! Locale detection.
//!
//! Resolves the two supported locales from, in priority order: the host OS of
//! a Linux-on-Windows compatibility layer, the `LANG`/`LC_ALL` variables, the
//! OS locale API, and finally English.

pub mod host;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::constants::{COMPAT_LAYER_ENV_VARS, COMPAT_LAYER_RELEASE_MARKER, LOCALE_ENV_VARS};
use crate::environment::Environment;

pub use host::{HostLocaleReader, NoHostLocale, WindowsHostLocaleReader};

/// Language of the rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_locale_tag(s).ok_or_else(|| format!("Unsupported locale: {}. Use one of en|ja.", s))
    }
}

/// Maps a locale tag such as `ja_JP.UTF-8` or `en-US` to a supported locale.
///
/// Matching is a case-insensitive prefix check; anything else yields `None`.
pub fn normalize_locale_tag(tag: &str) -> Option<Locale> {
    let lower = tag.trim().to_lowercase();
    if lower.starts_with("ja") {
        Some(Locale::Ja)
    } else if lower.starts_with("en") {
        Some(Locale::En)
    } else {
        None
    }
}

/// Returns true when running inside a Linux-on-Windows compatibility layer.
///
/// A kernel release containing the vendor marker is sufficient on its own;
/// otherwise the distribution variables are consulted.
pub fn is_compatibility_layer(env: &Environment) -> bool {
    if env.platform != "linux" {
        return false;
    }
    if env
        .os_release
        .to_lowercase()
        .contains(COMPAT_LAYER_RELEASE_MARKER)
    {
        return true;
    }
    COMPAT_LAYER_ENV_VARS.iter().any(|key| env.var(key).is_some())
}

/// Determines the locale for this invocation. Never fails.
pub fn detect_locale(env: &Environment, host: &dyn HostLocaleReader) -> Locale {
    if is_compatibility_layer(env) {
        let from_host = host.query_host_locale();
        debug!(host_locale = ?from_host, "queried host locale");
        if let Some(locale) = from_host.as_deref().and_then(normalize_locale_tag) {
            return locale;
        }
    }

    for key in LOCALE_ENV_VARS {
        if let Some(locale) = env.var(key).and_then(normalize_locale_tag) {
            debug!(variable = key, %locale, "locale from environment");
            return locale;
        }
    }

    if let Some(locale) = env.os_locale.as_deref().and_then(normalize_locale_tag) {
        debug!(%locale, "locale from OS");
        return locale;
    }

    Locale::En
}
