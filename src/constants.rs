//! Shared constants used across the application.

use std::time::Duration;

/// Prefix for every status and diagnostic line
pub const TOOL_TAG: &str = "[bon]";

/// The filename for the shared agents instruction file (codex, claudecode)
pub const AGENTS_FILENAME: &str = "AGENTS.md";

/// The filename Cursor reads its project rules from
pub const CURSOR_RULES_FILENAME: &str = ".cursorrules";

/// The filename for GitHub Copilot custom instructions
pub const COPILOT_INSTRUCTIONS_FILENAME: &str = "copilot-instructions.md";

/// The directory name for the documentation skeleton
pub const DOCS_DIR: &str = "docs";

/// Documentation stubs, created only when absent
pub const DOC_OVERVIEW: &str = "OVERVIEW.md";
pub const DOC_CONCEPT: &str = "concept.md";
pub const DOC_SPEC: &str = "spec.md";
pub const DOC_ARCHITECTURE: &str = "architecture.md";
pub const DOC_PLAN: &str = "plan.md";

/// Locale variables, primary first
pub const LOCALE_ENV_VARS: [&str; 2] = ["LANG", "LC_ALL"];

/// Variables set inside a Linux-on-Windows distribution
pub const COMPAT_LAYER_ENV_VARS: [&str; 2] = ["WSL_DISTRO_NAME", "WSL_INTEROP"];

/// Kernel release marker of a Linux-on-Windows distribution
pub const COMPAT_LAYER_RELEASE_MARKER: &str = "microsoft";

/// Upper bound for each host locale query
pub const HOST_LOCALE_QUERY_TIMEOUT: Duration = Duration::from_millis(1500);

/// Overrides the location of the user defaults file
pub const CONFIG_PATH_ENV: &str = "BON_CONFIG";

/// Overrides the bundled skill-asset source directory
pub const SKILLS_DIR_ENV: &str = "BON_SKILLS_DIR";

/// Log filter for the tracing subscriber
pub const LOG_ENV: &str = "BON_LOG";

/// Directory name of the bundled skill assets
pub const SKILLS_DIR_NAME: &str = "skills";
