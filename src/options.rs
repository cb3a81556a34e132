//! Validated invocation options and the editor/language lookup tables.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::Config;
use crate::constants::{AGENTS_FILENAME, COPILOT_INSTRUCTIONS_FILENAME, CURSOR_RULES_FILENAME};
use crate::environment::Environment;
use crate::error::Result;

/// Programming language the guidance section targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Python,
    Js,
    Ts,
    Rust,
}

impl Language {
    pub const ALLOWED: &'static str = "python|js|ts|rust";

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Js => "js",
            Language::Ts => "ts",
            Language::Rust => "rust",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Js => "JavaScript",
            Language::Ts => "TypeScript",
            Language::Rust => "Rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    /// Case-insensitive; `javascript` and `typescript` are accepted as synonyms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" => Ok(Language::Python),
            "js" | "javascript" => Ok(Language::Js),
            "ts" | "typescript" => Ok(Language::Ts),
            "rust" => Ok(Language::Rust),
            _ => Err(format!(
                "Unsupported language: {}. Use one of {}.",
                s,
                Self::ALLOWED
            )),
        }
    }
}

/// AI editor the instructions file is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Editor {
    #[default]
    Codex,
    Cursor,
    ClaudeCode,
    Copilot,
}

impl Editor {
    pub const ALLOWED: &'static str = "codex|cursor|claudecode|copilot";

    pub fn as_str(&self) -> &'static str {
        match self {
            Editor::Codex => "codex",
            Editor::Cursor => "cursor",
            Editor::ClaudeCode => "claudecode",
            Editor::Copilot => "copilot",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Editor::Codex => "Codex",
            Editor::Cursor => "Cursor",
            Editor::ClaudeCode => "Claude Code",
            Editor::Copilot => "GitHub Copilot",
        }
    }

    /// Name of the instructions file, relative to the target directory
    pub fn instructions_file_name(&self) -> &'static str {
        match self {
            Editor::Cursor => CURSOR_RULES_FILENAME,
            Editor::Copilot => COPILOT_INSTRUCTIONS_FILENAME,
            Editor::Codex | Editor::ClaudeCode => AGENTS_FILENAME,
        }
    }

    /// Where bundled skill assets are installed, relative to the target directory
    pub fn skills_dir(&self) -> &'static Path {
        Path::new(match self {
            Editor::Codex => ".codex/skills",
            Editor::Cursor => ".cursor/skills",
            Editor::ClaudeCode => ".claude/skills",
            Editor::Copilot => ".github/skills",
        })
    }
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Editor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "codex" => Ok(Editor::Codex),
            "cursor" => Ok(Editor::Cursor),
            "claudecode" => Ok(Editor::ClaudeCode),
            "copilot" => Ok(Editor::Copilot),
            _ => Err(format!(
                "Unsupported editor: {}. Use one of {}.",
                s,
                Self::ALLOWED
            )),
        }
    }
}

/// Values given on the command line; `None` means "not given"
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub dir: Option<PathBuf>,
    pub force: bool,
    pub language: Option<Language>,
    pub editor: Option<Editor>,
}

/// Options for one invocation, fixed after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub target_dir: PathBuf,
    pub force: bool,
    pub language: Language,
    pub editor: Editor,
}

impl Options {
    /// Combines command-line values with the user defaults file.
    ///
    /// Precedence is flag, then config file, then built-in default. The target
    /// directory is resolved against the captured working directory.
    ///
    /// # Errors
    ///
    /// Returns [`BonError::InvalidConfig`](crate::error::BonError::InvalidConfig) if the config file names a language
    /// or editor outside the allowed set
    pub fn resolve(overrides: OptionOverrides, config: &Config, env: &Environment) -> Result<Self> {
        let language = match overrides.language {
            Some(language) => language,
            None => config.language()?.unwrap_or_default(),
        };
        let editor = match overrides.editor {
            Some(editor) => editor,
            None => config.editor()?.unwrap_or_default(),
        };
        let target_dir = match overrides.dir {
            Some(dir) => env.resolve_path(dir),
            None => env.current_dir.clone(),
        };

        Ok(Options {
            target_dir,
            force: overrides.force,
            language,
            editor,
        })
    }

    /// Full path of the instructions file
    pub fn instructions_path(&self) -> PathBuf {
        self.target_dir.join(self.editor.instructions_file_name())
    }
}

/// Parses a `--lang` value, for use as a clap value parser
pub fn parse_language(value: &str) -> Result<Language, String> {
    value.parse()
}

/// Parses an `--editor` value, for use as a clap value parser
pub fn parse_editor(value: &str) -> Result<Editor, String> {
    value.parse()
}
