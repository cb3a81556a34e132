//! A Rust library for scaffolding AI agent instruction files.
//!
//! Given a target language, editor, and locale, this library renders an
//! editor-specific instructions file (`AGENTS.md`, `.cursorrules`, or
//! `copilot-instructions.md`), a `docs/` skeleton, and installs bundled skill
//! assets into the editor's skills directory.

pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod locale;
pub mod materialize;
pub mod options;
pub mod skills;
pub mod templates;

use std::path::{Path, PathBuf};

pub use config::{load_config, Config};
pub use environment::Environment;
pub use error::{BonError, Result};
pub use locale::{detect_locale, HostLocaleReader, Locale, WindowsHostLocaleReader};
pub use materialize::{copy_tree, ensure_directory, ensure_if_missing, write_guarded, CopyStats, WriteOutcome};
pub use options::{Editor, Language, OptionOverrides, Options};
pub use skills::{find_skill_source, install_skills, SkillInstall};
pub use templates::{render, FileArtifact, RenderContext, RenderedProject};

/// Outcome of one scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub instructions_path: PathBuf,
    pub instructions_outcome: WriteOutcome,
    /// Doc stubs created by this run; existing ones are not listed
    pub docs_created: Vec<PathBuf>,
    pub skills: Option<SkillInstall>,
}

/// Picks the locale: a configured value wins, otherwise it is detected.
///
/// # Errors
///
/// Returns an error if the configured locale is neither `en` nor `ja`
pub fn resolve_locale(config: &Config, env: &Environment, host: &dyn HostLocaleReader) -> Result<Locale> {
    match config.locale()? {
        Some(locale) => Ok(locale),
        None => Ok(detect_locale(env, host)),
    }
}

/// Writes the instructions file, the doc stubs, and the skill assets.
///
/// The instructions file is guarded by `options.force`; doc stubs are only
/// created when absent; skill files are skipped when present unless forced.
///
/// # Errors
///
/// Returns an error if:
/// - The target directory cannot be created
/// - The instructions file exists and `force` is false
/// - Any write or copy fails
pub fn scaffold(options: &Options, locale: Locale, skill_source: Option<&Path>) -> Result<ScaffoldReport> {
    let rendered = render(&RenderContext {
        language: options.language,
        editor: options.editor,
        locale,
    });

    ensure_directory(&options.target_dir)?;

    let instructions_path = options.instructions_path();
    let instructions_outcome =
        write_guarded(&instructions_path, &rendered.instructions.content, options.force)?;

    let mut docs_created = Vec::new();
    for doc in &rendered.docs {
        let path = options.target_dir.join(&doc.relative_path);
        if ensure_if_missing(&path, &doc.content)? {
            docs_created.push(path);
        }
    }

    let skills = install_skills(skill_source, options)?;

    Ok(ScaffoldReport {
        instructions_path,
        instructions_outcome,
        docs_created,
        skills,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::NoHostLocale;
    use std::fs;
    use tempfile::tempdir;

    fn options_for(target: &Path, editor: Editor, force: bool) -> Options {
        Options {
            target_dir: target.to_path_buf(),
            force,
            language: Language::Rust,
            editor,
        }
    }

    #[test]
    fn test_scaffold_fresh_directory() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("project");

        let report = scaffold(&options_for(&target, Editor::Codex, false), Locale::En, None).unwrap();

        assert_eq!(report.instructions_path, target.join("AGENTS.md"));
        assert_eq!(report.instructions_outcome, WriteOutcome::Created);
        assert_eq!(report.docs_created.len(), 5);
        assert!(report.skills.is_none());
        for name in ["OVERVIEW.md", "concept.md", "spec.md", "architecture.md", "plan.md"] {
            assert!(target.join("docs").join(name).exists(), "missing docs/{}", name);
        }
    }

    #[test]
    fn test_scaffold_second_run_requires_force() {
        let dir = tempdir().unwrap();
        let options = options_for(dir.path(), Editor::Cursor, false);

        scaffold(&options, Locale::En, None).unwrap();
        let path = dir.path().join(".cursorrules");
        fs::write(&path, "hand edited").unwrap();

        let err = scaffold(&options, Locale::En, None).unwrap_err();
        assert!(matches!(err, BonError::AlreadyExists { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hand edited");

        let forced = options_for(dir.path(), Editor::Cursor, true);
        let report = scaffold(&forced, Locale::En, None).unwrap();
        assert_eq!(report.instructions_outcome, WriteOutcome::Overwritten);
        assert!(report.docs_created.is_empty());
        assert_ne!(fs::read_to_string(&path).unwrap(), "hand edited");
    }

    #[test]
    fn test_scaffold_keeps_edited_docs_when_forced() {
        let dir = tempdir().unwrap();
        scaffold(&options_for(dir.path(), Editor::Codex, false), Locale::En, None).unwrap();

        let plan = dir.path().join("docs/plan.md");
        fs::write(&plan, "- [x] done").unwrap();

        scaffold(&options_for(dir.path(), Editor::Codex, true), Locale::Ja, None).unwrap();
        assert_eq!(fs::read_to_string(&plan).unwrap(), "- [x] done");
    }

    #[test]
    fn test_scaffold_installs_skills() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("bundle");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("SKILL.md"), "# Skill").unwrap();
        let target = dir.path().join("project");

        let report = scaffold(
            &options_for(&target, Editor::Copilot, false),
            Locale::En,
            Some(source.as_path()),
        )
        .unwrap();

        let skills = report.skills.unwrap();
        assert_eq!(skills.destination, target.join(".github/skills"));
        assert_eq!(skills.stats.copied, 1);
        assert!(target.join("copilot-instructions.md").exists());
    }

    #[test]
    fn test_resolve_locale_prefers_config() {
        let mut env = Environment::default();
        env.vars.insert("LANG".to_string(), "en_US.UTF-8".to_string());

        let config = Config {
            locale: Some("ja".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_locale(&config, &env, &NoHostLocale).unwrap(), Locale::Ja);
        assert_eq!(
            resolve_locale(&Config::default(), &env, &NoHostLocale).unwrap(),
            Locale::En
        );
    }
}
