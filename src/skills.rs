//! Bundled skill assets.
//!
//! The skill tree ships next to the binary and is copied verbatim into the
//! editor-specific directory of the target project. Its contents are opaque
//! to this crate.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::{SKILLS_DIR_ENV, SKILLS_DIR_NAME};
use crate::environment::Environment;
use crate::error::Result;
use crate::materialize::{copy_tree, CopyStats};
use crate::options::Options;

/// Result of installing skills into a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillInstall {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub stats: CopyStats,
}

/// Candidate source directories, highest priority first.
///
/// 1. `configured` (the `skills_dir` config value)
/// 2. `$BON_SKILLS_DIR`
/// 3. `<exe dir>/skills`
/// 4. `<exe dir>/../share/bon/skills`
/// 5. `<crate dir>/skills`, debug builds only
pub fn skill_source_candidates(env: &Environment, configured: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(dir) = configured {
        candidates.push(env.resolve_path(dir));
    }
    if let Some(dir) = env.var(SKILLS_DIR_ENV) {
        candidates.push(env.resolve_path(dir));
    }
    if let Some(exe_dir) = env.executable.as_deref().and_then(Path::parent) {
        candidates.push(exe_dir.join(SKILLS_DIR_NAME));
        candidates.push(exe_dir.join("..").join("share").join("bon").join(SKILLS_DIR_NAME));
    }
    #[cfg(debug_assertions)]
    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(SKILLS_DIR_NAME));

    candidates
}

/// Returns the first candidate that is an existing directory
pub fn find_skill_source(env: &Environment, configured: Option<&Path>) -> Option<PathBuf> {
    let found = skill_source_candidates(env, configured)
        .into_iter()
        .find(|candidate| candidate.is_dir());
    debug!(source = ?found, "skill source");
    found
}

/// Copies the skill tree into the editor's skills directory under the target.
///
/// Returns `None` when there is no source tree.
///
/// # Errors
///
/// Returns an error if copying fails
pub fn install_skills(source: Option<&Path>, options: &Options) -> Result<Option<SkillInstall>> {
    let Some(source) = source else {
        return Ok(None);
    };

    let destination = options.target_dir.join(options.editor.skills_dir());
    let stats = copy_tree(source, &destination, options.force)?;

    Ok(Some(SkillInstall {
        source: source.to_path_buf(),
        destination,
        stats,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Editor, Language};
    use std::fs;
    use tempfile::tempdir;

    fn options_for(target: &Path, editor: Editor, force: bool) -> Options {
        Options {
            target_dir: target.to_path_buf(),
            force,
            language: Language::Python,
            editor,
        }
    }

    #[test]
    fn test_candidates_priority() {
        let mut env = Environment {
            current_dir: PathBuf::from("/work"),
            executable: Some(PathBuf::from("/opt/bon/bin/bon")),
            ..Environment::default()
        };
        env.vars
            .insert(SKILLS_DIR_ENV.to_string(), "/env/skills".to_string());

        let candidates = skill_source_candidates(&env, Some(Path::new("custom")));
        assert_eq!(candidates[0], PathBuf::from("/work/custom"));
        assert_eq!(candidates[1], PathBuf::from("/env/skills"));
        assert_eq!(candidates[2], PathBuf::from("/opt/bon/bin/skills"));
        assert_eq!(
            candidates[3],
            PathBuf::from("/opt/bon/bin/../share/bon/skills")
        );
        if cfg!(debug_assertions) {
            assert_eq!(candidates.len(), 5);
            assert!(candidates[4].ends_with("skills"));
        } else {
            assert_eq!(candidates.len(), 4);
        }
    }

    #[test]
    fn test_release_candidates_stay_off_the_build_machine() {
        let env = Environment::default();
        let candidates = skill_source_candidates(&env, None);
        let build_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("skills");
        assert_eq!(candidates.contains(&build_dir), cfg!(debug_assertions));
    }

    #[test]
    fn test_find_skill_source_prefers_existing_override() {
        let dir = tempdir().unwrap();
        let skills = dir.path().join("my-skills");
        fs::create_dir_all(&skills).unwrap();

        let env = Environment::default();
        assert_eq!(find_skill_source(&env, Some(skills.as_path())), Some(skills.clone()));

        let missing = dir.path().join("missing");
        assert_ne!(find_skill_source(&env, Some(missing.as_path())), Some(missing.clone()));
    }

    #[test]
    fn test_install_skills_without_source() {
        let dir = tempdir().unwrap();
        let options = options_for(dir.path(), Editor::Codex, false);

        assert_eq!(install_skills(None, &options).unwrap(), None);
        assert!(!dir.path().join(".codex").exists());
    }

    #[test]
    fn test_install_skills_into_editor_dir() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("bundle");
        fs::create_dir_all(source.join("docs-first")).unwrap();
        fs::write(source.join("docs-first/SKILL.md"), "# Docs first").unwrap();

        let target = dir.path().join("project");
        let options = options_for(&target, Editor::ClaudeCode, false);

        let install = install_skills(Some(source.as_path()), &options).unwrap().unwrap();
        assert_eq!(install.destination, target.join(".claude/skills"));
        assert_eq!(install.stats, CopyStats { copied: 1, skipped: 0 });
        assert!(target.join(".claude/skills/docs-first/SKILL.md").exists());

        let again = install_skills(Some(source.as_path()), &options).unwrap().unwrap();
        assert_eq!(again.stats, CopyStats { copied: 0, skipped: 1 });
    }
}
