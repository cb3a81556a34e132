//! Template rendering.
//!
//! Rendering is pure: the same [`RenderContext`] always yields byte-identical
//! artifacts, and nothing here touches the filesystem.

pub mod docs;
pub mod sections;

use std::path::{Path, PathBuf};

use crate::constants::DOCS_DIR;
use crate::locale::Locale;
use crate::options::{Editor, Language};

use self::docs::{doc_stub, DOC_STUBS};
use self::sections::{
    editor_heading, editor_placement, editor_switch_hint, editor_target_label, env_note,
    language_guidance, language_heading, section_text, LEADING_SECTIONS, TRAILING_SECTIONS,
};

/// Inputs that select the template text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderContext {
    pub language: Language,
    pub editor: Editor,
    pub locale: Locale,
}

/// A rendered file, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    /// Path relative to the target directory
    pub relative_path: PathBuf,
    pub content: String,
}

/// Everything a single invocation writes, apart from skill assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProject {
    pub instructions: FileArtifact,
    pub docs: Vec<FileArtifact>,
}

/// Renders the instructions file and all doc stubs
pub fn render(ctx: &RenderContext) -> RenderedProject {
    RenderedProject {
        instructions: FileArtifact {
            relative_path: PathBuf::from(ctx.editor.instructions_file_name()),
            content: render_instructions(ctx),
        },
        docs: render_docs(ctx.locale),
    }
}

/// Renders the instructions file text
pub fn render_instructions(ctx: &RenderContext) -> String {
    let locale = ctx.locale;
    let mut blocks: Vec<String> = LEADING_SECTIONS
        .iter()
        .map(|section| section_text(*section, locale).to_string())
        .collect();

    blocks.push(format!(
        "{} ({})\n{}\n{}",
        language_heading(locale),
        ctx.language.display_name(),
        language_guidance(ctx.language, locale),
        env_note(locale)
    ));

    blocks.push(format!(
        "{}\n{}{}\n{}\n{}",
        editor_heading(locale),
        editor_target_label(locale),
        ctx.editor.display_name(),
        editor_placement(ctx.editor, locale),
        editor_switch_hint(locale)
    ));

    blocks.extend(
        TRAILING_SECTIONS
            .iter()
            .map(|section| section_text(*section, locale).to_string()),
    );

    let mut text = blocks.join("\n\n");
    text.push('\n');
    text
}

/// Renders the `docs/` skeleton
pub fn render_docs(locale: Locale) -> Vec<FileArtifact> {
    DOC_STUBS
        .iter()
        .filter_map(|name| {
            doc_stub(name, locale).map(|content| FileArtifact {
                relative_path: Path::new(DOCS_DIR).join(name),
                content: content.to_string(),
            })
        })
        .collect()
}
