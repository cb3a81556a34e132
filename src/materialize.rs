//! Filesystem operations for writing the scaffold.
//!
//! Every operation is synchronous and independent. A failure stops the run;
//! files written before it stay in place, and re-running is safe.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{BonError, Result};

/// What [`write_guarded`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
}

/// File counts reported by [`copy_tree`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub copied: usize,
    pub skipped: usize,
}

/// Creates `path` and any missing parents. Idempotent.
///
/// # Errors
///
/// Returns an error if directory creation fails
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| {
        BonError::io(
            format!("Could not create directory {}", path.display()),
            e,
        )
    })
}

/// Writes `content` to `path`, refusing to replace an existing file unless `force`.
///
/// # Errors
///
/// Returns [`BonError::AlreadyExists`] if the file exists and `force` is false,
/// or an I/O error if the write fails
pub fn write_guarded<P: AsRef<Path>>(path: P, content: &str, force: bool) -> Result<WriteOutcome> {
    let path = path.as_ref();
    let exists = path.exists();

    if exists && !force {
        return Err(BonError::AlreadyExists {
            file_name: file_name_of(path),
            path: path.to_path_buf(),
        });
    }

    fs::write(path, content).map_err(|e| {
        BonError::io(format!("Failed to write {}", file_name_of(path)), e)
    })?;

    Ok(if exists {
        WriteOutcome::Overwritten
    } else {
        WriteOutcome::Created
    })
}

/// Writes `content` to `path` only when nothing exists there yet.
///
/// Returns `true` if the file was created. Existing files are never touched.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the write fails
pub fn ensure_if_missing<P: AsRef<Path>>(path: P, content: &str) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        debug!(path = %path.display(), "exists, leaving untouched");
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    fs::write(path, content).map_err(|e| {
        BonError::io(format!("Failed to write {}", path.display()), e)
    })?;
    Ok(true)
}

/// Mirrors every file under `source_dir` into `dest_dir`.
///
/// Files already present at the destination are skipped unless `force`.
/// Intermediate directories are created as needed. A missing `source_dir` is
/// a no-op. Symlinks are followed; dangling or looping links and entries that
/// are not regular files are left out.
///
/// # Errors
///
/// Returns an error if:
/// - The source tree cannot be read
/// - A destination directory cannot be created
/// - A file copy fails
pub fn copy_tree<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    dest_dir: Q,
    force: bool,
) -> Result<CopyStats> {
    let source_dir = source_dir.as_ref();
    let dest_dir = dest_dir.as_ref();
    let mut stats = CopyStats::default();

    if !source_dir.is_dir() {
        debug!(source = %source_dir.display(), "no source tree to copy");
        return Ok(stats);
    }

    for entry in WalkDir::new(source_dir).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_unfollowable_link(&e) => {
                debug!(path = ?e.path(), "unfollowable link, skipped");
                continue;
            }
            Err(e) => {
                return Err(BonError::io(
                    format!("Failed to read {}", source_dir.display()),
                    io::Error::from(e),
                ))
            }
        };

        let relative = match entry.path().strip_prefix(source_dir) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let target: PathBuf = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            ensure_directory(&target)?;
            continue;
        }
        if !entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "not a regular file, skipped");
            continue;
        }

        if target.exists() && !force {
            debug!(path = %target.display(), "skipped");
            stats.skipped += 1;
            continue;
        }

        if let Some(parent) = target.parent() {
            ensure_directory(parent)?;
        }
        fs::copy(entry.path(), &target).map_err(|e| {
            BonError::io(
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    target.display()
                ),
                e,
            )
        })?;
        debug!(path = %target.display(), "copied");
        stats.copied += 1;
    }

    Ok(stats)
}

fn is_unfollowable_link(err: &walkdir::Error) -> bool {
    if err.loop_ancestor().is_some() {
        return true;
    }
    err.path().is_some_and(|path| {
        fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink()) && !path.exists()
    })
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
