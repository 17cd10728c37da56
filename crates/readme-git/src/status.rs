//! Working-tree change detection.

use std::path::Path;

use git2::{Repository, Status, StatusOptions};

use crate::Result;

/// Whether the working tree or index differs from HEAD.
///
/// Untracked files count as changes; ignored files do not.
pub fn has_changes(repo: &Repository) -> Result<bool> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false);

    let statuses = repo.statuses(Some(&mut opts))?;
    let changed = statuses
        .iter()
        .filter(|entry| entry.status() != Status::CURRENT)
        .count();

    tracing::debug!(changed, "Computed working tree status");
    Ok(changed > 0)
}

/// Whether a single file, relative to the working tree root, differs from
/// its committed version.
///
/// A path that exists neither on disk nor in HEAD does not differ.
pub fn file_differs_from_head(repo: &Repository, relative_path: &str) -> Result<bool> {
    match repo.status_file(Path::new(relative_path)) {
        Ok(status) => Ok(!status.is_empty() && !status.contains(Status::IGNORED)),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
