//! Error types for readme-git

use std::path::PathBuf;

/// Result type for readme-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in readme-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] readme_fs::Error),

    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("HEAD is detached; pass a branch name explicitly")]
    DetachedHead,

    #[error("Remote '{name}' not found")]
    RemoteNotFound { name: String },

    #[error("Push failed: {message}")]
    PushFailed { message: String },
}
