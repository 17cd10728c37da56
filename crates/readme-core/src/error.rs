//! Error types for readme-core

use std::path::PathBuf;

/// Result type for readme-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in readme-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Explicitly requested configuration file does not exist
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// The fragment file is missing
    #[error("Fragment not found at {path}")]
    FragmentNotFound { path: PathBuf },

    /// `--branch` names a different branch than the one checked out
    #[error("Requested branch '{requested}' but '{checked_out}' is checked out")]
    BranchMismatch {
        requested: String,
        checked_out: String,
    },

    /// `gh pr create` exited with an unrecognized failure
    #[error("Pull request creation failed (exit code {code}): {stderr}")]
    PullRequestFailed { code: i32, stderr: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from readme-fs
    #[error(transparent)]
    Fs(#[from] readme_fs::Error),

    /// Sentinel error from readme-blocks
    #[error(transparent)]
    Blocks(#[from] readme_blocks::Error),

    /// Git error from readme-git
    #[error(transparent)]
    Git(#[from] readme_git::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
