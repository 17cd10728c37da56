//! Git operations for readme-sync
//!
//! Thin wrappers over `git2` covering what the sync job needs: locating the
//! repository, detecting changes, committing everything, and pushing with a
//! CI-provided token.

pub mod commit;
pub mod error;
pub mod helpers;
pub mod status;

pub use commit::{Identity, signature_for, stage_all_and_commit};
pub use error::{Error, Result};
pub use helpers::{get_current_branch, open_repository, push, push_head};
pub use status::{file_differs_from_head, has_changes};
