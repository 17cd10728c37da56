//! Configuration loading
//!
//! Settings come from an optional `readme-sync.toml` at the repository root.
//! Every key has a default, so an absent file or an empty one yields the
//! standard `_README.md` → `README.md` job:
//!
//! ```toml
//! [files]
//! fragment = "_README.md"
//! readme = "README.md"
//!
//! [sentinels]
//! start = "<!-- _README:START -->"
//! end = "<!-- _README:END -->"
//!
//! [git]
//! remote = "origin"
//! base_branch = "main"
//! commit_message = "README update Automation"
//!
//! [pull_request]
//! enabled = true
//! ```
//!
//! Command-line flags are applied on top by the caller.

mod manifest;

pub use manifest::{
    CONFIG_FILE_NAME, FilesSection, GitSection, PullRequestSection, SentinelSection, SyncConfig,
};
