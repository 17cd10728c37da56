//! Core orchestration layer for readme-sync
//!
//! Coordinates the Layer 0 crates into the README sync job:
//!
//! - **Configuration**: `readme-sync.toml` with defaults for every key
//! - **SyncEngine**: plan, check, and apply the fragment splice
//! - **Publisher**: sync, commit, push, and open a pull request
//!
//! # Architecture
//!
//! ```text
//!                    readme-cli
//!                        |
//!                   readme-core
//!                        |
//!        +---------------+---------------+
//!        |               |               |
//!    readme-fs     readme-blocks     readme-git
//! ```

pub mod config;
pub mod error;
pub mod publish;
pub mod pull_request;
pub mod sync;

pub use config::{CONFIG_FILE_NAME, SyncConfig};
pub use error::{Error, Result};
pub use publish::{PublishOptions, PublishReport, Publisher};
pub use pull_request::{GhCliOpener, PullRequestOpener, PullRequestOutcome, PullRequestRequest};
pub use sync::{CheckReport, CheckStatus, SyncEngine, SyncOptions, SyncPlan, SyncReport};
