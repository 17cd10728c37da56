//! Command implementations for readme-cli

pub mod completions;
pub mod publish;
pub mod sync;

use std::path::PathBuf;

use readme_core::{SyncConfig, SyncEngine};
use readme_fs::NormalizedPath;

use crate::error::Result;

pub use completions::run_completions;
pub use publish::{PublishArgs, run_publish};
pub use sync::{run_check, run_diff, run_sync};

/// Repository root and configuration file selected on the command line.
#[derive(Debug, Clone, Default)]
pub struct Location {
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl Location {
    /// The repository root, falling back to the current directory.
    pub fn resolve_root(&self) -> Result<NormalizedPath> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };
        Ok(NormalizedPath::new(root))
    }

    /// Load the configuration for this location.
    pub fn load_config(&self, root: &NormalizedPath) -> Result<SyncConfig> {
        Ok(SyncConfig::load(root, self.config.as_deref())?)
    }

    /// Build an engine with the configuration left untouched.
    pub fn engine(&self) -> Result<SyncEngine> {
        self.engine_with(|_| {})
    }

    /// Build an engine after letting the caller apply flag overrides.
    pub fn engine_with(&self, overrides: impl FnOnce(&mut SyncConfig)) -> Result<SyncEngine> {
        let root = self.resolve_root()?;
        let mut config = self.load_config(&root)?;
        overrides(&mut config);
        tracing::debug!(root = %root, readme = %config.files.readme, "Resolved repository");
        Ok(SyncEngine::new(root, config)?)
    }
}
