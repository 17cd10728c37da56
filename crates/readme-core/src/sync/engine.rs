//! SyncEngine implementation
//!
//! The SyncEngine mirrors the fragment into the README's managed region.

use readme_blocks::{Sentinels, find_regions, splice};
use readme_fs::{NormalizedPath, compute_content_checksum, io};
use serde::{Deserialize, Serialize};

use crate::config::SyncConfig;
use crate::{Error, Result};

use super::check::CheckReport;
use super::plan::SyncPlan;

/// Report from a sync operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    /// Whether the README content changed (or would change, for a dry run)
    pub changed: bool,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Actions taken during the operation
    pub actions: Vec<String>,
    /// Checksum of the README after the operation
    pub readme_checksum: String,
}

/// Options for sync operations
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, compute the result without writing the README.
    /// Actions will be prefixed with "[dry-run] Would ..."
    pub dry_run: bool,
}

/// Engine for synchronizing the README with its fragment
///
/// Provides three operations:
/// - **plan**: compute the desired README without touching disk
/// - **check**: report whether the README is up to date
/// - **sync**: write the desired README when it differs
pub struct SyncEngine {
    root: NormalizedPath,
    config: SyncConfig,
    sentinels: Sentinels,
}

impl SyncEngine {
    /// Create a new SyncEngine
    ///
    /// # Errors
    ///
    /// Returns an error if the configured sentinels are invalid.
    pub fn new(root: NormalizedPath, config: SyncConfig) -> Result<Self> {
        let sentinels = config.sentinels()?;
        Ok(Self {
            root,
            config,
            sentinels,
        })
    }

    /// Repository root
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Active configuration
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Absolute path of the README
    pub fn readme_path(&self) -> NormalizedPath {
        self.root.join(&self.config.files.readme)
    }

    /// Absolute path of the fragment
    pub fn fragment_path(&self) -> NormalizedPath {
        self.root.join(&self.config.files.fragment)
    }

    /// Read the fragment verbatim.
    ///
    /// # Errors
    ///
    /// Returns `Error::FragmentNotFound` if the fragment does not exist.
    pub fn read_fragment(&self) -> Result<String> {
        let path = self.fragment_path();
        io::read_text(&path).map_err(|e| {
            if e.is_not_found() {
                Error::FragmentNotFound {
                    path: path.to_native(),
                }
            } else {
                Error::Fs(e)
            }
        })
    }

    /// Compute the README content the sync would produce.
    pub fn plan(&self) -> Result<SyncPlan> {
        let fragment = self.read_fragment()?;
        if self.sentinels.occurs_in(&fragment) {
            tracing::warn!(
                fragment = %self.config.files.fragment,
                "Fragment contains a sentinel string; the README will not round-trip"
            );
        }

        let readme_path = self.readme_path();
        let readme_exists = readme_path.is_file();
        let current = io::read_text_or_empty(&readme_path)?;
        let desired = splice(&current, &self.sentinels, &fragment);

        tracing::debug!(
            readme = %readme_path,
            existing_regions = find_regions(&current, &self.sentinels).len(),
            "Planned README sync"
        );

        Ok(SyncPlan {
            readme: self.config.files.readme.clone(),
            fragment: self.config.files.fragment.clone(),
            readme_exists,
            current,
            desired,
        })
    }

    /// Check whether the README already mirrors the fragment.
    pub fn check(&self) -> Result<CheckReport> {
        let plan = self.plan()?;
        let readme = plan.readme.clone();

        if !plan.readme_exists {
            return Ok(CheckReport::missing(readme));
        }
        if plan.is_noop() {
            return Ok(CheckReport::in_sync(readme));
        }

        let regions = find_regions(&plan.current, &self.sentinels);
        let mut messages = Vec::new();
        match regions.len() {
            0 => messages.push(format!("{readme} has no managed region")),
            1 => messages.push(format!(
                "Managed region (lines {}-{}) differs from {}",
                regions[0].start_line, regions[0].end_line, plan.fragment
            )),
            n => messages.push(format!("{readme} has {n} managed regions; expected one")),
        }
        if regions.iter().any(|region| !region.terminated) {
            messages.push("A start sentinel has no matching end sentinel".to_string());
        }
        messages.push(format!("{} line(s) would change", plan.changed_lines()));

        Ok(CheckReport::out_of_date(readme, messages))
    }

    /// Write the spliced README when it differs from the current one.
    pub fn sync(&self, options: &SyncOptions) -> Result<SyncReport> {
        let plan = self.plan()?;

        if plan.is_noop() {
            tracing::info!(readme = %plan.readme, "README already in sync");
            return Ok(SyncReport {
                changed: false,
                dry_run: options.dry_run,
                actions: Vec::new(),
                readme_checksum: compute_content_checksum(&plan.current),
            });
        }

        let verb = if plan.readme_exists { "update" } else { "create" };
        let action = if options.dry_run {
            format!("[dry-run] Would {verb} {} from {}", plan.readme, plan.fragment)
        } else {
            io::write_text(&self.readme_path(), &plan.desired)?;
            tracing::info!(readme = %plan.readme, fragment = %plan.fragment, "README synchronized");
            let past = if plan.readme_exists { "Updated" } else { "Created" };
            format!("{past} {} from {}", plan.readme, plan.fragment)
        };

        Ok(SyncReport {
            changed: true,
            dry_run: options.dry_run,
            actions: vec![action],
            readme_checksum: compute_content_checksum(&plan.desired),
        })
    }
}
