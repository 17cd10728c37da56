//! The full README sync job: sync, commit, push, open a pull request.
//!
//! Steps run in order and the first failure aborts the rest. There is no
//! retry; a push rejected because the remote moved fails the run.

use readme_git::{
    file_differs_from_head, get_current_branch, has_changes, open_repository, push, push_head,
    signature_for, stage_all_and_commit,
};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};
use crate::pull_request::{PullRequestOpener, PullRequestOutcome, PullRequestRequest};
use crate::sync::{SyncEngine, SyncOptions, SyncReport};

/// Options for a publish run, layered over the configuration.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Push the commit to the remote
    pub push: bool,
    /// Attempt to open a pull request
    pub pull_request: bool,
    /// Branch to commit on and push; defaults to the checked-out branch
    pub branch: Option<String>,
    /// Access token for push and pull request creation
    pub token: Option<String>,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            push: true,
            pull_request: true,
            branch: None,
            token: None,
        }
    }
}

/// Report from a publish run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishReport {
    /// Result of the README rewrite
    pub sync: SyncReport,
    /// Branch the job ran on
    pub branch: String,
    /// Commit created, if any
    pub commit: Option<String>,
    /// Whether the branch was pushed
    pub pushed: bool,
    /// Result of the pull request step
    pub pull_request: PullRequestOutcome,
}

/// Runs the sync job end to end.
pub struct Publisher<'a> {
    engine: &'a SyncEngine,
    opener: &'a dyn PullRequestOpener,
}

impl<'a> Publisher<'a> {
    /// Create a publisher over an engine, opening pull requests with `opener`.
    pub fn new(engine: &'a SyncEngine, opener: &'a dyn PullRequestOpener) -> Self {
        Self { engine, opener }
    }

    /// Sync the README, commit if it differs from HEAD, push that commit, and
    /// propose the branch toward the base branch.
    ///
    /// A requested branch must be the checked-out one, unless HEAD is
    /// detached, in which case HEAD is pushed to the requested branch.
    pub fn publish(&self, options: &PublishOptions) -> Result<PublishReport> {
        let config = self.engine.config();
        let root = self.engine.root();

        let repo = open_repository(root)?;
        let checked_out = get_current_branch(&repo)?;
        let branch = resolve_branch(options.branch.as_deref(), checked_out.as_deref())?;

        let sync = self.engine.sync(&SyncOptions::default())?;

        let differs = file_differs_from_head(&repo, &config.files.readme)?;
        tracing::debug!(readme = %config.files.readme, differs, "Compared README with HEAD");

        let commit = if sync.changed || differs {
            let signature = signature_for(&repo, Some(&config.identity()))?;
            stage_all_and_commit(&repo, &config.git.commit_message, &signature)?
        } else {
            if has_changes(&repo)? {
                tracing::info!("README matches HEAD; other working tree changes left uncommitted");
            }
            None
        };

        let pushed = match commit {
            Some(_) if options.push => {
                let remote = Some(config.git.remote.as_str());
                let token = options.token.as_deref();
                if checked_out.is_some() {
                    push(&repo, remote, &branch, token)?;
                } else {
                    push_head(&repo, remote, &branch, token)?;
                }
                true
            }
            Some(_) => {
                tracing::info!("Push disabled; commit left local");
                false
            }
            None => {
                tracing::info!("No commit created; nothing to push");
                false
            }
        };

        let pull_request = self.open_pull_request(options, &branch)?;

        Ok(PublishReport {
            sync,
            branch,
            commit: commit.map(|oid| oid.to_string()),
            pushed,
            pull_request,
        })
    }

    fn open_pull_request(&self, options: &PublishOptions, branch: &str) -> Result<PullRequestOutcome> {
        let config = self.engine.config();

        if !options.pull_request || !config.pull_request.enabled {
            return Ok(PullRequestOutcome::Skipped {
                reason: "pull requests disabled".to_string(),
            });
        }
        if branch == config.git.base_branch {
            return Ok(PullRequestOutcome::Skipped {
                reason: format!("already on base branch '{branch}'"),
            });
        }

        let request = PullRequestRequest {
            head: branch.to_string(),
            base: config.git.base_branch.clone(),
            title: config.pull_request_title().to_string(),
            body: config.pull_request.body.clone(),
        };
        self.opener.open(&self.engine.root().to_native(), &request)
    }
}

/// Pick the branch to publish from the requested and checked-out branches.
fn resolve_branch(requested: Option<&str>, checked_out: Option<&str>) -> Result<String> {
    match (requested, checked_out) {
        (Some(requested), Some(checked_out)) if requested != checked_out => {
            Err(Error::BranchMismatch {
                requested: requested.to_string(),
                checked_out: checked_out.to_string(),
            })
        }
        (Some(requested), _) => Ok(requested.to_string()),
        (None, Some(checked_out)) => Ok(checked_out.to_string()),
        (None, None) => Err(readme_git::Error::DetachedHead.into()),
    }
}
