//! Pull request creation
//!
//! The publish step proposes the synced branch toward the base branch. The
//! default opener shells out to the GitHub CLI (`gh pr create`), which picks
//! up the CI token from `GH_TOKEN`.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Matches the pull request URL `gh` prints on success.
static PR_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://\S+/pull/\d+").expect("Invalid pull request URL regex")
});

/// What to propose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRequest {
    /// Branch carrying the change
    pub head: String,
    /// Branch to merge into
    pub base: String,
    /// Pull request title
    pub title: String,
    /// Pull request description
    pub body: String,
}

/// Result of an attempt to open a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PullRequestOutcome {
    /// A new pull request was created
    Opened { url: String },
    /// A pull request for this head and base is already open
    AlreadyExists,
    /// The head branch has no commits the base lacks
    NothingToMerge,
    /// The step did not run (disabled, or head is the base branch)
    Skipped { reason: String },
}

/// Opens pull requests on the hosting service.
pub trait PullRequestOpener {
    /// Open a pull request in the repository checked out at `working_dir`.
    ///
    /// Implementations map "already exists" and "nothing to merge" responses
    /// to outcomes; any other failure is an error.
    fn open(&self, working_dir: &Path, request: &PullRequestRequest) -> Result<PullRequestOutcome>;
}

/// Opener backed by the `gh` command-line tool.
#[derive(Debug, Clone)]
pub struct GhCliOpener {
    program: PathBuf,
    token: Option<String>,
}

impl Default for GhCliOpener {
    fn default() -> Self {
        Self::new(None)
    }
}

impl GhCliOpener {
    /// Create an opener running `gh` from `PATH`, passing `token` as
    /// `GH_TOKEN` when given.
    pub fn new(token: Option<String>) -> Self {
        Self {
            program: PathBuf::from("gh"),
            token,
        }
    }

    /// Use a different executable in place of `gh`.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }
}

impl PullRequestOpener for GhCliOpener {
    fn open(&self, working_dir: &Path, request: &PullRequestRequest) -> Result<PullRequestOutcome> {
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(working_dir).args([
            "pr",
            "create",
            "--base",
            &request.base,
            "--head",
            &request.head,
            "--title",
            &request.title,
            "--body",
            &request.body,
        ]);
        if let Some(token) = &self.token {
            cmd.env("GH_TOKEN", token);
        }

        tracing::info!(head = %request.head, base = %request.base, "Opening pull request");
        let output = cmd.output().map_err(Error::Io)?;
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            let url = PR_URL_REGEX
                .find(&stdout)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| stdout.trim().to_string());
            return Ok(PullRequestOutcome::Opened { url });
        }

        classify_failure(output.status.code().unwrap_or(-1), &stderr)
    }
}

/// Map a failed `gh pr create` to a tolerated outcome or an error.
fn classify_failure(code: i32, stderr: &str) -> Result<PullRequestOutcome> {
    let lowered = stderr.to_lowercase();
    if lowered.contains("already exists") {
        tracing::info!("Pull request already exists");
        Ok(PullRequestOutcome::AlreadyExists)
    } else if lowered.contains("no commits between") {
        tracing::info!("Nothing to merge into base branch");
        Ok(PullRequestOutcome::NothingToMerge)
    } else {
        Err(Error::PullRequestFailed {
            code,
            stderr: stderr.trim().to_string(),
        })
    }
}
