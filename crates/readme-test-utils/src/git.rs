//! Git repository fixtures.
//!
//! Choose the lowest-realism fixture that satisfies your test's needs.

use std::fs;
use std::path::Path;

use git2::{Repository, RepositoryInitOptions, Signature};

/// Name of the branch every fixture repository starts on.
pub const DEFAULT_BRANCH: &str = "main";

/// Initialises a real git repository on `main` with no commits and a local
/// identity configured.
///
/// Realism level: **REAL** — valid git object store, empty history.
///
/// # Panics
/// Panics if initialisation or configuration fails.
pub fn real_git_repo(path: &Path) -> Repository {
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head(DEFAULT_BRANCH);
    let repo = Repository::init_opts(path, &opts).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    });

    {
        let mut config = repo
            .config()
            .unwrap_or_else(|e| panic!("real_git_repo: failed to open config: {e}"));
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
        config.set_bool("commit.gpgsign", false).unwrap();
    }

    repo
}

/// Initialises a real repository on `main` and commits every file currently
/// in `path` as "Initial commit". Writes a `README.md` first if none exists.
///
/// Realism level: **REAL WITH HISTORY**.
///
/// # Panics
/// Panics if any git operation fails.
pub fn real_git_repo_with_commit(path: &Path) -> Repository {
    let repo = real_git_repo(path);
    if !path.join("README.md").exists() {
        fs::write(path.join("README.md"), "# Test\n")
            .unwrap_or_else(|e| panic!("real_git_repo_with_commit: failed to write README.md: {e}"));
    }
    commit_all(&repo, "Initial commit");
    repo
}

/// Stage everything in the working tree and commit it on HEAD.
///
/// # Panics
/// Panics if any git operation fails.
pub fn commit_all(repo: &Repository, message: &str) -> git2::Oid {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = Signature::now("Test User", "test@example.com").unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap_or_else(|e| panic!("commit_all: commit failed: {e}"))
}

/// Creates a bare repository at `remote_path` and registers it as `origin`
/// of `repo`.
///
/// Realism level: **REAL WITH REMOTE** — pushes go to a local bare repo.
///
/// # Panics
/// Panics if the remote cannot be created.
pub fn bare_origin(repo: &Repository, remote_path: &Path) -> Repository {
    let bare = Repository::init_bare(remote_path).unwrap_or_else(|e| {
        panic!(
            "bare_origin: failed to init bare repository at {}: {e}",
            remote_path.display()
        )
    });
    let url = remote_path.to_string_lossy().to_string();
    repo.remote("origin", &url)
        .unwrap_or_else(|e| panic!("bare_origin: failed to add origin: {e}"));
    bare
}

/// Number of commits reachable from HEAD.
pub fn commit_count(repo: &Repository) -> usize {
    let mut walk = repo.revwalk().unwrap();
    if walk.push_head().is_err() {
        return 0;
    }
    walk.count()
}

/// First line of the HEAD commit message.
pub fn head_message(repo: &Repository) -> String {
    let commit = repo.head().unwrap().peel_to_commit().unwrap();
    commit.summary().unwrap_or("").to_string()
}
