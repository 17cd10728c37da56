//! Shared git2 helper functions: repository discovery, branch lookup, push.

use std::cell::RefCell;

use git2::{Cred, PushOptions, RemoteCallbacks, Repository};
use readme_fs::NormalizedPath;

use crate::{Error, Result};

/// Username GitHub expects alongside an access token over HTTPS.
const TOKEN_USERNAME: &str = "x-access-token";

/// Open the repository whose working tree is rooted at `root`.
pub fn open_repository(root: &NormalizedPath) -> Result<Repository> {
    Repository::open(root.to_native()).map_err(|e| {
        tracing::debug!(root = %root, error = %e, "Failed to open repository");
        Error::NotARepository {
            path: root.to_native(),
        }
    })
}

/// Get the current branch name from a repository.
///
/// Returns the branch name if HEAD points to a branch, or `None` if HEAD is
/// detached. An unborn branch (no commits yet) is reported by name.
pub fn get_current_branch(repo: &Repository) -> Result<Option<String>> {
    match repo.head() {
        Ok(head) if head.is_branch() => Ok(Some(head.shorthand().unwrap_or("HEAD").to_string())),
        Ok(_) => Ok(None),
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
            let head = repo.find_reference("HEAD")?;
            Ok(head
                .symbolic_target()
                .and_then(|target| target.strip_prefix("refs/heads/"))
                .map(str::to_string))
        }
        Err(e) => Err(e.into()),
    }
}

/// Push a branch to a remote repository.
///
/// When `token` is given it is offered as HTTPS credentials on the first
/// authentication challenge only. A ref the remote rejects (for example a
/// non-fast-forward update) is reported as `Error::PushFailed`.
///
/// # Arguments
/// * `repo` - The repository to push from
/// * `remote` - Remote name (defaults to "origin" if None)
/// * `branch` - Local branch to push to the same name on the remote
/// * `token` - Optional access token for HTTPS remotes
pub fn push(repo: &Repository, remote: Option<&str>, branch: &str, token: Option<&str>) -> Result<()> {
    let refspec = format!("refs/heads/{branch}:refs/heads/{branch}");
    push_refspec(repo, remote, &refspec, token)
}

/// Push whatever HEAD points at to `branch` on the remote.
///
/// Works from a detached HEAD, which is how CI usually checks out a pull
/// request head.
pub fn push_head(
    repo: &Repository,
    remote: Option<&str>,
    branch: &str,
    token: Option<&str>,
) -> Result<()> {
    let refspec = format!("HEAD:refs/heads/{branch}");
    push_refspec(repo, remote, &refspec, token)
}

fn push_refspec(
    repo: &Repository,
    remote: Option<&str>,
    refspec: &str,
    token: Option<&str>,
) -> Result<()> {
    let remote_name = remote.unwrap_or("origin");

    let mut remote = repo
        .find_remote(remote_name)
        .map_err(|_| Error::RemoteNotFound {
            name: remote_name.to_string(),
        })?;

    let rejection: RefCell<Option<String>> = RefCell::new(None);

    let mut callbacks = RemoteCallbacks::new();
    if let Some(token) = token {
        let token = token.to_string();
        let mut offered = false;
        callbacks.credentials(move |_url, _username, _allowed| {
            if offered {
                return Err(git2::Error::from_str("access token was rejected"));
            }
            offered = true;
            Cred::userpass_plaintext(TOKEN_USERNAME, &token)
        });
    }
    callbacks.push_update_reference(|refname, status| {
        if let Some(message) = status {
            *rejection.borrow_mut() = Some(format!("{refname}: {message}"));
        }
        Ok(())
    });

    let mut options = PushOptions::new();
    options.remote_callbacks(callbacks);

    tracing::info!(remote = %remote_name, refspec = %refspec, "Pushing");
    remote
        .push(&[refspec], Some(&mut options))
        .map_err(|e| Error::PushFailed {
            message: e.message().to_string(),
        })?;
    drop(options);

    if let Some(message) = rejection.into_inner() {
        return Err(Error::PushFailed { message });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_current_branch_on_main() {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::init(temp_dir.path()).unwrap();

        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "Initial", &tree, &[])
            .unwrap();

        let branch = get_current_branch(&repo).unwrap();
        // Default branch is either "main" or "master" depending on git config
        assert!(branch == Some("main".to_string()) || branch == Some("master".to_string()));
    }

    #[test]
    fn test_get_current_branch_unborn() {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::init(temp_dir.path()).unwrap();
        repo.set_head("refs/heads/docs").unwrap();

        assert_eq!(get_current_branch(&repo).unwrap(), Some("docs".to_string()));
    }

    #[test]
    fn test_open_repository_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = open_repository(&NormalizedPath::new(temp_dir.path()));
        assert!(matches!(result, Err(Error::NotARepository { .. })));
    }
}
