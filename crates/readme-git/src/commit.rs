//! Staging and committing.

use git2::{Commit, IndexAddOption, Oid, Repository, Signature};

use crate::Result;

/// Author/committer identity used for automation commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

/// Build a signature from an explicit identity, or from the repository's
/// `user.name` / `user.email` configuration when none is given.
pub fn signature_for(repo: &Repository, identity: Option<&Identity>) -> Result<Signature<'static>> {
    match identity {
        Some(identity) => Ok(Signature::now(&identity.name, &identity.email)?),
        None => Ok(repo.signature()?),
    }
}

/// Stage every change in the working tree and commit it on HEAD.
///
/// Additions, modifications and deletions are staged; ignored files are not.
/// Returns `None` without creating a commit when the staged tree equals the
/// HEAD tree (or is empty on an unborn branch).
pub fn stage_all_and_commit(
    repo: &Repository,
    message: &str,
    signature: &Signature<'_>,
) -> Result<Option<Oid>> {
    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.update_all(["*"].iter(), None)?;
    index.write()?;

    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    let parent = head_commit(repo)?;
    match &parent {
        Some(parent) if parent.tree_id() == tree_id => {
            tracing::info!("Nothing to commit; tree matches HEAD");
            return Ok(None);
        }
        None if tree.is_empty() => {
            tracing::info!("Nothing to commit on unborn branch");
            return Ok(None);
        }
        _ => {}
    }

    let parents: Vec<&Commit<'_>> = parent.iter().collect();
    let oid = repo.commit(Some("HEAD"), signature, signature, message, &tree, &parents)?;

    tracing::info!(commit = %oid, message = %message, "Created commit");
    Ok(Some(oid))
}

fn head_commit(repo: &Repository) -> Result<Option<Commit<'_>>> {
    match repo.head() {
        Ok(head) => Ok(Some(head.peel_to_commit()?)),
        Err(e)
            if e.code() == git2::ErrorCode::UnbornBranch
                || e.code() == git2::ErrorCode::NotFound =>
        {
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
