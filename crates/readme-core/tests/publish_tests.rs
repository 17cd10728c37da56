//! Tests for the publish pipeline against a local bare remote.

use std::cell::RefCell;
use std::path::Path;

use git2::Repository;
use pretty_assertions::assert_eq;
use readme_core::{
    Error, PublishOptions, Publisher, PullRequestOpener, PullRequestOutcome, PullRequestRequest,
    Result, SyncConfig, SyncEngine,
};
use readme_fs::NormalizedPath;
use readme_test_utils::git::{commit_count, head_message};
use readme_test_utils::repo::TestRepo;

/// Records every request and answers with a fixed outcome.
struct RecordingOpener {
    calls: RefCell<Vec<PullRequestRequest>>,
    outcome: std::result::Result<PullRequestOutcome, i32>,
}

impl RecordingOpener {
    fn answering(outcome: PullRequestOutcome) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            outcome: Ok(outcome),
        }
    }

    fn failing(code: i32) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            outcome: Err(code),
        }
    }
}

impl PullRequestOpener for RecordingOpener {
    fn open(&self, _working_dir: &Path, request: &PullRequestRequest) -> Result<PullRequestOutcome> {
        self.calls.borrow_mut().push(request.clone());
        match &self.outcome {
            Ok(outcome) => Ok(outcome.clone()),
            Err(code) => Err(Error::PullRequestFailed {
                code: *code,
                stderr: "HTTP 401: Bad credentials".to_string(),
            }),
        }
    }
}

struct Fixture {
    test_repo: TestRepo,
    repo: Repository,
    origin: Repository,
    engine: SyncEngine,
}

fn fixture() -> Fixture {
    let test_repo = TestRepo::new();
    test_repo.write_readme("# deepmr\n<!-- _README:START -->\nold\n<!-- _README:END -->\n");
    test_repo.write_fragment("Hello world\n");
    let repo = test_repo.init_git_with_commit();
    let origin = test_repo.add_bare_origin(&repo);
    let engine =
        SyncEngine::new(NormalizedPath::new(test_repo.root()), SyncConfig::default()).unwrap();
    Fixture {
        test_repo,
        repo,
        origin,
        engine,
    }
}

fn checkout_new_branch(repo: &Repository, name: &str) {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.branch(name, &head, false).unwrap();
    repo.set_head(&format!("refs/heads/{name}")).unwrap();
}

fn opened() -> PullRequestOutcome {
    PullRequestOutcome::Opened {
        url: "https://github.com/owner/repo/pull/1".to_string(),
    }
}

#[test]
fn test_publish_on_base_commits_and_pushes() {
    let fx = fixture();
    let opener = RecordingOpener::answering(opened());

    let report = Publisher::new(&fx.engine, &opener)
        .publish(&PublishOptions::default())
        .unwrap();

    assert!(report.sync.changed);
    assert!(report.commit.is_some());
    assert!(report.pushed);
    assert_eq!(report.branch, "main");
    assert_eq!(commit_count(&fx.repo), 2);
    assert_eq!(head_message(&fx.repo), "README update Automation");
    assert_eq!(
        fx.test_repo.read_readme(),
        "# deepmr\n<!-- _README:START -->\nHello world\n<!-- _README:END -->\n"
    );

    let local_tip = fx.repo.head().unwrap().target().unwrap();
    let remote_tip = fx
        .origin
        .find_reference("refs/heads/main")
        .unwrap()
        .target()
        .unwrap();
    assert_eq!(local_tip, remote_tip);

    assert!(matches!(report.pull_request, PullRequestOutcome::Skipped { .. }));
    assert!(opener.calls.borrow().is_empty());
}

#[test]
fn test_second_publish_creates_no_commit() {
    let fx = fixture();
    let opener = RecordingOpener::answering(opened());
    let publisher = Publisher::new(&fx.engine, &opener);

    publisher.publish(&PublishOptions::default()).unwrap();
    let second = publisher.publish(&PublishOptions::default()).unwrap();

    assert!(!second.sync.changed);
    assert!(second.commit.is_none());
    assert!(!second.pushed);
    assert_eq!(commit_count(&fx.repo), 2);
}

#[test]
fn test_publish_on_feature_branch_opens_pull_request() {
    let fx = fixture();
    checkout_new_branch(&fx.repo, "docs-sync");
    let opener = RecordingOpener::answering(opened());

    let report = Publisher::new(&fx.engine, &opener)
        .publish(&PublishOptions::default())
        .unwrap();

    assert_eq!(report.branch, "docs-sync");
    assert_eq!(report.pull_request, opened());
    let calls = opener.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].head, "docs-sync");
    assert_eq!(calls[0].base, "main");
    assert_eq!(calls[0].title, "README update Automation");
    assert!(fx.origin.find_reference("refs/heads/docs-sync").is_ok());
}

#[test]
fn test_pull_request_attempted_even_without_changes() {
    let fx = fixture();
    checkout_new_branch(&fx.repo, "docs-sync");
    let opener = RecordingOpener::answering(PullRequestOutcome::AlreadyExists);
    let publisher = Publisher::new(&fx.engine, &opener);

    publisher.publish(&PublishOptions::default()).unwrap();
    let second = publisher.publish(&PublishOptions::default()).unwrap();

    assert!(second.commit.is_none());
    assert_eq!(second.pull_request, PullRequestOutcome::AlreadyExists);
    assert_eq!(opener.calls.borrow().len(), 2);
}

#[test]
fn test_no_push_keeps_commit_local() {
    let fx = fixture();
    let opener = RecordingOpener::answering(opened());
    let options = PublishOptions {
        push: false,
        ..PublishOptions::default()
    };

    let report = Publisher::new(&fx.engine, &opener).publish(&options).unwrap();

    assert!(report.commit.is_some());
    assert!(!report.pushed);
    assert!(fx.origin.find_reference("refs/heads/main").is_err());
}

#[test]
fn test_pull_request_disabled() {
    let fx = fixture();
    checkout_new_branch(&fx.repo, "docs-sync");
    let opener = RecordingOpener::answering(opened());
    let options = PublishOptions {
        pull_request: false,
        ..PublishOptions::default()
    };

    let report = Publisher::new(&fx.engine, &opener).publish(&options).unwrap();

    assert!(matches!(report.pull_request, PullRequestOutcome::Skipped { .. }));
    assert!(opener.calls.borrow().is_empty());
}

#[test]
fn test_pull_request_failure_is_fatal() {
    let fx = fixture();
    checkout_new_branch(&fx.repo, "docs-sync");
    let opener = RecordingOpener::failing(1);

    let err = Publisher::new(&fx.engine, &opener)
        .publish(&PublishOptions::default())
        .unwrap_err();

    assert!(matches!(err, Error::PullRequestFailed { code: 1, .. }));
}

#[test]
fn test_push_to_missing_remote_is_fatal() {
    let test_repo = TestRepo::new();
    test_repo.write_readme("# Title\n");
    test_repo.write_fragment("x\n");
    let _repo = test_repo.init_git_with_commit();
    let engine =
        SyncEngine::new(NormalizedPath::new(test_repo.root()), SyncConfig::default()).unwrap();
    let opener = RecordingOpener::answering(opened());

    let err = Publisher::new(&engine, &opener)
        .publish(&PublishOptions::default())
        .unwrap_err();

    assert!(matches!(err, Error::Git(readme_git::Error::RemoteNotFound { .. })));
    assert!(opener.calls.borrow().is_empty());
}

#[test]
fn test_in_sync_readme_ignores_stray_files() {
    let fx = fixture();
    let opener = RecordingOpener::answering(opened());
    let publisher = Publisher::new(&fx.engine, &opener);
    publisher.publish(&PublishOptions::default()).unwrap();
    fx.test_repo.write_file("build.log", "noise");

    let report = publisher.publish(&PublishOptions::default()).unwrap();

    assert!(!report.sync.changed);
    assert!(report.commit.is_none());
    assert!(!report.pushed);
    assert_eq!(commit_count(&fx.repo), 2);
    let tree = fx.repo.head().unwrap().peel_to_tree().unwrap();
    assert!(tree.get_name("build.log").is_none());
}

#[test]
fn test_branch_override_must_match_checkout() {
    let fx = fixture();
    let head = fx.repo.head().unwrap().peel_to_commit().unwrap();
    fx.repo.branch("docs-sync", &head, false).unwrap();
    let readme_before = fx.test_repo.read_readme();
    let opener = RecordingOpener::answering(opened());
    let options = PublishOptions {
        branch: Some("docs-sync".to_string()),
        ..PublishOptions::default()
    };

    let err = Publisher::new(&fx.engine, &opener)
        .publish(&options)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::BranchMismatch { ref requested, ref checked_out }
            if requested == "docs-sync" && checked_out == "main"
    ));
    assert_eq!(commit_count(&fx.repo), 1);
    assert_eq!(fx.test_repo.read_readme(), readme_before);
    assert!(fx.origin.find_reference("refs/heads/docs-sync").is_err());
    assert!(opener.calls.borrow().is_empty());
}

#[test]
fn test_detached_head_pushes_to_named_branch() {
    let fx = fixture();
    let initial = fx.repo.head().unwrap().target().unwrap();
    fx.repo.set_head_detached(initial).unwrap();
    let opener = RecordingOpener::answering(opened());
    let options = PublishOptions {
        branch: Some("docs-sync".to_string()),
        ..PublishOptions::default()
    };

    let report = Publisher::new(&fx.engine, &opener).publish(&options).unwrap();

    assert_eq!(report.branch, "docs-sync");
    assert!(report.pushed);
    let local_tip = fx.repo.head().unwrap().target().unwrap();
    assert_eq!(report.commit, Some(local_tip.to_string()));
    let remote_tip = fx
        .origin
        .find_reference("refs/heads/docs-sync")
        .unwrap()
        .target()
        .unwrap();
    assert_eq!(remote_tip, local_tip);
    assert_eq!(opener.calls.borrow()[0].head, "docs-sync");
}

#[test]
fn test_detached_head_without_branch_is_fatal() {
    let fx = fixture();
    let initial = fx.repo.head().unwrap().target().unwrap();
    fx.repo.set_head_detached(initial).unwrap();
    let opener = RecordingOpener::answering(opened());

    let err = Publisher::new(&fx.engine, &opener)
        .publish(&PublishOptions::default())
        .unwrap_err();

    assert!(matches!(err, Error::Git(readme_git::Error::DetachedHead)));
    assert_eq!(commit_count(&fx.repo), 1);
}
