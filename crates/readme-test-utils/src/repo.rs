//! [`TestRepo`] builder for README sync scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;
use tempfile::TempDir;

use crate::git;

/// A temporary checkout with helpers for writing the fragment and README and
/// for inspecting the result.
///
/// # Example
///
/// ```rust,no_run
/// use readme_test_utils::repo::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.write_readme("# Title\n");
/// repo.write_fragment("Hello world");
/// let git = repo.init_git_with_commit();
/// repo.assert_file_contains("README.md", "# Title");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
    remote_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
            remote_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary checkout.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the bare remote created by [`TestRepo::add_bare_origin`].
    pub fn remote_path(&self) -> PathBuf {
        self.remote_dir.path().join("origin.git")
    }

    /// Write `_README.md`.
    pub fn write_fragment(&self, content: &str) {
        self.write_file("_README.md", content);
    }

    /// Write `README.md`.
    pub fn write_readme(&self, content: &str) {
        self.write_file("README.md", content);
    }

    /// Write any file relative to the root, creating parent directories.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Read `README.md`.
    pub fn read_readme(&self) -> String {
        self.read_file("README.md")
    }

    /// Read any file relative to the root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Initialise git and commit the current contents.
    ///
    /// Realism level: REAL WITH HISTORY.
    pub fn init_git_with_commit(&self) -> Repository {
        git::real_git_repo_with_commit(self.root())
    }

    /// Create a bare remote and register it as `origin`.
    pub fn add_bare_origin(&self, repo: &Repository) -> Repository {
        git::bare_origin(repo, &self.remote_path())
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_file(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
