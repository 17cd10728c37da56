//! `readme-sync.toml` parsing

use std::fs;
use std::path::Path;

use readme_blocks::{DEFAULT_END, DEFAULT_START, Sentinels};
use readme_fs::NormalizedPath;
use readme_git::Identity;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// File name looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = "readme-sync.toml";

fn default_fragment() -> String {
    "_README.md".to_string()
}

fn default_readme() -> String {
    "README.md".to_string()
}

fn default_start() -> String {
    DEFAULT_START.to_string()
}

fn default_end() -> String {
    DEFAULT_END.to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_base_branch() -> String {
    "main".to_string()
}

fn default_commit_message() -> String {
    "README update Automation".to_string()
}

fn default_author_name() -> String {
    "github-actions[bot]".to_string()
}

fn default_author_email() -> String {
    "github-actions[bot]@users.noreply.github.com".to_string()
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_true() -> bool {
    true
}

fn default_pr_body() -> String {
    "Synchronize README.md with _README.md".to_string()
}

/// Locations of the fragment and target README, relative to the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesSection {
    #[serde(default = "default_fragment")]
    pub fragment: String,
    #[serde(default = "default_readme")]
    pub readme: String,
}

impl Default for FilesSection {
    fn default() -> Self {
        Self {
            fragment: default_fragment(),
            readme: default_readme(),
        }
    }
}

/// Marker lines bounding the managed region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentinelSection {
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default = "default_end")]
    pub end: String,
}

impl Default for SentinelSection {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

/// Commit and push settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitSection {
    #[serde(default = "default_remote")]
    pub remote: String,
    /// Branch pull requests target
    #[serde(default = "default_base_branch")]
    pub base_branch: String,
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
    #[serde(default = "default_author_name")]
    pub author_name: String,
    #[serde(default = "default_author_email")]
    pub author_email: String,
    /// Environment variable holding the access token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for GitSection {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            base_branch: default_base_branch(),
            commit_message: default_commit_message(),
            author_name: default_author_name(),
            author_email: default_author_email(),
            token_env: default_token_env(),
        }
    }
}

/// Pull request settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Defaults to the commit message when unset
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_pr_body")]
    pub body: String,
}

impl Default for PullRequestSection {
    fn default() -> Self {
        Self {
            enabled: true,
            title: None,
            body: default_pr_body(),
        }
    }
}

/// Complete job configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub files: FilesSection,
    #[serde(default)]
    pub sentinels: SentinelSection,
    #[serde(default)]
    pub git: GitSection,
    #[serde(default)]
    pub pull_request: PullRequestSection,
}

impl SyncConfig {
    /// Parse a configuration from TOML content.
    ///
    /// # Example
    ///
    /// ```
    /// use readme_core::SyncConfig;
    ///
    /// let config = SyncConfig::parse(r#"
    /// [git]
    /// base_branch = "develop"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.git.base_branch, "develop");
    /// assert_eq!(config.files.readme, "README.md");
    /// ```
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration for the repository at `root`.
    ///
    /// With `explicit` set, that file must exist. Otherwise
    /// `<root>/readme-sync.toml` is read when present and defaults are used
    /// when it is not.
    pub fn load(root: &NormalizedPath, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::ConfigNotFound {
                        path: path.to_path_buf(),
                    });
                }
                path.to_path_buf()
            }
            None => {
                let path = root.join(CONFIG_FILE_NAME).to_native();
                if !path.is_file() {
                    tracing::debug!(root = %root, "No config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path).map_err(|e| readme_fs::Error::io(&path, e))?;
        let config = Self::parse(&content).map_err(|e| Error::ConfigParse {
            path: path.clone(),
            message: e.message().to_string(),
        })?;
        config.sentinels()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// The validated sentinel pair.
    pub fn sentinels(&self) -> Result<Sentinels> {
        Ok(Sentinels::new(
            self.sentinels.start.clone(),
            self.sentinels.end.clone(),
        )?)
    }

    /// Commit identity for automation commits.
    pub fn identity(&self) -> Identity {
        Identity {
            name: self.git.author_name.clone(),
            email: self.git.author_email.clone(),
        }
    }

    /// Pull request title, falling back to the commit message.
    pub fn pull_request_title(&self) -> &str {
        self.pull_request
            .title
            .as_deref()
            .unwrap_or(&self.git.commit_message)
    }

    /// Read the access token from the configured environment variable.
    ///
    /// Empty values are treated as unset.
    pub fn token_from_env(&self) -> Option<String> {
        std::env::var(&self.git.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SyncConfig::parse("").unwrap();
        assert_eq!(config, SyncConfig::default());
        assert_eq!(config.files.fragment, "_README.md");
        assert_eq!(config.files.readme, "README.md");
        assert_eq!(config.git.commit_message, "README update Automation");
        assert_eq!(config.git.base_branch, "main");
        assert!(config.pull_request.enabled);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = SyncConfig::parse(
            r#"
[files]
readme = "docs/README.md"
"#,
        )
        .unwrap();
        assert_eq!(config.files.readme, "docs/README.md");
        assert_eq!(config.files.fragment, "_README.md");
    }

    #[test]
    fn test_pull_request_title_fallback() {
        let mut config = SyncConfig::default();
        assert_eq!(config.pull_request_title(), "README update Automation");

        config.pull_request.title = Some("docs: sync README".to_string());
        assert_eq!(config.pull_request_title(), "docs: sync README");
    }

    #[test]
    fn test_default_sentinels_are_valid() {
        let sentinels = SyncConfig::default().sentinels().unwrap();
        assert_eq!(sentinels, Sentinels::default());
    }

    #[test]
    fn test_identity() {
        let identity = SyncConfig::default().identity();
        assert_eq!(identity.name, "github-actions[bot]");
    }
}
