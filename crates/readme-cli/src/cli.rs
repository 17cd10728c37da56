//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// readme-sync - Mirror _README.md into README.md between sentinel comments
#[derive(Parser, Debug)]
#[command(name = "readme-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository root (defaults to the current directory)
    #[arg(long, global = true, env = "README_SYNC_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to <root>/readme-sync.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rewrite README.md so its managed region mirrors _README.md
    Sync {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Check whether README.md is up to date (exits 1 when it is not)
    Check {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the unified diff sync would apply
    Diff,

    /// Sync, commit, push, and open a pull request
    ///
    /// Examples:
    ///   readme-sync publish                 # Full job on the current branch
    ///   readme-sync publish --no-pr         # Commit and push only
    ///   readme-sync publish --no-push --no-pr  # Commit locally
    Publish {
        /// Do not push the commit
        #[arg(long)]
        no_push: bool,

        /// Do not open a pull request
        #[arg(long)]
        no_pr: bool,

        /// Branch to push and propose (defaults to the checked-out branch)
        #[arg(long, env = "GITHUB_HEAD_REF")]
        branch: Option<String>,

        /// Base branch for the pull request
        #[arg(long)]
        base: Option<String>,

        /// Commit message
        #[arg(short, long)]
        message: Option<String>,

        /// Output as JSON for CI/CD integration
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   readme-sync completions bash > ~/.local/share/bash-completion/completions/readme-sync
    ///   readme-sync completions zsh > ~/.zfunc/_readme-sync
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["readme-sync"]);
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_short_verbose_flag() {
        let cli = Cli::parse_from(["readme-sync", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_sync_command() {
        let cli = Cli::parse_from(["readme-sync", "sync", "--dry-run"]);
        assert_eq!(
            cli.command,
            Some(Commands::Sync {
                dry_run: true,
                json: false
            })
        );
    }

    #[test]
    fn parse_check_json() {
        let cli = Cli::parse_from(["readme-sync", "check", "--json"]);
        assert_eq!(cli.command, Some(Commands::Check { json: true }));
    }

    #[test]
    fn parse_publish_flags() {
        let cli = Cli::parse_from([
            "readme-sync",
            "publish",
            "--no-pr",
            "--base",
            "develop",
            "--branch",
            "docs-sync",
            "-m",
            "docs: sync",
        ]);
        match cli.command {
            Some(Commands::Publish {
                no_push,
                no_pr,
                branch,
                base,
                message,
                json,
            }) => {
                assert!(!no_push);
                assert!(no_pr);
                assert_eq!(branch.as_deref(), Some("docs-sync"));
                assert_eq!(base.as_deref(), Some("develop"));
                assert_eq!(message.as_deref(), Some("docs: sync"));
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["readme-sync", "check", "--root", "/tmp/repo", "--verbose"]);
        assert!(cli.verbose);
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/repo")));
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["readme-sync", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }
}
