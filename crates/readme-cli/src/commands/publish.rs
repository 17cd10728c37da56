//! Publish command implementation
//!
//! Runs the full job: sync the README, commit, push, and open a pull request.

use colored::Colorize;

use readme_core::{GhCliOpener, PublishOptions, PublishReport, Publisher, PullRequestOutcome};

use super::Location;
use crate::error::Result;

/// Flags accepted by `readme-sync publish`.
#[derive(Debug, Clone, Default)]
pub struct PublishArgs {
    pub no_push: bool,
    pub no_pr: bool,
    pub branch: Option<String>,
    pub base: Option<String>,
    pub message: Option<String>,
    pub json: bool,
}

/// Run the publish command
pub fn run_publish(location: &Location, args: &PublishArgs) -> Result<()> {
    let engine = location.engine_with(|config| {
        if let Some(base) = &args.base {
            config.git.base_branch = base.clone();
        }
        if let Some(message) = &args.message {
            config.git.commit_message = message.clone();
        }
    })?;

    if !args.json {
        println!(
            "{} Publishing {}...",
            "=>".blue().bold(),
            engine.config().files.readme.cyan()
        );
    }

    let token = engine.config().token_from_env();
    if token.is_none() {
        tracing::debug!(
            token_env = %engine.config().git.token_env,
            "No access token in environment; relying on ambient credentials"
        );
    }

    let opener = GhCliOpener::new(token.clone());
    let options = PublishOptions {
        push: !args.no_push,
        pull_request: !args.no_pr,
        branch: args.branch.clone().filter(|branch| !branch.trim().is_empty()),
        token,
    };

    let report = Publisher::new(&engine, &opener).publish(&options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &PublishReport) {
    if report.sync.actions.is_empty() {
        println!("   {} README already in sync", "=".dimmed());
    }
    for action in &report.sync.actions {
        println!("   {} {}", "+".green(), action);
    }

    match &report.commit {
        Some(oid) => println!(
            "   {} Committed {} on {}",
            "+".green(),
            short_oid(oid).yellow(),
            report.branch.cyan()
        ),
        None => println!("   {} Nothing to commit", "=".dimmed()),
    }

    if report.pushed {
        println!("   {} Pushed {}", "+".green(), report.branch.cyan());
    }

    match &report.pull_request {
        PullRequestOutcome::Opened { url } => {
            println!("   {} Opened pull request {}", "+".green(), url.cyan())
        }
        PullRequestOutcome::AlreadyExists => {
            println!("   {} Pull request already open", "=".dimmed())
        }
        PullRequestOutcome::NothingToMerge => {
            println!("   {} No commits to propose", "=".dimmed())
        }
        PullRequestOutcome::Skipped { reason } => {
            println!("   {} Pull request skipped: {}", "=".dimmed(), reason)
        }
    }

    println!("{} Publish complete.", "OK".green().bold());
}

fn short_oid(oid: &str) -> &str {
    oid.get(..7).unwrap_or(oid)
}
