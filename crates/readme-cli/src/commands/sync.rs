//! Sync, check, and diff command implementations

use colored::Colorize;

use readme_core::{CheckStatus, SyncOptions};

use super::Location;
use crate::error::{CliError, Result};

/// Run the sync command
///
/// Rewrites the README so its managed region mirrors the fragment.
pub fn run_sync(location: &Location, dry_run: bool, json: bool) -> Result<()> {
    let engine = location.engine()?;
    let readme = engine.config().files.readme.clone();

    if !json {
        println!(
            "{} Synchronizing {}...",
            "=>".blue().bold(),
            readme.cyan()
        );
    }

    let report = engine.sync(&SyncOptions { dry_run })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.actions.is_empty() {
        println!("{} Already synchronized. No changes needed.", "OK".green().bold());
    } else if report.dry_run {
        println!("{} Dry run, nothing written:", "DRY-RUN".yellow().bold());
        for action in &report.actions {
            println!("   {} {}", "~".yellow(), action);
        }
    } else {
        println!("{} Synchronization complete:", "OK".green().bold());
        for action in &report.actions {
            println!("   {} {}", "+".green(), action);
        }
    }

    Ok(())
}

/// Run the check command
///
/// Succeeds only when the README already holds exactly one up-to-date region.
pub fn run_check(location: &Location, json: bool) -> Result<()> {
    let engine = location.engine()?;
    let report = engine.check()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} Checking {}...",
            "=>".blue().bold(),
            report.readme.cyan()
        );
        match report.status {
            CheckStatus::InSync => {
                println!("{} README is up to date.", "OK".green().bold());
            }
            CheckStatus::OutOfDate => {
                println!("{} README is out of date:", "OUT-OF-DATE".red().bold());
                for msg in &report.messages {
                    println!("   {} {}", "!".red(), msg);
                }
            }
            CheckStatus::Missing => {
                println!("{} README does not exist.", "MISSING".yellow().bold());
            }
        }
    }

    if report.is_in_sync() {
        Ok(())
    } else {
        if !json {
            println!();
            println!("Run {} to repair.", "readme-sync sync".cyan());
        }
        Err(CliError::user(format!("{} is not in sync", report.readme)))
    }
}

/// Run the diff command
///
/// Prints the unified diff a sync would apply.
pub fn run_diff(location: &Location) -> Result<()> {
    let engine = location.engine()?;
    let plan = engine.plan()?;

    if plan.is_noop() {
        println!(
            "{} No changes needed. README is in sync.",
            "OK".green().bold()
        );
        return Ok(());
    }

    for line in plan.diff().lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else {
            println!("{}", line);
        }
    }

    println!();
    println!(
        "{} line(s) would change. Run {} to apply.",
        plan.changed_lines(),
        "readme-sync sync".cyan()
    );

    Ok(())
}
