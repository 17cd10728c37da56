//! readme-sync CLI
//!
//! Mirrors `_README.md` into `README.md` and publishes the change.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use commands::{Location, PublishArgs};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let location = Location {
        root: cli.root,
        config: cli.config,
    };

    match cli.command {
        Some(cmd) => execute_command(&location, cmd),
        None => {
            println!("{} README synchronization", "readme-sync".green().bold());
            println!();
            println!("Run {} for available commands.", "readme-sync --help".cyan());
            Ok(())
        }
    }
}

// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbose: bool) {
    if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}

fn execute_command(location: &Location, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync { dry_run, json } => commands::run_sync(location, dry_run, json),
        Commands::Check { json } => commands::run_check(location, json),
        Commands::Diff => commands::run_diff(location),
        Commands::Publish {
            no_push,
            no_pr,
            branch,
            base,
            message,
            json,
        } => commands::run_publish(
            location,
            &PublishArgs {
                no_push,
                no_pr,
                branch,
                base,
                message,
                json,
            },
        ),
        Commands::Completions { shell } => commands::run_completions(shell),
    }
}
