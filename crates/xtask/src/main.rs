//! Development tasks for the randomizer reward engine
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod content;
mod host;

use anyhow::Result;
use clap::Parser;
use commands::{Chain, Grant, ResetLedger, Validate};

/// Development tasks for the randomizer reward engine
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for randomizer item rewards", long_about = None)]
#[command(version)]
struct Cli {
    /// Log resolution steps (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Load all content and report problems
    Validate(Validate),

    /// Show where a chained item stands against a ledger
    Chain(Chain),

    /// Grant items against a logging host and update the ledger
    Grant(Grant),

    /// Clear the ledger file to start a new session
    ResetLedger(ResetLedger),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RANDO_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Command::Validate(cmd) => cmd.execute(),
        Command::Chain(cmd) => cmd.execute(),
        Command::Grant(cmd) => cmd.execute(),
        Command::ResetLedger(cmd) => cmd.execute(),
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
