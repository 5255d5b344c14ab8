//! # inn CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; verbosity maps onto a
//! tracing filter so diagnostics never mix into the report output.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use inn_cli::check::{run_check, CheckArgs};
use inn_cli::extract::{run_extract, ExtractArgs};
use inn_cli::info::{run_info, InfoArgs};

/// Russian taxpayer number (INN) toolbox.
///
/// Validates candidate numbers against the structural and weighted
/// checksum rules, classifies valid numbers, and extracts numbers
/// embedded in free text.
#[derive(Parser, Debug)]
#[command(name = "inn", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit machine-readable JSON instead of text reports.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate candidate numbers and report a verdict for each.
    Check(CheckArgs),

    /// Show the classification of valid numbers (kind, authority,
    /// position, check digits, registration scheme).
    Info(InfoArgs),

    /// Extract valid numbers embedded in text, a file, or stdin.
    Extract(ExtractArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("inn CLI starting");

    let result = match cli.command {
        Commands::Check(args) => run_check(&args, cli.json),
        Commands::Info(args) => run_info(&args, cli.json),
        Commands::Extract(args) => run_extract(&args, cli.json),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
