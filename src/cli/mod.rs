//! CLI argument parsing for vdiag.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// vdiag: Offline diagnostic validator for vehicle records.
///
/// Checks a vehicle record in three stages and stops at the first that fails:
/// - Data fields (year, make, model) are present
/// - Every required part is installed in the required quantity
/// - No installed part is damaged
#[derive(Parser, Debug)]
#[command(name = "vdiag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for vdiag.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run diagnostics on a vehicle record.
    ///
    /// Exits 0 when the vehicle passes, 2 for missing fields, 3 for missing
    /// parts, 4 for damaged parts, and 1 when the record cannot be read.
    Check(CheckArgs),

    /// Show the required-parts table diagnostics run against.
    #[command(alias = "reqs")]
    Requirements(RequirementsArgs),
}

/// Arguments for the `check` command.
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Path to the vehicle record (YAML, or JSON with a `.json` extension).
    pub record: PathBuf,

    /// Path to a vdiag.yaml config file.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Output format: text or json (default from config, else text).
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Arguments for the `requirements` command.
#[derive(clap::Args, Debug)]
pub struct RequirementsArgs {
    /// Path to a vdiag.yaml config file.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
