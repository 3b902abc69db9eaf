//! vdiag: Offline diagnostic validator for vehicle records.
//!
//! This is the main entry point for the `vdiag` CLI. It parses arguments,
//! sets up logging, dispatches to the command handler, and maps errors and
//! failing diagnostics to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod exit_codes;
pub mod record;
pub mod telemetry;
pub mod vehicle;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    telemetry::init_tracing(cli.log_json, telemetry::level_for_verbosity(cli.verbose));

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Findings were already printed on stdout; only real errors go to stderr.
            if !err.is_finding() {
                eprintln!("Error: {}", err);
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
