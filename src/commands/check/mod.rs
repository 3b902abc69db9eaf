//! Implementation of the `vdiag check` command.
//!
//! # Steps
//!
//! 1. Load config (when `--config` is given) and resolve the output format
//! 2. Load and parse the vehicle record
//! 3. Run the diagnostic pipeline against the configured required parts
//! 4. Print the result as text lines or a JSON document
//! 5. Map a failing report to its exit code

mod output;


use crate::cli::CheckArgs;
use crate::config::{Config, ReportFormat};
use crate::diagnostics::{DiagnosticEngine, DiagnosticReport};
use crate::error::{Result, VdiagError};
use crate::record::load_vehicle;
use crate::vehicle::Vehicle;
use chrono::Utc;
use std::io::Write;
use tracing::info;

pub use output::write_json_report;

/// Execute the `vdiag check` command.
///
/// # Exit Codes
///
/// - 0: Vehicle passed all diagnostics
/// - 1: User error (unreadable record or config, invalid record, bad format)
/// - 2: Vehicle is missing data fields
/// - 3: Vehicle is missing required parts
/// - 4: Vehicle has damaged parts
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = Config::load_or_default(args.config.as_ref())?;
    let format = resolve_format(args.format.as_deref(), &config)?;

    let vehicle = load_vehicle(&args.record)?;
    let engine = DiagnosticEngine::new(config.required_parts());

    let report = match format {
        ReportFormat::Text => engine.run_to_stdout(&vehicle)?,
        ReportFormat::Json => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            check_vehicle(&engine, &vehicle, format, &mut out)?
        }
    };

    info!(record = %args.record.display(), outcome = %report.kind(), "diagnostics finished");
    into_result(&report)
}

/// Run diagnostics and render the result in `format` to `out`.
pub fn check_vehicle<W: Write>(
    engine: &DiagnosticEngine,
    vehicle: &Vehicle,
    format: ReportFormat,
    out: &mut W,
) -> Result<DiagnosticReport> {
    info!(
        vehicle = %vehicle.label(),
        parts = vehicle.parts.len(),
        required_types = engine.required().iter().count(),
        "running diagnostics"
    );

    match format {
        ReportFormat::Text => engine.run(vehicle, out),
        ReportFormat::Json => {
            let report = engine.run(vehicle, &mut std::io::sink())?;
            write_json_report(out, vehicle, &report, Utc::now())?;
            Ok(report)
        }
    }
}

/// `--format` wins over the config's `report_format`.
fn resolve_format(flag: Option<&str>, config: &Config) -> Result<ReportFormat> {
    match flag {
        None => Ok(config.report_format),
        Some(s) => ReportFormat::from_str(s).ok_or_else(|| {
            VdiagError::UserError(format!(
                "invalid --format '{}'.\n\nExpected one of: text, json.",
                s
            ))
        }),
    }
}

fn into_result(report: &DiagnosticReport) -> Result<()> {
    if report.is_success() {
        Ok(())
    } else {
        Err(VdiagError::DiagnosticsFailed(report.kind()))
    }
}
