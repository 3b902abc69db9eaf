//! JSON rendering of a check result.

use crate::diagnostics::DiagnosticReport;
use crate::error::{Result, VdiagError};
use crate::vehicle::Vehicle;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct VehicleSummary<'a> {
    year: Option<&'a str>,
    make: Option<&'a str>,
    model: Option<&'a str>,
    parts: usize,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    vehicle: VehicleSummary<'a>,
    checked_at: DateTime<Utc>,
    report: &'a DiagnosticReport,
}

/// Write `report` for `vehicle` as one pretty-printed JSON document.
pub fn write_json_report<W: Write>(
    out: &mut W,
    vehicle: &Vehicle,
    report: &DiagnosticReport,
    checked_at: DateTime<Utc>,
) -> Result<()> {
    let doc = CheckOutput {
        vehicle: VehicleSummary {
            year: vehicle.year.as_deref(),
            make: vehicle.make.as_deref(),
            model: vehicle.model.as_deref(),
            parts: vehicle.parts.len(),
        },
        checked_at,
        report,
    };

    let json = serde_json::to_string_pretty(&doc)
        .map_err(|e| VdiagError::UserError(format!("failed to serialize report: {}", e)))?;
    writeln!(out, "{}", json)?;
    Ok(())
}
