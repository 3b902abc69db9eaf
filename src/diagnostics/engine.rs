//! The three-stage diagnostic pipeline.

use super::report::DiagnosticReport;
use crate::error::Result;
use crate::vehicle::{Part, RequiredParts, Vehicle};
use std::io::Write;
use tracing::{debug, debug_span, info, warn};

const FIELDS_SUMMARY: &str = "Yikes! Car is missing fields, cannot proceed with diagnostics.";
const MISSING_SUMMARY: &str = "Yikes! Car has missing parts, cannot proceed with diagnostics.";
const DAMAGED_SUMMARY: &str = "Yikes! Car has damaged parts, cannot proceed with diagnostics.";
const SUCCESS_LINE: &str = "Success! Car passes all diagnostics.";

/// Runs field, part presence and part condition checks over a vehicle.
///
/// The engine only holds the required-parts table, so one instance can be
/// shared across threads and reused for any number of vehicles.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticEngine {
    required: RequiredParts,
}

impl DiagnosticEngine {
    pub fn new(required: RequiredParts) -> Self {
        Self { required }
    }

    pub fn required(&self) -> &RequiredParts {
        &self.required
    }

    /// Diagnose `vehicle`, writing one human-readable line per finding to `out`.
    ///
    /// Stages run in order and the first failing stage ends the run. Within
    /// a stage every problem is reported before stopping.
    ///
    /// # Returns
    ///
    /// * `Ok(DiagnosticReport)` - The outcome, including failing outcomes
    /// * `Err(VdiagError::Io)` - Writing to `out` failed
    pub fn run<W: Write>(&self, vehicle: &Vehicle, out: &mut W) -> Result<DiagnosticReport> {
        let span = debug_span!("diagnostics", vehicle = %vehicle.label());
        let _enter = span.enter();

        if let Some(report) = check_fields(vehicle, out)? {
            return Ok(report);
        }

        if let Some(report) = self.check_part_presence(vehicle, out)? {
            return Ok(report);
        }

        if let Some(report) = check_part_condition(vehicle, out)? {
            return Ok(report);
        }

        writeln!(out, "{}", SUCCESS_LINE)?;
        info!("vehicle passed all diagnostics");
        Ok(DiagnosticReport::Success)
    }

    /// [`run`](Self::run) against standard output.
    pub fn run_to_stdout(&self, vehicle: &Vehicle) -> Result<DiagnosticReport> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run(vehicle, &mut out)
    }

    fn check_part_presence<W: Write>(
        &self,
        vehicle: &Vehicle,
        out: &mut W,
    ) -> Result<Option<DiagnosticReport>> {
        debug!(installed = vehicle.parts.len(), "checking part presence");

        let missing = vehicle.missing_parts(&self.required);
        if missing.is_empty() {
            return Ok(None);
        }

        for (part_type, count) in &missing {
            writeln!(out, "Missing Part(s) Detected: {} - Count: {}", part_type, count)?;
        }
        writeln!(out, "{}", MISSING_SUMMARY)?;

        warn!(types = missing.len(), "vehicle is missing required parts");
        Ok(Some(DiagnosticReport::PartsMissing { parts: missing }))
    }
}

fn check_fields<W: Write>(vehicle: &Vehicle, out: &mut W) -> Result<Option<DiagnosticReport>> {
    debug!("checking data fields");

    let fields = vehicle.missing_fields();
    if fields.is_empty() {
        return Ok(None);
    }

    let names: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
    writeln!(out, "Car is missing field(s): {}.", names.join(", "))?;
    writeln!(out, "{}", FIELDS_SUMMARY)?;

    warn!(fields = %names.join(","), "vehicle is missing data fields");
    Ok(Some(DiagnosticReport::FieldsMissing { fields }))
}

fn check_part_condition<W: Write>(
    vehicle: &Vehicle,
    out: &mut W,
) -> Result<Option<DiagnosticReport>> {
    debug!("checking part condition");

    // Walk the whole list; every damaged part gets its own line.
    let mut damaged: Vec<Part> = Vec::new();
    for part in vehicle.damaged_parts() {
        writeln!(
            out,
            "Damaged Part Detected: {} - Condition: {}",
            part.part_type, part.condition
        )?;
        damaged.push(*part);
    }

    if damaged.is_empty() {
        return Ok(None);
    }

    writeln!(out, "{}", DAMAGED_SUMMARY)?;

    warn!(count = damaged.len(), "vehicle has damaged parts");
    Ok(Some(DiagnosticReport::PartsDamaged { parts: damaged }))
}
