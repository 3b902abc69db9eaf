//! Structured outcome of one diagnostic run.

use crate::exit_codes;
use crate::vehicle::{Part, PartType, VehicleField};
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of a diagnostic run: success, or the first stage that failed.
///
/// Each failing variant carries every problem found by its stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DiagnosticReport {
    /// Year, make or model is absent.
    FieldsMissing { fields: Vec<VehicleField> },
    /// Shortfall per part type. Every count is positive.
    PartsMissing { parts: BTreeMap<PartType, u32> },
    /// Damaged parts in the vehicle's part order.
    PartsDamaged { parts: Vec<Part> },
    Success,
}

impl DiagnosticReport {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            DiagnosticReport::FieldsMissing { .. } => OutcomeKind::FieldsMissing,
            DiagnosticReport::PartsMissing { .. } => OutcomeKind::PartsMissing,
            DiagnosticReport::PartsDamaged { .. } => OutcomeKind::PartsDamaged,
            DiagnosticReport::Success => OutcomeKind::Success,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DiagnosticReport::Success)
    }
}

/// Payload-free discriminant of [`DiagnosticReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    FieldsMissing,
    PartsMissing,
    PartsDamaged,
    Success,
}

impl OutcomeKind {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            OutcomeKind::FieldsMissing => exit_codes::FIELDS_MISSING,
            OutcomeKind::PartsMissing => exit_codes::PARTS_MISSING,
            OutcomeKind::PartsDamaged => exit_codes::PARTS_DAMAGED,
            OutcomeKind::Success => exit_codes::SUCCESS,
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeKind::FieldsMissing => write!(f, "fields missing"),
            OutcomeKind::PartsMissing => write!(f, "parts missing"),
            OutcomeKind::PartsDamaged => write!(f, "parts damaged"),
            OutcomeKind::Success => write!(f, "success"),
        }
    }
}
