//! Diagnostic pipeline for vdiag.
//!
//! The engine checks a [`Vehicle`](crate::vehicle::Vehicle) in a fixed order:
//!
//! 1. Data fields: year, make and model are present
//! 2. Part presence: every required part type is installed in quantity
//! 3. Part condition: no installed part is damaged
//!
//! Each stage reports all of its own problems, and a failing stage stops the
//! run. The outcome comes back as a [`DiagnosticReport`] while the
//! human-readable lines go to the caller's writer.

mod engine;
mod report;

#[cfg(test)]
mod tests;

pub use engine::DiagnosticEngine;
pub use report::{DiagnosticReport, OutcomeKind};
