//! Error types for the vdiag CLI.
//!
//! Uses thiserror for derive macros. Diagnostic findings are not errors
//! inside the engine; the CLI layer wraps a failing report in
//! [`VdiagError::DiagnosticsFailed`] only to pick the process exit code.

use crate::diagnostics::OutcomeKind;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for vdiag operations.
#[derive(Error, Debug)]
pub enum VdiagError {
    /// User provided invalid arguments or an unreadable file.
    #[error("{0}")]
    UserError(String),

    /// The vehicle record could not be turned into a `Vehicle`.
    #[error("invalid vehicle record: {0}")]
    InvalidRecord(String),

    /// Writing to the reporting sink failed.
    #[error("failed to write diagnostic output: {0}")]
    Io(#[from] std::io::Error),

    /// Diagnostics ran to completion and the vehicle did not pass.
    #[error("vehicle failed diagnostics: {0}")]
    DiagnosticsFailed(OutcomeKind),
}

impl VdiagError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            VdiagError::UserError(_) => exit_codes::USER_ERROR,
            VdiagError::InvalidRecord(_) => exit_codes::USER_ERROR,
            VdiagError::Io(_) => exit_codes::USER_ERROR,
            VdiagError::DiagnosticsFailed(kind) => kind.exit_code(),
        }
    }

    /// Whether this error is an ordinary diagnostic outcome rather than a
    /// failure to run diagnostics at all.
    pub fn is_finding(&self) -> bool {
        matches!(self, VdiagError::DiagnosticsFailed(_))
    }
}

/// Result type alias for vdiag operations.
pub type Result<T> = std::result::Result<T, VdiagError>;
