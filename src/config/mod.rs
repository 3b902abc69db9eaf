//! Configuration model for vdiag.
//!
//! This module defines the Config struct that represents an optional
//! `vdiag.yaml` file. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), defaults for every omitted key, and validation of
//! config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::ReportFormat;
