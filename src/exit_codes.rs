//! Exit code constants for the vdiag CLI.
//!
//! A non-success diagnostic outcome gets its own code so scripts can tell
//! which stage stopped the run:
//! - 0: Success (vehicle passed every stage)
//! - 1: User error (bad args, unreadable or invalid record, bad config)
//! - 2: Vehicle is missing one or more data fields
//! - 3: Vehicle is missing one or more required parts
//! - 4: Vehicle has one or more damaged parts

/// Vehicle passed all diagnostics.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, invalid record or config.
pub const USER_ERROR: i32 = 1;

/// Field check failed: year, make or model is absent.
pub const FIELDS_MISSING: i32 = 2;

/// Part presence check failed: at least one required part is short.
pub const PARTS_MISSING: i32 = 3;

/// Part condition check failed: at least one installed part is damaged.
pub const PARTS_DAMAGED: i32 = 4;
