//! Command implementations for vdiag.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod requirements;

use crate::cli::Command;
use crate::error::Result;

pub use check::cmd_check;
pub use requirements::cmd_requirements;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => cmd_check(args),
        Command::Requirements(args) => cmd_requirements(args),
    }
}
