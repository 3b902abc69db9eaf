//! Implementation of the `vdiag requirements` command.

use crate::cli::RequirementsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::vehicle::RequiredParts;
use std::io::Write;

/// Execute the `vdiag requirements` command.
///
/// Prints the effective required-parts table, one `TYPE: count` line per
/// entry in part type order.
pub fn cmd_requirements(args: RequirementsArgs) -> Result<()> {
    let config = Config::load_or_default(args.config.as_ref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_requirements(&config.required_parts(), &mut out)
}

fn write_requirements<W: Write>(required: &RequiredParts, out: &mut W) -> Result<()> {
    if required.is_empty() {
        writeln!(out, "No parts are required.")?;
        return Ok(());
    }

    for (part_type, count) in required.iter() {
        writeln!(out, "{}: {}", part_type, count)?;
    }
    Ok(())
}
