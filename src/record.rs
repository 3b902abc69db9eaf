//! Loading vehicle records from disk.
//!
//! Records are YAML or JSON. The format follows the file extension
//! (`.json` is JSON, anything else is read as YAML). A record that does not
//! describe a valid vehicle, such as a part with no `type` or `condition`, is
//! rejected here and never reaches the diagnostic engine.

use crate::error::{Result, VdiagError};
use crate::vehicle::Vehicle;
use std::path::Path;
use tracing::debug;

/// Serialization format of a vehicle record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Yaml,
    Json,
}

impl RecordFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => RecordFormat::Json,
            _ => RecordFormat::Yaml,
        }
    }
}

/// Load a vehicle record from `path`.
///
/// # Returns
///
/// * `Ok(Vehicle)` - The parsed record
/// * `Err(VdiagError::UserError)` - The file could not be read
/// * `Err(VdiagError::InvalidRecord)` - The content is not a valid vehicle
pub fn load_vehicle<P: AsRef<Path>>(path: P) -> Result<Vehicle> {
    let path = path.as_ref();
    let format = RecordFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading vehicle record");

    let content = std::fs::read_to_string(path).map_err(|e| {
        VdiagError::UserError(format!(
            "failed to read vehicle record '{}': {}",
            path.display(),
            e
        ))
    })?;

    parse_vehicle(&content, format)
        .map_err(|e| VdiagError::InvalidRecord(format!("{}: {}", path.display(), e)))
}

/// Parse a vehicle record from a string.
pub fn parse_vehicle(content: &str, format: RecordFormat) -> Result<Vehicle> {
    let vehicle: Vehicle = match format {
        RecordFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| VdiagError::InvalidRecord(e.to_string()))?
        }
        RecordFormat::Json => {
            serde_json::from_str(content).map_err(|e| VdiagError::InvalidRecord(e.to_string()))?
        }
    };

    debug!(parts = vehicle.parts.len(), "parsed vehicle record");
    Ok(vehicle)
}
