//! Config struct definition and default implementation.

use super::types::ReportFormat;
use crate::vehicle::PartType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for vdiag.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format used when `--format` is not given.
    pub report_format: ReportFormat,

    /// Per-type required counts. Merged over the built-in table unless
    /// `replace_required_parts` is set; a zero count drops the requirement.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub required_parts: BTreeMap<PartType, u32>,

    /// Use `required_parts` as the whole table instead of merging.
    pub replace_required_parts: bool,
}
