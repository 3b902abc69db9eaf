//! Configuration types and defaults for vdiag.

use serde::{Deserialize, Serialize};

/// Largest per-type requirement a config may declare.
pub const MAX_REQUIRED_PER_TYPE: u32 = 32;

/// How `vdiag check` renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// One human-readable line per finding (default).
    #[default]
    Text,
    /// A single JSON document with the structured report.
    Json,
}

impl ReportFormat {
    /// Parse a report format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
