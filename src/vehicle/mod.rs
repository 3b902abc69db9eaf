//! Vehicle record model for vdiag.
//!
//! This module defines the records the diagnostic engine inspects:
//!
//! - [`Vehicle`]: the identifying fields (year, make, model) and the ordered
//!   list of installed parts
//! - [`Part`], [`PartType`], [`ConditionType`]: one installed component and
//!   its health
//! - [`RequiredParts`]: how many of each part type a complete vehicle carries
//!
//! # Record Format
//!
//! Records are plain YAML or JSON documents. Absent fields deserialize to
//! `None` so the engine can report them:
//!
//! ```text
//! year: 2008
//! make: Toyota
//! model: Tacoma
//! parts:
//!   - type: ENGINE
//!     condition: GOOD
//!   - type: TIRE
//!     condition: FLAT
//! ```

mod requirements;
mod types;


pub use requirements::RequiredParts;
pub use types::{ConditionType, Part, PartType};

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One of the identifying data fields of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleField {
    Year,
    Make,
    Model,
}

impl std::fmt::Display for VehicleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleField::Year => write!(f, "Year"),
            VehicleField::Make => write!(f, "Make"),
            VehicleField::Model => write!(f, "Model"),
        }
    }
}

/// A vehicle under diagnosis.
///
/// Absence of `year`, `make` or `model` is a valid state; only the engine
/// decides what to make of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    /// Model year.
    #[serde(deserialize_with = "deserialize_text")]
    pub year: Option<String>,

    #[serde(deserialize_with = "deserialize_text")]
    pub make: Option<String>,

    /// Model name, which may be numeric in a record (e.g. `911`).
    #[serde(deserialize_with = "deserialize_text")]
    pub model: Option<String>,

    /// Installed parts in record order.
    pub parts: Vec<Part>,
}

impl Vehicle {
    /// Fields that are absent, in Year/Make/Model order.
    pub fn missing_fields(&self) -> Vec<VehicleField> {
        let mut missing = Vec::new();
        if self.year.is_none() {
            missing.push(VehicleField::Year);
        }
        if self.make.is_none() {
            missing.push(VehicleField::Make);
        }
        if self.model.is_none() {
            missing.push(VehicleField::Model);
        }
        missing
    }

    /// Shortfall per part type against `required`.
    ///
    /// See [`RequiredParts::missing_from`].
    pub fn missing_parts(&self, required: &RequiredParts) -> BTreeMap<PartType, u32> {
        required.missing_from(&self.parts)
    }

    /// Installed parts that are not in working condition, in record order.
    pub fn damaged_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter().filter(|p| !p.is_in_working_condition())
    }

    /// Short human label such as `2008 Toyota Tacoma`, with `?` for absent fields.
    pub fn label(&self) -> String {
        format!(
            "{} {} {}",
            self.year.as_deref().unwrap_or("?"),
            self.make.as_deref().unwrap_or("?"),
            self.model.as_deref().unwrap_or("?")
        )
    }
}

/// Accept a string or a number for an identifying field (`"model": 911`).
fn deserialize_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|value| match value {
        Scalar::Text(s) => s,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
    }))
}
