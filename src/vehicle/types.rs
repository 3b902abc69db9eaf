//! Part and condition types.

use serde::{Deserialize, Serialize};

/// Functional category of an installed part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartType {
    Engine,
    Electrical,
    FuelFilter,
    OilFilter,
    Tire,
    KeyFob,
}

impl PartType {
    /// All part types in declaration order.
    #[cfg(test)]
    pub const ALL: [PartType; 6] = [
        PartType::Engine,
        PartType::Electrical,
        PartType::FuelFilter,
        PartType::OilFilter,
        PartType::Tire,
        PartType::KeyFob,
    ];

    /// Record spelling of this type (e.g., `FUEL_FILTER`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Engine => "ENGINE",
            PartType::Electrical => "ELECTRICAL",
            PartType::FuelFilter => "FUEL_FILTER",
            PartType::OilFilter => "OIL_FILTER",
            PartType::Tire => "TIRE",
            PartType::KeyFob => "KEY_FOB",
        }
    }
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health state of an installed part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    New,
    Good,
    Worn,
    Damaged,
    NoPower,
    Flat,
    Clogged,
    Sprung,
}

impl ConditionType {
    /// All conditions in declaration order.
    #[cfg(test)]
    pub const ALL: [ConditionType; 8] = [
        ConditionType::New,
        ConditionType::Good,
        ConditionType::Worn,
        ConditionType::Damaged,
        ConditionType::NoPower,
        ConditionType::Flat,
        ConditionType::Clogged,
        ConditionType::Sprung,
    ];

    /// Whether a part in this condition can be driven on.
    ///
    /// Keep this match free of a wildcard arm: every new condition must be
    /// classified here.
    pub fn is_operational(&self) -> bool {
        match self {
            ConditionType::New | ConditionType::Good | ConditionType::Worn => true,
            ConditionType::Damaged
            | ConditionType::NoPower
            | ConditionType::Flat
            | ConditionType::Clogged
            | ConditionType::Sprung => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionType::New => "NEW",
            ConditionType::Good => "GOOD",
            ConditionType::Worn => "WORN",
            ConditionType::Damaged => "DAMAGED",
            ConditionType::NoPower => "NO_POWER",
            ConditionType::Flat => "FLAT",
            ConditionType::Clogged => "CLOGGED",
            ConditionType::Sprung => "SPRUNG",
        }
    }
}

impl std::fmt::Display for ConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One installed component. Both fields are required in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(rename = "type")]
    pub part_type: PartType,
    pub condition: ConditionType,
}

impl Part {
    #[cfg(test)]
    pub fn new(part_type: PartType, condition: ConditionType) -> Self {
        Self {
            part_type,
            condition,
        }
    }

    pub fn is_in_working_condition(&self) -> bool {
        self.condition.is_operational()
    }
}
