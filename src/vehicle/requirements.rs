//! Required part quantities and the shortfall computation.

use super::types::{Part, PartType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many units of each part type a complete vehicle carries.
///
/// Types absent from the table are not required. A zero count is allowed and
/// behaves like an absent entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredParts(BTreeMap<PartType, u32>);

impl Default for RequiredParts {
    fn default() -> Self {
        Self::from_iter([
            (PartType::Engine, 1),
            (PartType::Electrical, 1),
            (PartType::FuelFilter, 1),
            (PartType::OilFilter, 1),
            (PartType::Tire, 4),
        ])
    }
}

impl FromIterator<(PartType, u32)> for RequiredParts {
    fn from_iter<I: IntoIterator<Item = (PartType, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl RequiredParts {
    /// Required count for `part_type` (zero when not listed).
    #[cfg(test)]
    pub fn required(&self, part_type: PartType) -> u32 {
        self.0.get(&part_type).copied().unwrap_or(0)
    }

    /// Entries in part type order.
    pub fn iter(&self) -> impl Iterator<Item = (PartType, u32)> + '_ {
        self.0.iter().map(|(t, n)| (*t, *n))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compute the shortfall of `parts` against this table.
    ///
    /// Returns `required - installed` for every listed type whose installed
    /// count is strictly below its requirement. Every value in the result is
    /// positive; satisfied and unlisted types are omitted.
    pub fn missing_from(&self, parts: &[Part]) -> BTreeMap<PartType, u32> {
        let mut installed: BTreeMap<PartType, u32> = BTreeMap::new();
        for part in parts {
            let count = installed.entry(part.part_type).or_insert(0);
            *count = count.saturating_add(1);
        }

        self.0
            .iter()
            .filter_map(|(part_type, &required)| {
                let have = installed.get(part_type).copied().unwrap_or(0);
                (have < required).then(|| (*part_type, required - have))
            })
            .collect()
    }
}
