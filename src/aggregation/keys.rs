use serde::{Deserialize, Serialize};
use std::fmt;

use super::overrides::override_for;
use crate::units::{classify, MeasurementSystem};

/// Partition of an overridden count/size bucket.
///
/// `Target` entries are already in the override's unit and are only
/// relabelled; `Other` entries are generic units that get multiplied.
/// The two must never be summed before the override is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubKey {
    Target,
    Other,
}

impl SubKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubKey::Target => "target",
            SubKey::Other => "other",
        }
    }
}

impl fmt::Display for SubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse bucket key: `"{ingredient_id}-{system}"`.
pub fn aggregation_key(ingredient_id: &str, unit: &str) -> String {
    format!("{}-{}", ingredient_id, classify(unit))
}

/// Finer key for count/size entries of ingredients whose override has a size path.
///
/// `None` for every other combination; those entries are bucketed by
/// [`aggregation_key`] alone.
pub fn count_sub_key(ingredient_name: &str, unit: &str, system: MeasurementSystem) -> Option<SubKey> {
    if !matches!(system, MeasurementSystem::Count | MeasurementSystem::Size) {
        return None;
    }
    let rule = override_for(ingredient_name)?;
    rule.from_size()?;
    if rule.is_target_unit(unit) {
        Some(SubKey::Target)
    } else {
        Some(SubKey::Other)
    }
}
