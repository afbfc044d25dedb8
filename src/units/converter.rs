//! Conversion between arbitrary units, base units and a metric display unit.

use serde::{Deserialize, Serialize};

use super::catalog::{classify, lookup, MeasurementSystem, GRAMS_PER_KG, GRAMS_PER_MG, ML_PER_L};

/// A quantity expressed in its system's base unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseQuantity {
    pub quantity: f64,
    pub system: MeasurementSystem,
    pub original_unit: String,
}

/// A quantity ready to be shown on a shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayQuantity {
    pub quantity: f64,
    pub unit: String,
}

struct DisplayThreshold {
    unit: &'static str,
    factor: f64,
    min: f64,
}

// Largest first. The last entry of each list is the fallback.
const WEIGHT_THRESHOLDS: &[DisplayThreshold] = &[
    DisplayThreshold { unit: "kg", factor: GRAMS_PER_KG, min: 1.0 },
    DisplayThreshold { unit: "g", factor: 1.0, min: 1.0 },
    DisplayThreshold { unit: "mg", factor: GRAMS_PER_MG, min: 0.0 },
];

const VOLUME_THRESHOLDS: &[DisplayThreshold] = &[
    DisplayThreshold { unit: "l", factor: ML_PER_L, min: 1.0 },
    DisplayThreshold { unit: "ml", factor: 1.0, min: 0.0 },
];

pub fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert `quantity` of `unit` into its system's base unit.
///
/// Unrecognised units pass through unchanged with system `Unknown`.
pub fn to_base(quantity: f64, unit: &str) -> BaseQuantity {
    match lookup(unit) {
        Some(entry) => BaseQuantity {
            quantity: quantity * entry.factor,
            system: entry.system,
            original_unit: unit.to_string(),
        },
        None => {
            tracing::debug!(unit, "unrecognised unit, passing quantity through");
            BaseQuantity {
                quantity,
                system: MeasurementSystem::Unknown,
                original_unit: unit.to_string(),
            }
        }
    }
}

/// Express a base-unit quantity in a practical display unit.
///
/// Weight and volume pick the largest metric unit whose converted value
/// reaches its threshold. Grouping-only systems keep `original_unit`.
/// Quantities are rounded to two decimals either way.
pub fn from_base(quantity: f64, system: MeasurementSystem, original_unit: &str) -> DisplayQuantity {
    let thresholds = match system {
        MeasurementSystem::Weight => WEIGHT_THRESHOLDS,
        MeasurementSystem::Volume => VOLUME_THRESHOLDS,
        MeasurementSystem::Count
        | MeasurementSystem::SmallQuantity
        | MeasurementSystem::Size
        | MeasurementSystem::Package
        | MeasurementSystem::Unknown => {
            return DisplayQuantity {
                quantity: round_two(quantity),
                unit: original_unit.to_string(),
            };
        }
    };

    let chosen = thresholds
        .iter()
        .find(|t| quantity / t.factor >= t.min)
        .or_else(|| thresholds.last());

    match chosen {
        Some(t) => DisplayQuantity {
            quantity: round_two(quantity / t.factor),
            unit: t.unit.to_string(),
        },
        None => DisplayQuantity {
            quantity: round_two(quantity),
            unit: original_unit.to_string(),
        },
    }
}

/// Whether two raw quantities may be summed directly.
pub fn can_combine(unit_a: &str, unit_b: &str) -> bool {
    let a = classify(unit_a);
    a != MeasurementSystem::Unknown && a == classify(unit_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_to_base_weight_and_volume() {
        let oz = to_base(15.0, "oz");
        assert_close(oz.quantity, 425.25);
        assert_eq!(oz.system, MeasurementSystem::Weight);
        assert_eq!(oz.original_unit, "oz");

        let tbsp = to_base(3.0, "Tbsp");
        assert_close(tbsp.quantity, 44.37);
        assert_eq!(tbsp.system, MeasurementSystem::Volume);
        assert_eq!(tbsp.original_unit, "Tbsp");
    }

    #[test]
    fn test_to_base_grouping_only_keeps_quantity() {
        let cloves = to_base(4.0, "clove");
        assert_eq!(cloves.quantity, 4.0);
        assert_eq!(cloves.system, MeasurementSystem::Count);
    }

    #[test]
    fn test_to_base_unknown_passes_through() {
        let result = to_base(2.5, "handful");
        assert_eq!(
            result,
            BaseQuantity {
                quantity: 2.5,
                system: MeasurementSystem::Unknown,
                original_unit: "handful".to_string(),
            }
        );
    }

    #[test]
    fn test_from_base_weight_thresholds() {
        assert_eq!(from_base(999.0, MeasurementSystem::Weight, "g").unit, "g");
        let kg = from_base(1000.0, MeasurementSystem::Weight, "g");
        assert_eq!(kg.unit, "kg");
        assert_eq!(kg.quantity, 1.0);
        let mg = from_base(0.25, MeasurementSystem::Weight, "g");
        assert_eq!(mg.unit, "mg");
        assert_eq!(mg.quantity, 250.0);
    }

    #[test]
    fn test_from_base_always_metric() {
        let result = from_base(453.59, MeasurementSystem::Weight, "lb");
        assert_eq!(result.unit, "g");
        assert_eq!(result.quantity, 453.59);
    }

    #[test]
    fn test_from_base_volume_thresholds() {
        let ml = from_base(999.99, MeasurementSystem::Volume, "cup");
        assert_eq!(ml, DisplayQuantity { quantity: 999.99, unit: "ml".to_string() });
        let l = from_base(1500.0, MeasurementSystem::Volume, "ml");
        assert_eq!(l, DisplayQuantity { quantity: 1.5, unit: "l".to_string() });
    }

    #[test]
    fn test_from_base_rounding_cross_unit_weight() {
        let total = to_base(600.0, "g").quantity + to_base(15.0, "oz").quantity;
        assert_close(total, 1025.25);
        let result = from_base(total, MeasurementSystem::Weight, "g");
        assert_eq!(result, DisplayQuantity { quantity: 1.03, unit: "kg".to_string() });
    }

    #[test]
    fn test_from_base_grouping_only_keeps_label() {
        let result = from_base(3.333, MeasurementSystem::Count, "clove");
        assert_eq!(result, DisplayQuantity { quantity: 3.33, unit: "clove".to_string() });
        let result = from_base(2.0, MeasurementSystem::Unknown, "handful");
        assert_eq!(result.unit, "handful");
        let result = from_base(1.0, MeasurementSystem::Package, "can");
        assert_eq!(result.unit, "can");
    }

    #[test]
    fn test_from_base_large_and_tiny_totals_keep_two_decimals() {
        let big = from_base(50_000.0, MeasurementSystem::Weight, "g");
        assert_eq!(big, DisplayQuantity { quantity: 50.0, unit: "kg".to_string() });
        let tiny = from_base(0.000001, MeasurementSystem::Weight, "g");
        assert_eq!(tiny, DisplayQuantity { quantity: 0.0, unit: "mg".to_string() });
    }

    #[test]
    fn test_from_base_negative_falls_back_to_smallest_unit() {
        let result = from_base(-5.0, MeasurementSystem::Volume, "ml");
        assert_eq!(result.unit, "ml");
        assert_eq!(result.quantity, -5.0);
    }

    #[test]
    fn test_can_combine() {
        assert!(can_combine("g", "kg"));
        assert!(can_combine("cup", "TBSP"));
        assert!(can_combine("clove", "head"));
        assert!(!can_combine("g", "ml"));
        assert!(!can_combine("xyz", "g"));
        assert!(!can_combine("xyz", "xyz"));
    }
}
