//! Closed table of recognised unit spellings.
//!
//! Every spelling maps to exactly one measurement system and a factor that
//! converts one unit of that spelling into the system's base unit. Only
//! weight (grams) and volume (milliliters) carry real factors; every other
//! system groups spellings without defining arithmetic between them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementSystem {
    Weight,
    Volume,
    Count,
    SmallQuantity,
    Size,
    Package,
    Unknown,
}

impl MeasurementSystem {
    pub const ALL: [MeasurementSystem; 7] = [
        MeasurementSystem::Weight,
        MeasurementSystem::Volume,
        MeasurementSystem::Count,
        MeasurementSystem::SmallQuantity,
        MeasurementSystem::Size,
        MeasurementSystem::Package,
        MeasurementSystem::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementSystem::Weight => "weight",
            MeasurementSystem::Volume => "volume",
            MeasurementSystem::Count => "count",
            MeasurementSystem::SmallQuantity => "small_quantity",
            MeasurementSystem::Size => "size",
            MeasurementSystem::Package => "package",
            MeasurementSystem::Unknown => "unknown",
        }
    }

    /// Whether quantities in this system can be converted arithmetically
    /// between member units.
    pub fn is_convertible(&self) -> bool {
        matches!(self, MeasurementSystem::Weight | MeasurementSystem::Volume)
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unit every same-system quantity is summed in.
pub fn base_unit(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Weight => "g",
        MeasurementSystem::Volume => "ml",
        MeasurementSystem::Count => "piece",
        MeasurementSystem::SmallQuantity => "pinch",
        MeasurementSystem::Size => "medium",
        MeasurementSystem::Package => "pack",
        MeasurementSystem::Unknown => "unknown",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitEntry {
    pub system: MeasurementSystem,
    /// Multiplier into the system's base unit. Always 1 for grouping-only systems.
    pub factor: f64,
}

const fn weight(factor: f64) -> UnitEntry {
    UnitEntry { system: MeasurementSystem::Weight, factor }
}

const fn volume(factor: f64) -> UnitEntry {
    UnitEntry { system: MeasurementSystem::Volume, factor }
}

const fn grouped(system: MeasurementSystem) -> UnitEntry {
    UnitEntry { system, factor: 1.0 }
}

pub const GRAMS_PER_MG: f64 = 0.001;
pub const GRAMS_PER_KG: f64 = 1000.0;
pub const GRAMS_PER_OZ: f64 = 28.35;
pub const GRAMS_PER_LB: f64 = 453.59;

pub const ML_PER_L: f64 = 1000.0;
pub const ML_PER_DL: f64 = 100.0;
pub const ML_PER_CL: f64 = 10.0;
pub const ML_PER_TSP: f64 = 4.93;
pub const ML_PER_TBSP: f64 = 14.79;
pub const ML_PER_FL_OZ: f64 = 29.57;
pub const ML_PER_CUP: f64 = 236.59;
pub const ML_PER_PINT: f64 = 473.18;
pub const ML_PER_QUART: f64 = 946.35;
pub const ML_PER_GALLON: f64 = 3785.41;

use MeasurementSystem::{Count, Package, Size, SmallQuantity};

/// Every recognised spelling, lowercase. Synonyms repeat the same entry.
static UNIT_TABLE: &[(&str, UnitEntry)] = &[
    // Weight
    ("mg", weight(GRAMS_PER_MG)),
    ("milligram", weight(GRAMS_PER_MG)),
    ("milligrams", weight(GRAMS_PER_MG)),
    ("g", weight(1.0)),
    ("gram", weight(1.0)),
    ("grams", weight(1.0)),
    ("gramme", weight(1.0)),
    ("grammes", weight(1.0)),
    ("kg", weight(GRAMS_PER_KG)),
    ("kilo", weight(GRAMS_PER_KG)),
    ("kilos", weight(GRAMS_PER_KG)),
    ("kilogram", weight(GRAMS_PER_KG)),
    ("kilograms", weight(GRAMS_PER_KG)),
    ("oz", weight(GRAMS_PER_OZ)),
    ("ounce", weight(GRAMS_PER_OZ)),
    ("ounces", weight(GRAMS_PER_OZ)),
    ("lb", weight(GRAMS_PER_LB)),
    ("lbs", weight(GRAMS_PER_LB)),
    ("pound", weight(GRAMS_PER_LB)),
    ("pounds", weight(GRAMS_PER_LB)),
    // Volume
    ("ml", volume(1.0)),
    ("milliliter", volume(1.0)),
    ("milliliters", volume(1.0)),
    ("millilitre", volume(1.0)),
    ("millilitres", volume(1.0)),
    ("cl", volume(ML_PER_CL)),
    ("centiliter", volume(ML_PER_CL)),
    ("centiliters", volume(ML_PER_CL)),
    ("dl", volume(ML_PER_DL)),
    ("deciliter", volume(ML_PER_DL)),
    ("deciliters", volume(ML_PER_DL)),
    ("l", volume(ML_PER_L)),
    ("liter", volume(ML_PER_L)),
    ("liters", volume(ML_PER_L)),
    ("litre", volume(ML_PER_L)),
    ("litres", volume(ML_PER_L)),
    ("tsp", volume(ML_PER_TSP)),
    ("teaspoon", volume(ML_PER_TSP)),
    ("teaspoons", volume(ML_PER_TSP)),
    ("tbsp", volume(ML_PER_TBSP)),
    ("tablespoon", volume(ML_PER_TBSP)),
    ("tablespoons", volume(ML_PER_TBSP)),
    ("fl oz", volume(ML_PER_FL_OZ)),
    ("fluid ounce", volume(ML_PER_FL_OZ)),
    ("fluid ounces", volume(ML_PER_FL_OZ)),
    ("cup", volume(ML_PER_CUP)),
    ("cups", volume(ML_PER_CUP)),
    ("pint", volume(ML_PER_PINT)),
    ("pints", volume(ML_PER_PINT)),
    ("quart", volume(ML_PER_QUART)),
    ("quarts", volume(ML_PER_QUART)),
    ("gallon", volume(ML_PER_GALLON)),
    ("gallons", volume(ML_PER_GALLON)),
    // Count
    ("piece", grouped(Count)),
    ("pieces", grouped(Count)),
    ("pc", grouped(Count)),
    ("pcs", grouped(Count)),
    ("whole", grouped(Count)),
    ("item", grouped(Count)),
    ("items", grouped(Count)),
    ("clove", grouped(Count)),
    ("cloves", grouped(Count)),
    ("head", grouped(Count)),
    ("heads", grouped(Count)),
    ("bulb", grouped(Count)),
    ("bulbs", grouped(Count)),
    ("bunch", grouped(Count)),
    ("bunches", grouped(Count)),
    ("sprig", grouped(Count)),
    ("sprigs", grouped(Count)),
    ("stalk", grouped(Count)),
    ("stalks", grouped(Count)),
    ("slice", grouped(Count)),
    ("slices", grouped(Count)),
    ("leaf", grouped(Count)),
    ("leaves", grouped(Count)),
    // Small quantities
    ("pinch", grouped(SmallQuantity)),
    ("pinches", grouped(SmallQuantity)),
    ("dash", grouped(SmallQuantity)),
    ("dashes", grouped(SmallQuantity)),
    ("drop", grouped(SmallQuantity)),
    ("drops", grouped(SmallQuantity)),
    ("splash", grouped(SmallQuantity)),
    ("to taste", grouped(SmallQuantity)),
    // Sizes
    ("small", grouped(Size)),
    ("medium", grouped(Size)),
    ("large", grouped(Size)),
    ("extra large", grouped(Size)),
    // Packages
    ("pack", grouped(Package)),
    ("packs", grouped(Package)),
    ("package", grouped(Package)),
    ("packages", grouped(Package)),
    ("can", grouped(Package)),
    ("cans", grouped(Package)),
    ("tin", grouped(Package)),
    ("tins", grouped(Package)),
    ("jar", grouped(Package)),
    ("jars", grouped(Package)),
    ("bottle", grouped(Package)),
    ("bottles", grouped(Package)),
    ("box", grouped(Package)),
    ("boxes", grouped(Package)),
    ("bag", grouped(Package)),
    ("bags", grouped(Package)),
];

static UNITS: LazyLock<HashMap<&'static str, UnitEntry>> =
    LazyLock::new(|| UNIT_TABLE.iter().copied().collect());

/// Normalise a unit spelling for lookup: trimmed and lowercased.
pub fn normalize_unit(unit: &str) -> String {
    unit.trim().to_lowercase()
}

/// Look up a spelling in the catalog.
pub fn lookup(unit: &str) -> Option<UnitEntry> {
    UNITS.get(normalize_unit(unit).as_str()).copied()
}

/// Classify a unit spelling. Unrecognised spellings are `Unknown`, never an error.
pub fn classify(unit: &str) -> MeasurementSystem {
    lookup(unit)
        .map(|entry| entry.system)
        .unwrap_or(MeasurementSystem::Unknown)
}

/// All recognised spellings in sorted order.
pub fn supported_units() -> impl Iterator<Item = &'static str> {
    let mut spellings: Vec<&'static str> = UNIT_TABLE.iter().map(|(s, _)| *s).collect();
    spellings.sort_unstable();
    spellings.into_iter()
}
