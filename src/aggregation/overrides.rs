//! Ingredient-specific display overrides.
//!
//! After an aggregation bucket has been summed in base units, some
//! ingredients read better in a shopping unit of their own: garlic in
//! cloves, fresh herbs in bunches, butter in grams even when every recipe
//! measured it in tablespoons.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::units::converter::{round_two, DisplayQuantity};
use crate::units::MeasurementSystem;

/// One way of turning a bucket total into the override's target unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionPath {
    /// Milliliters of the ingredient per one target unit.
    Volume { ml_per_unit: f64 },
    /// Grams of the ingredient per one target unit.
    Weight { g_per_unit: f64 },
    /// Target units contained in one generic count or size unit (10 cloves per head).
    Size { units_per_item: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientOverride {
    pub to_unit: &'static str,
    pub paths: &'static [ConversionPath],
    /// Whole, at-least-one results when true; two decimals otherwise.
    pub round: bool,
}

impl IngredientOverride {
    pub fn from_volume_ml(&self) -> Option<f64> {
        self.paths.iter().find_map(|p| match p {
            ConversionPath::Volume { ml_per_unit } => Some(*ml_per_unit),
            _ => None,
        })
    }

    pub fn from_weight_g(&self) -> Option<f64> {
        self.paths.iter().find_map(|p| match p {
            ConversionPath::Weight { g_per_unit } => Some(*g_per_unit),
            _ => None,
        })
    }

    pub fn from_size(&self) -> Option<f64> {
        self.paths.iter().find_map(|p| match p {
            ConversionPath::Size { units_per_item } => Some(*units_per_item),
            _ => None,
        })
    }

    /// Whether a raw unit spelling is already the target unit.
    ///
    /// Only the bare and `s`-suffixed forms match; irregular plurals do not.
    pub fn is_target_unit(&self, unit: &str) -> bool {
        let unit = unit.trim().to_lowercase();
        unit == self.to_unit
            || unit
                .strip_suffix('s')
                .is_some_and(|singular| singular == self.to_unit)
    }
}

const fn whole(to_unit: &'static str, paths: &'static [ConversionPath]) -> IngredientOverride {
    IngredientOverride { to_unit, paths, round: true }
}

const fn continuous(to_unit: &'static str, paths: &'static [ConversionPath]) -> IngredientOverride {
    IngredientOverride { to_unit, paths, round: false }
}

use ConversionPath::{Size, Volume, Weight};

const GARLIC: IngredientOverride = whole(
    "clove",
    &[
        Size { units_per_item: 10.0 },
        Weight { g_per_unit: 5.0 },
        Volume { ml_per_unit: 4.93 },
    ],
);

const HERB_BUNCH: IngredientOverride = whole(
    "bunch",
    &[Weight { g_per_unit: 30.0 }, Volume { ml_per_unit: 236.59 }],
);

// Six pieces to a bunch. A size path's target must not have an irregular plural.
const SCALLION: IngredientOverride = whole(
    "piece",
    &[Size { units_per_item: 6.0 }, Weight { g_per_unit: 15.0 }],
);

const CELERY: IngredientOverride = whole(
    "stalk",
    &[Size { units_per_item: 8.0 }, Weight { g_per_unit: 40.0 }],
);

const EGG: IngredientOverride = whole(
    "piece",
    &[Size { units_per_item: 1.0 }, Weight { g_per_unit: 50.0 }],
);

const ONION: IngredientOverride = whole(
    "piece",
    &[Size { units_per_item: 1.0 }, Weight { g_per_unit: 150.0 }],
);

const LEMON: IngredientOverride = whole(
    "piece",
    &[Size { units_per_item: 1.0 }, Volume { ml_per_unit: 45.0 }],
);

const LIME: IngredientOverride = whole(
    "piece",
    &[Size { units_per_item: 1.0 }, Volume { ml_per_unit: 30.0 }],
);

const BUTTER: IngredientOverride = continuous(
    "g",
    &[Volume { ml_per_unit: 1.0417 }, Weight { g_per_unit: 1.0 }],
);

const GRATED_CHEESE: IngredientOverride = continuous(
    "g",
    &[Volume { ml_per_unit: 2.37 }, Weight { g_per_unit: 1.0 }],
);

static OVERRIDE_TABLE: &[(&str, IngredientOverride)] = &[
    ("garlic", GARLIC),
    ("parsley", HERB_BUNCH),
    ("flat-leaf parsley", HERB_BUNCH),
    ("cilantro", HERB_BUNCH),
    ("coriander", HERB_BUNCH),
    ("dill", HERB_BUNCH),
    ("basil", HERB_BUNCH),
    ("mint", HERB_BUNCH),
    ("spring onion", SCALLION),
    ("spring onions", SCALLION),
    ("scallion", SCALLION),
    ("scallions", SCALLION),
    ("green onion", SCALLION),
    ("green onions", SCALLION),
    ("celery", CELERY),
    ("egg", EGG),
    ("eggs", EGG),
    ("onion", ONION),
    ("onions", ONION),
    ("lemon", LEMON),
    ("lemons", LEMON),
    ("lime", LIME),
    ("limes", LIME),
    ("butter", BUTTER),
    ("unsalted butter", BUTTER),
    ("grated cheese", GRATED_CHEESE),
    ("grated parmesan", GRATED_CHEESE),
    ("parmesan", GRATED_CHEESE),
];

static OVERRIDES: LazyLock<HashMap<&'static str, &'static IngredientOverride>> =
    LazyLock::new(|| OVERRIDE_TABLE.iter().map(|(name, o)| (*name, o)).collect());

/// The override registered for an ingredient name, if any.
pub fn override_for(ingredient_name: &str) -> Option<&'static IngredientOverride> {
    OVERRIDES
        .get(ingredient_name.trim().to_lowercase().as_str())
        .copied()
}

/// Re-express an aggregated bucket total in the ingredient's shopping unit.
///
/// `base_quantity` must already be the summed base-unit total of one bucket
/// and `original_units` the raw spellings that went into it. Returns `None`
/// when the ingredient has no override or the override has no path for
/// `system`; the caller then falls back to [`crate::units::from_base`].
pub fn apply_override<S: AsRef<str>>(
    ingredient_name: &str,
    base_quantity: f64,
    system: MeasurementSystem,
    original_units: &[S],
) -> Option<DisplayQuantity> {
    let rule = override_for(ingredient_name)?;

    let raw = match system {
        MeasurementSystem::Volume => {
            let Some(ml_per_unit) = rule.from_volume_ml() else {
                tracing::debug!(ingredient_name, %system, "override has no volume path");
                return None;
            };
            base_quantity / ml_per_unit
        }
        MeasurementSystem::Weight => {
            let Some(g_per_unit) = rule.from_weight_g() else {
                tracing::debug!(ingredient_name, %system, "override has no weight path");
                return None;
            };
            base_quantity / g_per_unit
        }
        MeasurementSystem::Count | MeasurementSystem::Size => match rule.from_size() {
            Some(units_per_item)
                if !original_units
                    .iter()
                    .all(|unit| rule.is_target_unit(unit.as_ref())) =>
            {
                base_quantity * units_per_item
            }
            _ => base_quantity,
        },
        MeasurementSystem::SmallQuantity | MeasurementSystem::Package | MeasurementSystem::Unknown => {
            tracing::debug!(ingredient_name, %system, "override does not apply to system");
            return None;
        }
    };

    let quantity = if rule.round {
        raw.round().max(1.0)
    } else {
        round_two(raw)
    };

    Some(DisplayQuantity {
        quantity,
        unit: rule.to_unit.to_string(),
    })
}
