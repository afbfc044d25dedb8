//! Reference caller for the unit core: turns raw `(ingredient, quantity, unit)`
//! entries into one shopping line per aggregation bucket.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::aggregation::{aggregation_key, apply_override, count_sub_key, SubKey};
use crate::units::converter::round_two;
use crate::units::{base_unit, classify, from_base, to_base, MeasurementSystem};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawEntry {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
}

impl RawEntry {
    pub fn new(ingredient: &str, quantity: f64, unit: &str) -> Self {
        Self {
            ingredient: ingredient.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShoppingLine {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
    pub system: MeasurementSystem,
    /// How many raw entries were folded into this line.
    pub source_entries: usize,
}

#[derive(Debug, Clone)]
pub struct AggregationOptions {
    /// Sum lines of one ingredient that resolved through its override to the
    /// same unit (4 cloves + 1 head becomes 14 cloves). Summing only ever
    /// happens on resolved override output, never on raw bucket totals.
    pub combine_override_totals: bool,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            combine_override_totals: true,
        }
    }
}

#[derive(Debug)]
struct Bucket {
    ingredient: String,
    system: MeasurementSystem,
    sub_key: Option<SubKey>,
    total: f64,
    original_units: Vec<String>,
}

#[derive(Debug)]
struct ResolvedBucket {
    line: ShoppingLine,
    via_override: bool,
}

fn normalize_ingredient(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Bucket, sum and resolve raw entries into shopping lines.
///
/// Entries in an unrecognised unit are never combined with anything and come
/// out as their own line, quantity and unit untouched apart from rounding.
pub fn aggregate_entries(entries: &[RawEntry], options: &AggregationOptions) -> Vec<ShoppingLine> {
    let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let ingredient = normalize_ingredient(&entry.ingredient);
        let base = to_base(entry.quantity, &entry.unit);
        let sub_key = count_sub_key(&ingredient, &entry.unit, base.system);

        let mut key = aggregation_key(&ingredient, &entry.unit);
        if base.system == MeasurementSystem::Unknown {
            key.push_str(&format!("#{:08}", index));
        }
        if let Some(sub_key) = sub_key {
            key.push('-');
            key.push_str(sub_key.as_str());
        }

        let bucket = buckets.entry(key).or_insert_with(|| Bucket {
            ingredient: ingredient.clone(),
            system: base.system,
            sub_key,
            total: 0.0,
            original_units: Vec::new(),
        });
        bucket.total += base.quantity;
        bucket.original_units.push(base.original_unit.trim().to_string());
    }

    tracing::debug!(
        entries = entries.len(),
        buckets = buckets.len(),
        "bucketed raw entries"
    );

    let resolved: Vec<ResolvedBucket> = buckets
        .into_values()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(resolve_bucket)
        .collect();

    let mut lines = if options.combine_override_totals {
        combine_override_totals(resolved)
    } else {
        resolved.into_iter().map(|r| r.line).collect()
    };

    lines.sort_by(|a, b| {
        a.ingredient
            .cmp(&b.ingredient)
            .then(a.system.cmp(&b.system))
            .then_with(|| a.unit.cmp(&b.unit))
    });

    tracing::info!(
        entries = entries.len(),
        lines = lines.len(),
        "aggregated shopping list"
    );
    lines
}

/// Resolve one summed bucket: the override if there is one for this
/// ingredient and system, the generic metric display otherwise.
fn resolve_bucket(bucket: Bucket) -> ResolvedBucket {
    let overridden = apply_override(
        &bucket.ingredient,
        bucket.total,
        bucket.system,
        &bucket.original_units,
    );
    let via_override = overridden.is_some();

    let display = overridden.unwrap_or_else(|| {
        let label = bucket
            .original_units
            .first()
            .map(String::as_str)
            .unwrap_or_else(|| base_unit(bucket.system));
        from_base(bucket.total, bucket.system, label)
    });

    tracing::trace!(
        ingredient = %bucket.ingredient,
        system = %bucket.system,
        sub_key = ?bucket.sub_key,
        total = bucket.total,
        via_override,
        "resolved bucket"
    );

    ResolvedBucket {
        line: ShoppingLine {
            ingredient: bucket.ingredient,
            quantity: display.quantity,
            unit: display.unit,
            system: bucket.system,
            source_entries: bucket.original_units.len(),
        },
        via_override,
    }
}

fn combine_override_totals(resolved: Vec<ResolvedBucket>) -> Vec<ShoppingLine> {
    let mut combined: Vec<ShoppingLine> = Vec::with_capacity(resolved.len());
    let mut merged_at: HashMap<(String, String), usize> = HashMap::new();

    for bucket in resolved {
        if !bucket.via_override {
            combined.push(bucket.line);
            continue;
        }
        let key = (bucket.line.ingredient.clone(), bucket.line.unit.clone());
        match merged_at.get(&key) {
            Some(&idx) => {
                let existing = &mut combined[idx];
                existing.quantity = round_two(existing.quantity + bucket.line.quantity);
                existing.source_entries += bucket.line.source_entries;
                if existing.system != bucket.line.system {
                    // Mixed origins: report the system of the shared display unit.
                    existing.system = classify(&existing.unit);
                }
            }
            None => {
                merged_at.insert(key, combined.len());
                combined.push(bucket.line);
            }
        }
    }
    combined
}
