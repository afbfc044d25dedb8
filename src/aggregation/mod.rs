pub mod keys;
pub mod overrides;

pub use keys::{aggregation_key, count_sub_key, SubKey};
pub use overrides::{apply_override, override_for, ConversionPath, IngredientOverride};
