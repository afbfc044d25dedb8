pub mod aggregation;
pub mod cli;
pub mod entry_loader;
pub mod error;
pub mod shopping_list;
pub mod units;

pub use aggregation::{aggregation_key, apply_override, count_sub_key, SubKey};
pub use error::UnitValidationError;
pub use units::{
    can_combine, classify, from_base, is_valid_unit, to_base, validate_unit, BaseQuantity,
    DisplayQuantity, MeasurementSystem,
};
