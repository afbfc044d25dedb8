pub mod catalog;
pub mod converter;
pub mod validator;

pub use catalog::{base_unit, classify, lookup, supported_units, MeasurementSystem, UnitEntry};
pub use converter::{can_combine, from_base, to_base, BaseQuantity, DisplayQuantity};
pub use validator::{is_valid_unit, validate_unit};
