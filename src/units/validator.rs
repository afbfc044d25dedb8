//! Write-time unit validation for recipe input.
//!
//! The catalog itself stays permissive (unknown spellings classify as
//! `Unknown`); this gate is what keeps new recipe data inside the catalog.

use super::catalog::{lookup, UnitEntry};
use crate::error::UnitValidationError;

/// Whether `unit` is a catalogued spelling.
pub fn is_valid_unit(unit: &str) -> bool {
    lookup(unit).is_some()
}

/// Like [`is_valid_unit`], but returns the matching entry or the reason for rejection.
pub fn validate_unit(unit: &str) -> Result<UnitEntry, UnitValidationError> {
    if unit.trim().is_empty() {
        return Err(UnitValidationError::Empty);
    }
    lookup(unit).ok_or_else(|| UnitValidationError::Unrecognized(unit.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::catalog::{supported_units, MeasurementSystem};

    #[test]
    fn test_every_catalogued_spelling_is_valid() {
        for unit in supported_units() {
            assert!(is_valid_unit(unit), "'{}' should be valid", unit);
            assert!(is_valid_unit(&unit.to_uppercase()));
        }
    }

    #[test]
    fn test_rejects_unknown_spellings() {
        assert!(!is_valid_unit("bogus-unit"));
        assert!(!is_valid_unit("handful"));
        assert!(!is_valid_unit(""));
    }

    #[test]
    fn test_validate_unit_returns_entry() {
        let entry = validate_unit(" Cups ").unwrap();
        assert_eq!(entry.system, MeasurementSystem::Volume);
        assert_eq!(entry.factor, 236.59);
    }

    #[test]
    fn test_validate_unit_errors() {
        assert_eq!(validate_unit("   "), Err(UnitValidationError::Empty));
        assert_eq!(
            validate_unit(" handful "),
            Err(UnitValidationError::Unrecognized("handful".to_string()))
        );
        assert_eq!(
            validate_unit("handful").unwrap_err().to_string(),
            "Unrecognized unit: 'handful'"
        );
    }
}
