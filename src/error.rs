use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitValidationError {
    #[error("Unit is empty")]
    Empty,

    #[error("Unrecognized unit: '{0}'")]
    Unrecognized(String),
}
