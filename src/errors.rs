use thiserror::Error;

use crate::instruments::InstrumentError;
use crate::settlement::SettlementError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the settlement simulation core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog configuration error: {0}")]
    Catalog(#[from] InstrumentError),

    #[error("Settlement failed: {0}")]
    Settlement(#[from] SettlementError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}
