use rust_decimal::Decimal;
use thiserror::Error;

/// Catalog configuration errors. These indicate the catalog was built or
/// updated incorrectly and are fatal: they propagate to the caller instead
/// of being skipped like per-trade rejections.
#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("No unit price configured for instrument '{0}'")]
    MissingPrice(String),

    #[error("No settlement currency configured for instrument '{0}'")]
    MissingCurrency(String),

    #[error("Agreed FX factor for instrument '{symbol}' must be positive, got {agreed_fx}")]
    InvalidFxFactor { symbol: String, agreed_fx: Decimal },

    #[error("Unit price for instrument '{symbol}' must be positive, got {price}")]
    InvalidPrice { symbol: String, price: Decimal },

    #[error("Instrument symbol cannot be empty")]
    EmptySymbol,

    #[error("Duplicate instrument symbol '{0}' in catalog")]
    DuplicateSymbol(String),

    #[error("Instrument '{0}' is not part of the catalog")]
    UnknownSymbol(String),
}
