use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::decimal_serde;

use super::instruments_errors::InstrumentError;

/// A tradeable instrument: its identifying symbol, the currency it settles
/// in, and the agreed factor converting native prices to USD.
///
/// Identity is immutable; the FX factor (and the unit price kept in the
/// catalog's price table) may be updated by price-feed collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub symbol: String,
    pub currency: String,
    #[serde(with = "decimal_serde")]
    pub agreed_fx: Decimal,
}

impl Instrument {
    pub fn new(
        symbol: impl Into<String>,
        currency: impl Into<String>,
        agreed_fx: Decimal,
    ) -> Self {
        Instrument {
            symbol: symbol.into(),
            currency: currency.into(),
            agreed_fx,
        }
    }

    /// Validates the instrument definition
    fn validate(&self) -> Result<(), InstrumentError> {
        if self.symbol.trim().is_empty() {
            return Err(InstrumentError::EmptySymbol);
        }
        if self.currency.trim().is_empty() {
            return Err(InstrumentError::MissingCurrency(self.symbol.clone()));
        }
        if !self.agreed_fx.is_sign_positive() || self.agreed_fx.is_zero() {
            return Err(InstrumentError::InvalidFxFactor {
                symbol: self.symbol.clone(),
                agreed_fx: self.agreed_fx,
            });
        }
        Ok(())
    }
}

/// Static catalog of instruments plus a separate unit-price table, both
/// supplied at initialization. Prices can be refreshed afterwards without
/// touching instrument identity.
#[derive(Debug, Clone, Default)]
pub struct InstrumentCatalog {
    instruments: HashMap<String, Instrument>,
    prices: HashMap<String, Decimal>,
}

impl InstrumentCatalog {
    /// Builds a catalog from instrument definitions and a unit-price table.
    /// Every definition is validated up front; a malformed entry is a fatal
    /// configuration error.
    pub fn try_new(
        instruments: Vec<Instrument>,
        prices: Vec<(String, Decimal)>,
    ) -> Result<Self, InstrumentError> {
        let mut catalog = InstrumentCatalog::default();
        for instrument in instruments {
            instrument.validate()?;
            if catalog.instruments.contains_key(&instrument.symbol) {
                return Err(InstrumentError::DuplicateSymbol(instrument.symbol));
            }
            debug!(
                "Registering instrument {} ({} @ fx {})",
                instrument.symbol, instrument.currency, instrument.agreed_fx
            );
            catalog
                .instruments
                .insert(instrument.symbol.clone(), instrument);
        }
        for (symbol, price) in prices {
            Self::check_price(&symbol, price)?;
            catalog.prices.insert(symbol, price);
        }
        Ok(catalog)
    }

    fn check_price(symbol: &str, price: Decimal) -> Result<(), InstrumentError> {
        if !price.is_sign_positive() || price.is_zero() {
            return Err(InstrumentError::InvalidPrice {
                symbol: symbol.to_string(),
                price,
            });
        }
        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Option<&Instrument> {
        self.instruments.get(symbol)
    }

    /// Current unit price for an instrument. A missing price entry means the
    /// catalog was built incorrectly and is reported as a fatal error.
    pub fn price_of(&self, symbol: &str) -> Result<Decimal, InstrumentError> {
        self.prices
            .get(symbol)
            .copied()
            .ok_or_else(|| InstrumentError::MissingPrice(symbol.to_string()))
    }

    /// Updates the unit price for a catalog instrument (price-feed surface).
    pub fn update_price(&mut self, symbol: &str, price: Decimal) -> Result<(), InstrumentError> {
        if !self.instruments.contains_key(symbol) {
            return Err(InstrumentError::UnknownSymbol(symbol.to_string()));
        }
        Self::check_price(symbol, price)?;
        debug!("Updating price for {}: {}", symbol, price);
        self.prices.insert(symbol.to_string(), price);
        Ok(())
    }

    /// Updates the agreed FX factor for a catalog instrument.
    pub fn update_fx(&mut self, symbol: &str, agreed_fx: Decimal) -> Result<(), InstrumentError> {
        let instrument = self
            .instruments
            .get_mut(symbol)
            .ok_or_else(|| InstrumentError::UnknownSymbol(symbol.to_string()))?;
        if !agreed_fx.is_sign_positive() || agreed_fx.is_zero() {
            return Err(InstrumentError::InvalidFxFactor {
                symbol: symbol.to_string(),
                agreed_fx,
            });
        }
        debug!("Updating agreed FX for {}: {}", symbol, agreed_fx);
        instrument.agreed_fx = agreed_fx;
        Ok(())
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.instruments.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
