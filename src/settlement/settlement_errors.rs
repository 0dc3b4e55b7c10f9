use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-instruction settlement failures. These reject a single trade with a
/// user-visible notice; the batch keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SettlementError {
    #[error("Cannot sell {requested} shares of '{symbol}': only {held} held")]
    InvalidSellQuantity {
        symbol: String,
        requested: u32,
        held: i64,
    },

    #[error("Referenced instrument '{symbol}' does not exist")]
    UnknownInstrument { symbol: String },

    #[error("Malformed trade instruction: {message}")]
    InvalidInstruction { message: String },
}
