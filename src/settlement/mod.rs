pub mod settlement_engine;
pub mod settlement_errors;
pub mod settlement_model;

pub use settlement_engine::SettlementEngine;
pub use settlement_errors::SettlementError;
pub use settlement_model::{
    RunSummary, SettledTrade, TradeInstruction, TradeOutcome, TradeSide,
};
