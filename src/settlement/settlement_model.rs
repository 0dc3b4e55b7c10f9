use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregation::FlowDirection;
use crate::errors::ValidationError;
use crate::utils::decimal_serde::decimal_serde;

use super::settlement_errors::SettlementError;

/// Direction of a trade instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl FromStr for TradeSide {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BUY" => Ok(TradeSide::Buy),
            "SELL" => Ok(TradeSide::Sell),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown trade side: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "BUY"),
            TradeSide::Sell => write!(f, "SELL"),
        }
    }
}

impl From<TradeSide> for FlowDirection {
    fn from(side: TradeSide) -> Self {
        match side {
            TradeSide::Buy => FlowDirection::Outgoing,
            TradeSide::Sell => FlowDirection::Incoming,
        }
    }
}

/// A single buy/sell instruction supplied by the caller. Consumed exactly
/// once by the settlement engine. Time of day is irrelevant to settlement,
/// so the instructed date is a plain calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeInstruction {
    pub side: TradeSide,
    pub symbol: String,
    pub quantity: u32,
    pub instructed_date: NaiveDate,
}

impl TradeInstruction {
    pub fn new(
        side: TradeSide,
        symbol: impl Into<String>,
        quantity: u32,
        instructed_date: NaiveDate,
    ) -> Self {
        TradeInstruction {
            side,
            symbol: symbol.into(),
            quantity,
            instructed_date,
        }
    }

    /// Validates the instruction data
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()));
        }
        if self.quantity == 0 {
            return Err(ValidationError::InvalidInput(
                "Requested share quantity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// A trade the engine accepted: the applied share delta, the resolved
/// settlement date, and the USD-normalized traded value
/// (unit price x |delta| x agreed FX).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettledTrade {
    pub symbol: String,
    pub share_delta: i64,
    pub settlement_date: NaiveDate,
    #[serde(with = "decimal_serde")]
    pub usd_value: Decimal,
}

/// Per-instruction execution result: either the trade settled, or it was
/// rejected with a recoverable reason and no state was touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TradeOutcome {
    Settled(SettledTrade),
    Rejected {
        instruction: TradeInstruction,
        reason: SettlementError,
    },
}

impl TradeOutcome {
    pub fn is_settled(&self) -> bool {
        matches!(self, TradeOutcome::Settled(_))
    }
}

/// Ordered outcomes of one batch run, as supplied to `execute_all`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub outcomes: Vec<TradeOutcome>,
}

impl RunSummary {
    pub(crate) fn push(&mut self, outcome: TradeOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn settled_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_settled()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes.len() - self.settled_count()
    }

    pub fn settled(&self) -> impl Iterator<Item = &SettledTrade> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            TradeOutcome::Settled(trade) => Some(trade),
            TradeOutcome::Rejected { .. } => None,
        })
    }

    pub fn rejections(&self) -> impl Iterator<Item = (&TradeInstruction, &SettlementError)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            TradeOutcome::Settled(_) => None,
            TradeOutcome::Rejected {
                instruction,
                reason,
            } => Some((instruction, reason)),
        })
    }
}
