use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::decimal_serde;

/// Total USD value settled on one date, for one cash direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyFlow {
    pub settlement_date: NaiveDate,
    #[serde(with = "decimal_serde")]
    pub total_usd: Decimal,
}

/// One entry of a ranking: rank 1 is the highest accumulated traded value.
/// Totals are always reported positive, for both cash directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedInstrument {
    pub rank: u32,
    pub symbol: String,
    #[serde(with = "decimal_serde")]
    pub total_usd: Decimal,
}

/// Ranking of instruments by accumulated traded value, descending.
/// `default_top` marks the degenerate single-entry case, where the only
/// traded instrument takes the top rank by default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingReport {
    pub entries: Vec<RankedInstrument>,
    pub default_top: bool,
}

/// Current holdings of one instrument at report time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSnapshot {
    pub symbol: String,
    pub quantity: i64,
}

/// Plain-data settlement report: per-day USD flows, instrument rankings for
/// both cash directions, and the portfolio positions at report time.
/// Rendering (console text, JSON, ...) is a separate concern layered on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementReport {
    pub outgoing_daily: Vec<DailyFlow>,
    pub incoming_daily: Vec<DailyFlow>,
    pub outgoing_ranking: RankingReport,
    pub incoming_ranking: RankingReport,
    pub positions: Vec<PositionSnapshot>,
}
