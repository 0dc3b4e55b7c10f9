use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::aggregation::AggregationStore;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::portfolio::PortfolioLedger;

use super::reporting_model::{
    DailyFlow, PositionSnapshot, RankedInstrument, RankingReport, SettlementReport,
};

const EMPTY_CATEGORY_MARKER: &str = "** No trading done in this category **";
const SECTION_RULE: &str =
    "--------------------------------------------------------------------------------";

/// Builds the settlement report from the aggregation buckets and the current
/// portfolio. Read-only pass: neither input is mutated.
pub fn generate_report(
    aggregation: &AggregationStore,
    ledger: &PortfolioLedger,
) -> SettlementReport {
    debug!("Generating settlement report");

    let mut positions: Vec<PositionSnapshot> = ledger
        .positions()
        .map(|(symbol, quantity)| PositionSnapshot {
            symbol: symbol.to_string(),
            quantity,
        })
        .collect();
    positions.sort_by(|a, b| a.symbol.cmp(&b.symbol));

    SettlementReport {
        outgoing_daily: daily_flows(aggregation.outgoing_by_date()),
        incoming_daily: daily_flows(aggregation.incoming_by_date()),
        outgoing_ranking: build_ranking(aggregation.outgoing_rank(), false),
        // Incoming rank values are held negative internally; negate back to
        // positive for reporting.
        incoming_ranking: build_ranking(aggregation.incoming_rank(), true),
        positions,
    }
}

fn daily_flows(bucket: &BTreeMap<NaiveDate, Decimal>) -> Vec<DailyFlow> {
    bucket
        .iter()
        .map(|(settlement_date, total_usd)| DailyFlow {
            settlement_date: *settlement_date,
            total_usd: *total_usd,
        })
        .collect()
}

fn build_ranking(bucket: &HashMap<String, Decimal>, negate: bool) -> RankingReport {
    let mut totals: Vec<(String, Decimal)> = bucket
        .iter()
        .map(|(symbol, value)| (symbol.clone(), if negate { -*value } else { *value }))
        .collect();
    // Descending by traded value; ties broken by symbol ascending so the
    // ordering is deterministic.
    totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let default_top = totals.len() == 1;
    let entries = totals
        .into_iter()
        .enumerate()
        .map(|(index, (symbol, total_usd))| RankedInstrument {
            rank: index as u32 + 1,
            symbol,
            total_usd,
        })
        .collect();

    RankingReport {
        entries,
        default_top,
    }
}

/// Renders the report as console text in the classic layout: per-day flow
/// sections, entity rankings, and the current portfolio.
pub fn render_text(report: &SettlementReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Amount in USD settled outgoing everyday");
    let _ = writeln!(out, "{}", SECTION_RULE);
    render_daily(&mut out, &report.outgoing_daily, "outflown", "+");
    let _ = writeln!(out, "{}", SECTION_RULE);

    let _ = writeln!(out, "Amount in USD settled incoming everyday");
    let _ = writeln!(out, "{}", SECTION_RULE);
    render_daily(&mut out, &report.incoming_daily, "incoming", "-");
    let _ = writeln!(out, "{}", SECTION_RULE);

    let _ = writeln!(out, "Entity ranking outgoing (BUY):");
    let _ = writeln!(out, "{}", SECTION_RULE);
    render_ranking(&mut out, &report.outgoing_ranking);
    let _ = writeln!(out, "{}", SECTION_RULE);

    let _ = writeln!(out, "Entity ranking incoming (SELL):");
    let _ = writeln!(out, "{}", SECTION_RULE);
    render_ranking(&mut out, &report.incoming_ranking);
    let _ = writeln!(out, "{}", SECTION_RULE);

    let _ = writeln!(out, "Portfolio holdings:");
    let _ = writeln!(out, "{}", SECTION_RULE);
    for position in &report.positions {
        let _ = writeln!(
            out,
            "Stock: {} | Current holdings: {}",
            position.symbol, position.quantity
        );
    }

    out
}

fn render_daily(out: &mut String, flows: &[DailyFlow], label: &str, sign: &str) {
    if flows.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_CATEGORY_MARKER);
        return;
    }
    for flow in flows {
        let _ = writeln!(
            out,
            "Date trade settled: {} | Total amount {} in USD: {} ({})",
            flow.settlement_date,
            label,
            flow.total_usd.round_dp(DISPLAY_DECIMAL_PRECISION),
            sign
        );
    }
}

fn render_ranking(out: &mut String, ranking: &RankingReport) {
    if ranking.entries.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_CATEGORY_MARKER);
        return;
    }
    if ranking.default_top {
        let _ = writeln!(
            out,
            "Only one entity traded in this category, defaulted to top rank"
        );
    }
    for entry in &ranking.entries {
        let _ = writeln!(
            out,
            "Rank: {} | Entity: {} | Total traded amount in USD: {}",
            entry.rank,
            entry.symbol,
            entry.total_usd.round_dp(DISPLAY_DECIMAL_PRECISION)
        );
    }
}
