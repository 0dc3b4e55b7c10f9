use log::{debug, info, warn};
use rust_decimal::Decimal;

use crate::aggregation::{AggregationStore, FlowDirection};
use crate::calendar::next_eligible_date;
use crate::errors::Result;
use crate::instruments::InstrumentCatalog;
use crate::portfolio::PortfolioLedger;

use super::settlement_errors::SettlementError;
use super::settlement_model::{
    RunSummary, SettledTrade, TradeInstruction, TradeOutcome, TradeSide,
};

/// Executes trade instructions against the portfolio: validates each
/// instruction, resolves its settlement date under the currency's business
/// day rule, applies the share delta to the ledger, and records the
/// USD-normalized traded value for reporting.
///
/// The engine holds exclusive mutation rights over the ledger and the
/// aggregation store; collaborators read them through the accessors.
/// Instructions are applied strictly one at a time, in input order.
pub struct SettlementEngine {
    catalog: InstrumentCatalog,
    ledger: PortfolioLedger,
    aggregation: AggregationStore,
}

impl SettlementEngine {
    /// Creates an engine over a catalog and an initial portfolio.
    pub fn new(catalog: InstrumentCatalog, ledger: PortfolioLedger) -> Self {
        SettlementEngine {
            catalog,
            ledger,
            aggregation: AggregationStore::new(),
        }
    }

    pub fn catalog(&self) -> &InstrumentCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &PortfolioLedger {
        &self.ledger
    }

    pub fn aggregation(&self) -> &AggregationStore {
        &self.aggregation
    }

    /// Mutable catalog access for price-feed collaborators. Prices and FX
    /// factors may change between trades; instrument identity may not.
    pub fn catalog_mut(&mut self) -> &mut InstrumentCatalog {
        &mut self.catalog
    }

    /// Executes a single instruction.
    ///
    /// Recoverable problems (unknown instrument, overselling, malformed
    /// instruction) come back as `Ok(TradeOutcome::Rejected { .. })` with a
    /// warn-level notice, leaving ledger and aggregation untouched. Catalog
    /// configuration errors (a missing price) are fatal and propagate.
    pub fn execute(&mut self, instruction: TradeInstruction) -> Result<TradeOutcome> {
        if let Err(err) = instruction.validate() {
            warn!("Skipping malformed trade instruction: {}", err);
            let reason = SettlementError::InvalidInstruction {
                message: err.to_string(),
            };
            return Ok(TradeOutcome::Rejected {
                instruction,
                reason,
            });
        }

        debug!(
            "Executing {} {} x{} instructed for {}",
            instruction.side, instruction.symbol, instruction.quantity,
            instruction.instructed_date
        );

        // Clone the definition so the catalog borrow ends before mutation.
        let instrument = match self.catalog.get(&instruction.symbol) {
            Some(instrument) => instrument.clone(),
            None => {
                warn!(
                    "Skipping trade: instrument '{}' does not exist",
                    instruction.symbol
                );
                let reason = SettlementError::UnknownInstrument {
                    symbol: instruction.symbol.clone(),
                };
                return Ok(TradeOutcome::Rejected {
                    instruction,
                    reason,
                });
            }
        };

        let held = self.ledger.quantity_of(&instruction.symbol);
        if instruction.side == TradeSide::Sell && i64::from(instruction.quantity) > held {
            warn!(
                "Cannot sell more than what is held: {} shares of '{}' held, trying to sell {}",
                held, instruction.symbol, instruction.quantity
            );
            let reason = SettlementError::InvalidSellQuantity {
                symbol: instruction.symbol.clone(),
                requested: instruction.quantity,
                held,
            };
            return Ok(TradeOutcome::Rejected {
                instruction,
                reason,
            });
        }

        let settlement_date =
            next_eligible_date(instruction.instructed_date, &instrument.currency);
        if settlement_date != instruction.instructed_date {
            debug!(
                "Instructed date {} is a non-trading day for {}; settling on {}",
                instruction.instructed_date, instrument.currency, settlement_date
            );
        }

        // A catalog entry without a price is a configuration error, checked
        // before any state is mutated.
        let price = self.catalog.price_of(&instruction.symbol)?;

        let share_delta = match instruction.side {
            TradeSide::Buy => i64::from(instruction.quantity),
            TradeSide::Sell => -i64::from(instruction.quantity),
        };
        let new_total = self.ledger.apply_delta(&instruction.symbol, share_delta);

        let usd_value = price * Decimal::from(instruction.quantity) * instrument.agreed_fx;
        self.aggregation.record(
            FlowDirection::from(instruction.side),
            settlement_date,
            &instruction.symbol,
            usd_value,
        );

        info!(
            "Settled {} {} x{} on {}: {} USD, holdings now {}",
            instruction.side, instruction.symbol, instruction.quantity, settlement_date,
            usd_value, new_total
        );

        Ok(TradeOutcome::Settled(SettledTrade {
            symbol: instruction.symbol,
            share_delta,
            settlement_date,
            usd_value,
        }))
    }

    /// Executes a batch of instructions strictly in order, collecting
    /// per-instruction outcomes. One rejected instruction never aborts the
    /// rest of the batch; only fatal catalog errors do.
    pub fn execute_all(&mut self, instructions: Vec<TradeInstruction>) -> Result<RunSummary> {
        debug!("Executing batch of {} trade instructions", instructions.len());
        let mut summary = RunSummary::default();
        for instruction in instructions {
            let outcome = self.execute(instruction)?;
            summary.push(outcome);
        }
        info!(
            "Batch complete: {} settled, {} rejected",
            summary.settled_count(),
            summary.rejected_count()
        );
        Ok(summary)
    }
}
