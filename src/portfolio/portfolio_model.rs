use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Current share holdings per instrument symbol.
///
/// Mutated only by the settlement engine. Holdings are a plain signed count:
/// a buy is never blocked, so a count can go negative through seeding or
/// unguarded flows. Only the engine's sell-quantity check prevents selling
/// more than is currently held.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioLedger {
    holdings: HashMap<String, i64>,
}

impl PortfolioLedger {
    pub fn new() -> Self {
        PortfolioLedger::default()
    }

    /// Seeds the ledger with initial positions.
    pub fn with_holdings(seed: impl IntoIterator<Item = (String, i64)>) -> Self {
        PortfolioLedger {
            holdings: seed.into_iter().collect(),
        }
    }

    /// Current share count for a symbol; zero for symbols never traded.
    pub fn quantity_of(&self, symbol: &str) -> i64 {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Applies a signed share delta and returns the new total.
    pub(crate) fn apply_delta(&mut self, symbol: &str, delta: i64) -> i64 {
        let total = self.holdings.entry(symbol.to_string()).or_insert(0);
        *total += delta;
        *total
    }

    pub fn positions(&self) -> impl Iterator<Item = (&str, i64)> {
        self.holdings
            .iter()
            .map(|(symbol, quantity)| (symbol.as_str(), *quantity))
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_symbol_defaults_to_zero() {
        let ledger = PortfolioLedger::new();
        assert_eq!(ledger.quantity_of("foo"), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_apply_delta_accumulates() {
        let mut ledger = PortfolioLedger::with_holdings(vec![("foo".to_string(), 500)]);
        assert_eq!(ledger.apply_delta("foo", 200), 700);
        assert_eq!(ledger.apply_delta("foo", -450), 250);
        assert_eq!(ledger.quantity_of("foo"), 250);
    }

    #[test]
    fn test_holdings_may_go_negative() {
        // Negative counts are representable by policy; the engine's sell
        // check is the only guard.
        let mut ledger = PortfolioLedger::new();
        assert_eq!(ledger.apply_delta("foo", -10), -10);
        assert_eq!(ledger.quantity_of("foo"), -10);
    }
}
