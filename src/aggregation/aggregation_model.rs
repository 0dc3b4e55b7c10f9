use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cash direction of a settled trade: a buy sends cash out of the portfolio,
/// a sell brings cash in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowDirection {
    Outgoing,
    Incoming,
}

/// Accumulates USD traded value keyed by settlement date and by instrument.
///
/// Built up over one simulation run, read-only once reporting begins.
/// By-date buckets are kept date-ordered so report iteration is
/// deterministic; rank buckets are sorted at report time.
///
/// Sign convention: by-date buckets hold positive magnitudes for both
/// directions. The outgoing rank bucket holds positive values; the incoming
/// rank bucket accumulates the NEGATED contribution and is negated back to
/// positive at report time.
#[derive(Debug, Clone, Default)]
pub struct AggregationStore {
    outgoing_by_date: BTreeMap<NaiveDate, Decimal>,
    incoming_by_date: BTreeMap<NaiveDate, Decimal>,
    outgoing_rank: HashMap<String, Decimal>,
    incoming_rank: HashMap<String, Decimal>,
}

impl AggregationStore {
    pub fn new() -> Self {
        AggregationStore::default()
    }

    /// Records one settled trade's USD value. `usd_value` is the positive
    /// magnitude; this store applies the internal sign convention.
    pub(crate) fn record(
        &mut self,
        direction: FlowDirection,
        date: NaiveDate,
        symbol: &str,
        usd_value: Decimal,
    ) {
        match direction {
            FlowDirection::Outgoing => {
                *self
                    .outgoing_by_date
                    .entry(date)
                    .or_insert(Decimal::ZERO) += usd_value;
                *self
                    .outgoing_rank
                    .entry(symbol.to_string())
                    .or_insert(Decimal::ZERO) += usd_value;
            }
            FlowDirection::Incoming => {
                *self
                    .incoming_by_date
                    .entry(date)
                    .or_insert(Decimal::ZERO) += usd_value;
                *self
                    .incoming_rank
                    .entry(symbol.to_string())
                    .or_insert(Decimal::ZERO) -= usd_value;
            }
        }
    }

    pub fn outgoing_by_date(&self) -> &BTreeMap<NaiveDate, Decimal> {
        &self.outgoing_by_date
    }

    pub fn incoming_by_date(&self) -> &BTreeMap<NaiveDate, Decimal> {
        &self.incoming_by_date
    }

    pub fn outgoing_rank(&self) -> &HashMap<String, Decimal> {
        &self.outgoing_rank
    }

    pub fn incoming_rank(&self) -> &HashMap<String, Decimal> {
        &self.incoming_rank
    }

    pub fn is_empty(&self) -> bool {
        self.outgoing_by_date.is_empty() && self.incoming_by_date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_outgoing_contributions_accumulate() {
        let mut store = AggregationStore::new();
        let day = date(2016, 1, 4);
        store.record(FlowDirection::Outgoing, day, "foo", dec!(10025.0));
        store.record(FlowDirection::Outgoing, day, "foo", dec!(15037.5));

        assert_eq!(store.outgoing_by_date()[&day], dec!(25062.5));
        assert_eq!(store.outgoing_rank()["foo"], dec!(25062.5));
        assert!(store.incoming_by_date().is_empty());
    }

    #[test]
    fn test_incoming_sign_convention() {
        let mut store = AggregationStore::new();
        let day = date(2016, 1, 7);
        store.record(FlowDirection::Incoming, day, "bar", dec!(14899.5));

        // By-date holds the positive magnitude, the rank bucket the negation.
        assert_eq!(store.incoming_by_date()[&day], dec!(14899.5));
        assert_eq!(store.incoming_rank()["bar"], dec!(-14899.5));
    }

    #[test]
    fn test_entries_created_on_first_contribution() {
        let mut store = AggregationStore::new();
        assert!(store.is_empty());
        store.record(FlowDirection::Incoming, date(2016, 6, 20), "bar", dec!(3311.0));
        assert!(!store.is_empty());
        assert_eq!(store.incoming_by_date().len(), 1);
        assert_eq!(store.incoming_rank().len(), 1);
    }
}
