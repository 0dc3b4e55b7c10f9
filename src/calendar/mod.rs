pub mod calendar_rules;

pub use calendar_rules::{is_non_trading_day, next_eligible_date};
