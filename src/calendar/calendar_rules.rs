use chrono::{Datelike, NaiveDate, Weekday};

/// Currencies whose settlement weekend falls on Friday and Saturday.
const SPECIAL_WEEKEND_CURRENCIES: [&str; 2] = ["AED", "SAR"];

fn has_friday_saturday_weekend(currency: &str) -> bool {
    SPECIAL_WEEKEND_CURRENCIES
        .iter()
        .any(|code| code.eq_ignore_ascii_case(currency))
}

/// Checks whether settlement can NOT occur on `date` for the given currency.
///
/// AED and SAR observe a Friday/Saturday weekend; every other currency
/// observes Saturday/Sunday. Currency codes are compared case-insensitively.
pub fn is_non_trading_day(date: NaiveDate, currency: &str) -> bool {
    let weekday = date.weekday();
    if has_friday_saturday_weekend(currency) {
        weekday == Weekday::Fri || weekday == Weekday::Sat
    } else {
        weekday == Weekday::Sat || weekday == Weekday::Sun
    }
}

/// Returns the first eligible settlement date at or after `date` for the
/// given currency. The input is returned unchanged if it is already a
/// trading day.
pub fn next_eligible_date(date: NaiveDate, currency: &str) -> NaiveDate {
    let mut eligible = date;
    while is_non_trading_day(eligible, currency) {
        match eligible.succ_opt() {
            Some(next) => eligible = next,
            // End of the representable calendar; nothing left to advance to.
            None => break,
        }
    }
    eligible
}
