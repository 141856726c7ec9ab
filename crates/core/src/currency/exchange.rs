//! Exchange rate types and logic.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A published exchange rate for one country on one date.
///
/// The rate is the number of target-currency units per one source unit, held
/// as an exact decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRateRecord {
    /// Date the rate was recorded.
    pub record_date: NaiveDate,
    /// Exchange rate value.
    pub rate: Decimal,
}

impl ExchangeRateRecord {
    /// Creates a new record.
    #[must_use]
    pub const fn new(record_date: NaiveDate, rate: Decimal) -> Self {
        Self { record_date, rate }
    }
}

/// Outcome of converting an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionResult {
    /// Converted amount in target minor units.
    pub amount: i64,
    /// Rate that produced it.
    pub exchange_rate: Decimal,
}

/// Picks the most recent record dated on or after `oldest`.
///
/// Records before `oldest` are ignored even if a source returns them.
pub fn select_most_recent<I>(records: I, oldest: NaiveDate) -> Option<ExchangeRateRecord>
where
    I: IntoIterator<Item = ExchangeRateRecord>,
{
    records
        .into_iter()
        .filter(|record| record.record_date >= oldest)
        .max_by_key(|record| record.record_date)
}
