//! Exchange-rate lookup contract.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::CurrencyError;
use super::exchange::{ExchangeRateRecord, select_most_recent};

/// Source of exchange-rate records.
///
/// Implementations return the most recent record for `country` dated on or
/// after `oldest`, `Ok(None)` when no record qualifies, and an error only when
/// the source itself failed.
#[async_trait]
pub trait ExchangeRateResolver: Send + Sync {
    /// Finds the newest rate for `country` no older than `oldest`.
    async fn find_by_country(
        &self,
        country: &str,
        oldest: NaiveDate,
    ) -> Result<Option<ExchangeRateRecord>, CurrencyError>;
}

/// Deterministic resolver backed by a fixed table of records.
///
/// Used for tests and for running the service without network access.
#[derive(Debug, Clone, Default)]
pub struct StaticExchangeRateResolver {
    records: HashMap<String, Vec<ExchangeRateRecord>>,
}

impl StaticExchangeRateResolver {
    /// Creates an empty resolver that never finds a rate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record for `country` and returns the resolver.
    #[must_use]
    pub fn with_rate(mut self, country: &str, record_date: NaiveDate, rate: Decimal) -> Self {
        self.records
            .entry(country.to_string())
            .or_default()
            .push(ExchangeRateRecord::new(record_date, rate));
        self
    }
}

#[async_trait]
impl ExchangeRateResolver for StaticExchangeRateResolver {
    async fn find_by_country(
        &self,
        country: &str,
        oldest: NaiveDate,
    ) -> Result<Option<ExchangeRateRecord>, CurrencyError> {
        let records = self.records.get(country).into_iter().flatten().copied();
        Ok(select_most_recent(records, oldest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_static_resolver_finds_latest() {
        let resolver = StaticExchangeRateResolver::new()
            .with_rate("United Kingdom", ymd(2023, 3, 31), dec!(0.81))
            .with_rate("United Kingdom", ymd(2023, 6, 30), dec!(0.79))
            .with_rate("Canada", ymd(2023, 6, 30), dec!(1.32));

        let record = resolver
            .find_by_country("United Kingdom", ymd(2023, 1, 1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.rate, dec!(0.79));
    }

    #[tokio::test]
    async fn test_static_resolver_unknown_country() {
        let resolver = StaticExchangeRateResolver::new();
        let record = resolver
            .find_by_country("Atlantis", ymd(2023, 1, 1))
            .await
            .unwrap();
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_static_resolver_respects_cutoff() {
        let resolver =
            StaticExchangeRateResolver::new().with_rate("Canada", ymd(2020, 8, 1), dec!(1.3));
        let record = resolver
            .find_by_country("Canada", ymd(2021, 7, 2))
            .await
            .unwrap();
        assert!(record.is_none());
    }
}
