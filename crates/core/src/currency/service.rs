//! Currency service for rate lookup and conversion.
//!
//! Wraps an [`ExchangeRateResolver`] with a bounded lookup and the
//! minor-unit converter. A missing rate is a business error; anything that
//! goes wrong talking to the source is a system error.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use fxledger_shared::{AppResult, BusinessError};

use super::conversion::convert_minor_units;
use super::error::CurrencyError;
use super::exchange::ConversionResult;
use super::resolver::ExchangeRateResolver;

/// Lookup bound used when none is configured.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Converts amounts using rates from a pluggable resolver.
#[derive(Clone)]
pub struct ExchangeService {
    resolver: Arc<dyn ExchangeRateResolver>,
    lookup_timeout: Duration,
}

impl ExchangeService {
    /// Creates a service with the default lookup timeout.
    #[must_use]
    pub fn new(resolver: Arc<dyn ExchangeRateResolver>) -> Self {
        Self::with_timeout(resolver, DEFAULT_LOOKUP_TIMEOUT)
    }

    /// Creates a service with an explicit lookup timeout.
    #[must_use]
    pub fn with_timeout(resolver: Arc<dyn ExchangeRateResolver>, lookup_timeout: Duration) -> Self {
        Self {
            resolver,
            lookup_timeout,
        }
    }

    /// Upper bound applied to each rate lookup.
    #[must_use]
    pub const fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    /// Converts `amount` (minor units) into the currency of `country`, using
    /// the newest rate dated on or after `oldest`.
    ///
    /// A single attempt is made. Dropping the returned future abandons the
    /// lookup.
    ///
    /// # Errors
    ///
    /// - `UNABLE_TO_CONVERT_TO_TARGET_CURRENCY` when no rate qualifies
    /// - a system error when the lookup fails, times out, or overflows
    pub async fn convert(
        &self,
        country: &str,
        oldest: NaiveDate,
        amount: i64,
    ) -> AppResult<ConversionResult> {
        let lookup = self.resolver.find_by_country(country, oldest);
        let record = tokio::time::timeout(self.lookup_timeout, lookup)
            .await
            .map_err(|_| CurrencyError::Timeout(self.lookup_timeout))??;

        let Some(record) = record else {
            return Err(BusinessError::UnableToConvertToTargetCurrency.into());
        };

        Ok(ConversionResult {
            amount: convert_minor_units(amount, record.rate)?,
            exchange_rate: record.rate,
        })
    }
}

impl std::fmt::Debug for ExchangeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeService")
            .field("lookup_timeout", &self.lookup_timeout)
            .finish_non_exhaustive()
    }
}
