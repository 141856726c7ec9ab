//! Currency error types.

use std::time::Duration;

use fxledger_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while resolving a rate or applying it.
///
/// None of these mean "no rate exists"; a missing rate is `Ok(None)` from the
/// resolver. Every variant surfaces as a system error.
#[derive(Debug, Error)]
pub enum CurrencyError {
    /// The rate source could not be reached.
    #[error("Exchange rate source request failed: {0}")]
    Transport(String),

    /// The rate source answered with a non-success status.
    #[error("Exchange rate source returned status {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code received.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The rate source answered with a body that could not be read.
    #[error("Malformed exchange rate payload: {0}")]
    MalformedPayload(String),

    /// The lookup did not complete in time.
    #[error("Exchange rate lookup timed out after {0:?}")]
    Timeout(Duration),

    /// The converted amount does not fit in 64-bit minor units.
    #[error("Converted amount overflows: {amount} x {rate}")]
    Overflow {
        /// Original amount in minor units.
        amount: i64,
        /// Rate that was applied.
        rate: Decimal,
    },
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        Self::system(err)
    }
}
