//! Exchange rates and currency conversion.

pub mod conversion;
pub mod error;
pub mod exchange;
pub mod resolver;
pub mod service;

#[cfg(test)]
mod props;

pub use conversion::convert_minor_units;
pub use error::CurrencyError;
pub use exchange::{ConversionResult, ExchangeRateRecord, select_most_recent};
pub use resolver::{ExchangeRateResolver, StaticExchangeRateResolver};
pub use service::{DEFAULT_LOOKUP_TIMEOUT, ExchangeService};
