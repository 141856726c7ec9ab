//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for minor-unit conversion:
//! - The product `amount * rate` is computed in `Decimal`, never `f64`
//! - The result is rounded to a whole minor unit
//! - Midpoints round away from zero (0.5 -> 1, -0.5 -> -1), not to even

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::ToPrimitive;

use super::error::CurrencyError;

/// Applies `rate` to an amount in minor units and rounds to the nearest
/// minor unit, half away from zero.
///
/// # Errors
///
/// Returns [`CurrencyError::Overflow`] when the product cannot be represented
/// or the rounded result does not fit in an `i64`.
pub fn convert_minor_units(amount: i64, rate: Decimal) -> Result<i64, CurrencyError> {
    let overflow = || CurrencyError::Overflow { amount, rate };
    Decimal::from(amount)
        .checked_mul(rate)
        .ok_or_else(overflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(overflow)
}
