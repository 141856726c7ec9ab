//! Property-based tests for minor-unit conversion.
//!
//! - Conversion agrees with an exact integer reference
//! - Rounding is symmetric around zero
//! - Conversion is deterministic and identity at rate 1

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::convert_minor_units;

/// Strategy to generate signed amounts in cents (up to +/- 10 billion dollars).
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

/// Strategy to generate positive rates with four decimal places (0.0001 to 10000.0000).
fn rate_scaled() -> impl Strategy<Value = i64> {
    1i64..100_000_000i64
}

/// Computes `amount * rate_scaled / 10_000` rounded half away from zero, in integers.
fn reference(amount: i64, rate_scaled: i64) -> i64 {
    let product = i128::from(amount) * i128::from(rate_scaled);
    let magnitude = (product.abs() * 2 + 10_000) / 20_000;
    let signed = if product < 0 { -magnitude } else { magnitude };
    i64::try_from(signed).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Conversion equals the exact integer computation.
    #[test]
    fn prop_matches_integer_reference(amount in amount(), scaled in rate_scaled()) {
        let rate = Decimal::new(scaled, 4);
        let result = convert_minor_units(amount, rate).unwrap();
        prop_assert_eq!(result, reference(amount, scaled));
    }

    /// Negating the amount negates the result exactly.
    #[test]
    fn prop_rounding_is_symmetric(amount in amount(), scaled in rate_scaled()) {
        let rate = Decimal::new(scaled, 4);
        let positive = convert_minor_units(amount, rate).unwrap();
        let negative = convert_minor_units(-amount, rate).unwrap();
        prop_assert_eq!(positive, -negative);
    }

    /// The same inputs always produce the same output.
    #[test]
    fn prop_convert_is_deterministic(amount in amount(), scaled in rate_scaled()) {
        let rate = Decimal::new(scaled, 4);
        prop_assert_eq!(
            convert_minor_units(amount, rate).unwrap(),
            convert_minor_units(amount, rate).unwrap()
        );
    }

    /// A unit rate never changes the amount.
    #[test]
    fn prop_unit_rate_is_identity(amount in any::<i64>()) {
        prop_assert_eq!(convert_minor_units(amount, Decimal::ONE).unwrap(), amount);
    }

    /// Trailing zeros in the rate's representation do not matter.
    #[test]
    fn prop_rate_scale_is_irrelevant(amount in amount(), scaled in rate_scaled()) {
        let short = Decimal::new(scaled, 4);
        let long = Decimal::from_i128_with_scale(i128::from(scaled) * 100_000_000, 12);
        prop_assert_eq!(
            convert_minor_units(amount, short).unwrap(),
            convert_minor_units(amount, long).unwrap()
        );
    }
}
