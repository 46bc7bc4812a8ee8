//! Shared helpers for the calculation modules.

use rust_decimal::Decimal;

/// Rounds a decimal value to two decimal places, half-up.
///
/// Standard financial rounding: values at exactly 0.005 round away from
/// zero. Applied when assembling results; intermediate arithmetic keeps
/// full precision.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use freelance_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(7064.775)), dec!(7064.78));
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a value to zero when negative.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
