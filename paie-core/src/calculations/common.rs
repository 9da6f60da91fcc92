//! Common utility functions for payroll calculations.
//!
//! This module provides the rounding discipline shared by every computation:
//! monetary amounts carry two decimal places, effective tax rates four.

use rust_decimal::Decimal;

/// Rounds a monetary amount to exactly two decimal places using half-up
/// rounding.
///
/// This follows standard financial rounding conventions where values at
/// exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paie_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(932.254)), dec!(932.25));
/// assert_eq!(round_half_up(dec!(932.255)), dec!(932.26));
/// assert_eq!(round_half_up(dec!(-932.255)), dec!(-932.26)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an effective tax rate to four decimal places, half-up.
///
/// Rates are fractions between 0 and 1, so two extra digits keep enough
/// resolution to distinguish adjacent incomes without pretending to more
/// precision than the tax computation carries.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paie_core::calculations::common::round_rate;
///
/// assert_eq!(round_rate(dec!(0.25510264)), dec!(0.2551));
/// assert_eq!(round_rate(dec!(0.21777777)), dec!(0.2178));
/// ```
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46)); // Away from zero
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(123.45));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // round_rate tests
    // =========================================================================

    #[test]
    fn round_rate_keeps_four_decimal_places() {
        let result = round_rate(dec!(0.123456));

        assert_eq!(result, dec!(0.1235));
    }

    #[test]
    fn round_rate_rounds_up_at_midpoint() {
        let result = round_rate(dec!(0.12345));

        assert_eq!(result, dec!(0.1235));
    }

    #[test]
    fn round_rate_handles_zero() {
        let result = round_rate(dec!(0));

        assert_eq!(result, dec!(0));
    }
}
