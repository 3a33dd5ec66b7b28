//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places stored for every monetary amount.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents, half away from zero.
///
/// # Examples
///
/// ```
/// use sad_pay_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("292.905").unwrap()), Decimal::from_str("292.91").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("-0.125").unwrap()), Decimal::from_str("-0.13").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}
