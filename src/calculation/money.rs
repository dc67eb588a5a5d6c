//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to whole currency units, half away from zero.
///
/// Every statutory formula applies this at each intermediate step rather
/// than deferring to final totals, so rounding error accumulates across the
/// pipeline exactly as the emitted reports expect.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("157.5").unwrap()), Decimal::from_str("158").unwrap());
/// assert_eq!(round_money(Decimal::from_str("157.4").unwrap()), Decimal::from_str("157").unwrap());
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
