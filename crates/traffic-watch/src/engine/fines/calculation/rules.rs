use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::super::domain::Severity;

/// Currency rounding applied everywhere money is produced: two decimal
/// places, banker's rounding (midpoint to even).
pub(crate) fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    rounded
}

/// `1.0 + level * 0.5`, giving 1.5 for Low through 3.0 for Critical.
pub(crate) fn severity_multiplier(severity: Severity) -> Decimal {
    Decimal::ONE + dec!(0.5) * Decimal::from(severity.level())
}

/// `max(1.0, 1.0 + repeat_count * 0.2)`. The floor keeps repeat history
/// from ever reducing a fine.
pub(crate) fn repeat_offender_multiplier(repeat_count: u32) -> Decimal {
    (Decimal::ONE + dec!(0.2) * Decimal::from(repeat_count)).max(Decimal::ONE)
}
