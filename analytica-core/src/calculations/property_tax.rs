use rust_decimal::Decimal;

use crate::calculations::common::percent_to_fraction;

/// Annual property tax saved by moving (positive) or added (negative) on a
/// home of the given value. `None` on overflow.
pub fn property_tax_delta(
    house_value: Decimal,
    from_rate_percent: Decimal,
    to_rate_percent: Decimal,
) -> Option<Decimal> {
    let rate_change =
        percent_to_fraction(from_rate_percent).checked_sub(percent_to_fraction(to_rate_percent))?;
    house_value.checked_mul(rate_change)
}
