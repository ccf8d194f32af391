//! Cost-of-living adjustment.
//!
//! Spending is scaled by the ratio of the two states' cost-of-living indices
//! (100 = national average). Only consumption moves with the index; savings
//! are unaffected.

use rust_decimal::Decimal;

use crate::calculations::common::consumption_share;

/// Annual spending saved by moving (positive) or added (negative).
///
/// Returns `None` when `from_index` is zero, since the ratio is undefined,
/// or when the adjustment does not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use analytica_core::calculations::cost_of_living_delta;
///
/// // 100,000 spent in a 150-index state buys the same basket for 66,666.67
/// // in a 100-index state.
/// let delta = cost_of_living_delta(dec!(100000), dec!(0), dec!(150), dec!(100)).unwrap();
/// assert_eq!(delta.round_dp(2), dec!(33333.33));
///
/// assert_eq!(cost_of_living_delta(dec!(100000), dec!(0), dec!(0), dec!(100)), None);
/// ```
pub fn cost_of_living_delta(
    income: Decimal,
    savings_rate: Decimal,
    from_index: Decimal,
    to_index: Decimal,
) -> Option<Decimal> {
    let ratio = to_index.checked_div(from_index)?;
    let consumption = income.checked_mul(consumption_share(savings_rate))?;
    consumption.checked_mul(Decimal::ONE.checked_sub(ratio)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn cheaper_destination_saves_money() {
        let delta = cost_of_living_delta(dec!(105000), dec!(20), dec!(134.5), dec!(83.1));

        assert_eq!(delta.map(|d| d.round_dp(2)), Some(dec!(32101.12)));
    }

    #[test]
    fn pricier_destination_costs_money() {
        let delta = cost_of_living_delta(dec!(50000), dec!(0), dec!(100), dec!(120));

        assert_eq!(delta, Some(dec!(-10000)));
    }

    #[test]
    fn equal_indices_have_no_impact() {
        assert_eq!(
            cost_of_living_delta(dec!(90000), dec!(10), dec!(97.3), dec!(97.3)),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn saving_everything_removes_cost_of_living_impact() {
        assert_eq!(
            cost_of_living_delta(dec!(105000), dec!(100), dec!(150), dec!(80)),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn zero_origin_index_is_undefined() {
        assert_eq!(cost_of_living_delta(dec!(105000), dec!(20), dec!(0), dec!(90)), None);
    }

    #[test]
    fn zero_destination_index_is_defined() {
        assert_eq!(
            cost_of_living_delta(dec!(1000), dec!(0), dec!(100), dec!(0)),
            Some(dec!(1000))
        );
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!(cost_of_living_delta(Decimal::MAX, dec!(0), dec!(50), dec!(190)), None);
    }
}
