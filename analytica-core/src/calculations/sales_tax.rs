//! Sales tax on everyday consumption.
//!
//! Only part of what a household spends is subject to sales tax (housing,
//! most groceries and services are exempt), so half of consumption is
//! treated as taxable.

use rust_decimal::Decimal;

use crate::calculations::common::{consumption_share, percent_to_fraction};

/// Share of consumption spending assumed to be taxable.
pub const TAXABLE_SPEND_SHARE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Annual sales tax saved by moving (positive) or added (negative), or
/// `None` on overflow.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use analytica_core::calculations::sales_tax_delta;
///
/// // 105,000 × 0.8 × 0.5 × (7.25% − 6.25%)
/// assert_eq!(sales_tax_delta(dec!(105000), dec!(20), dec!(7.25), dec!(6.25)), Some(dec!(420)));
/// ```
pub fn sales_tax_delta(
    income: Decimal,
    savings_rate: Decimal,
    from_rate_percent: Decimal,
    to_rate_percent: Decimal,
) -> Option<Decimal> {
    let taxable_spend = income
        .checked_mul(consumption_share(savings_rate))?
        .checked_mul(TAXABLE_SPEND_SHARE)?;
    let rate_change =
        percent_to_fraction(from_rate_percent).checked_sub(percent_to_fraction(to_rate_percent))?;
    taxable_spend.checked_mul(rate_change)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn taxable_share_is_one_half() {
        assert_eq!(TAXABLE_SPEND_SHARE, dec!(0.5));
    }

    #[test]
    fn lower_destination_rate_saves_money() {
        assert_eq!(sales_tax_delta(dec!(105000), dec!(20), dec!(7.25), dec!(6.25)), Some(dec!(420)));
    }

    #[test]
    fn higher_destination_rate_costs_money() {
        assert_eq!(sales_tax_delta(dec!(50000), dec!(0), dec!(4), dec!(6)), Some(dec!(-500)));
    }

    #[test]
    fn saving_everything_removes_sales_tax_impact() {
        assert_eq!(sales_tax_delta(dec!(105000), dec!(100), dec!(9), dec!(0)), Some(Decimal::ZERO));
    }

    #[test]
    fn equal_rates_have_no_impact() {
        assert_eq!(sales_tax_delta(dec!(80000), dec!(15), dec!(6), dec!(6)), Some(Decimal::ZERO));
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!(sales_tax_delta(Decimal::MAX, dec!(0), dec!(1000), dec!(0)), None);
    }
}
