//! Effective state income tax approximation.
//!
//! State data only records each state's *top marginal* income-tax rate.
//! Applying that rate to the whole income overstates the burden for most
//! earners, so the effective rate is approximated as a fixed share of the
//! top rate that grows with income:
//!
//! | Income (inclusive upper bound) | Share of top rate |
//! |--------------------------------|-------------------|
//! | ≤ $50,000                      | 0.25              |
//! | ≤ $100,000                     | 0.45              |
//! | ≤ $200,000                     | 0.52              |
//! | ≤ $500,000                     | 0.65              |
//! | > $500,000                     | 0.80              |
//!
//! The table is calibrated so that a $105,000 earner in a 13.3% top-rate
//! state pays about 6.9% effectively. Changing a threshold or multiplier
//! changes every reported dollar amount.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use analytica_core::calculations::effective_income_tax;
//!
//! // 105,000 × 13.3% × 0.52
//! assert_eq!(effective_income_tax(dec!(105000), dec!(13.3)), Some(dec!(7261.80)));
//! assert_eq!(effective_income_tax(dec!(105000), dec!(0)), Some(dec!(0)));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::percent_to_fraction;

/// Income bands of the effective-rate approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeBracket {
    Low,
    Middle,
    UpperMiddle,
    High,
    VeryHigh,
}

impl IncomeBracket {
    pub fn all() -> &'static [IncomeBracket] {
        &[
            Self::Low,
            Self::Middle,
            Self::UpperMiddle,
            Self::High,
            Self::VeryHigh,
        ]
    }

    /// Inclusive upper income bound; `None` for the open top band.
    pub fn upper_bound(&self) -> Option<Decimal> {
        match self {
            Self::Low => Some(Decimal::new(50_000, 0)),
            Self::Middle => Some(Decimal::new(100_000, 0)),
            Self::UpperMiddle => Some(Decimal::new(200_000, 0)),
            Self::High => Some(Decimal::new(500_000, 0)),
            Self::VeryHigh => None,
        }
    }

    /// Fraction of the top marginal rate paid as an effective rate.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Low => Decimal::new(25, 2),
            Self::Middle => Decimal::new(45, 2),
            Self::UpperMiddle => Decimal::new(52, 2),
            Self::High => Decimal::new(65, 2),
            Self::VeryHigh => Decimal::new(80, 2),
        }
    }

    pub fn for_income(income: Decimal) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|bracket| bracket.upper_bound().is_none_or(|bound| income <= bound))
            .unwrap_or(Self::VeryHigh)
    }
}

/// Approximate state income tax owed, in USD.
///
/// `top_rate_percent` is the state's top marginal rate in percentage points.
/// States without an income tax short-circuit to zero. Returns `None` when
/// the amount does not fit in a [`Decimal`].
pub fn effective_income_tax(
    income: Decimal,
    top_rate_percent: Decimal,
) -> Option<Decimal> {
    if top_rate_percent.is_zero() {
        return Some(Decimal::ZERO);
    }

    let multiplier = IncomeBracket::for_income(income).multiplier();
    income
        .checked_mul(percent_to_fraction(top_rate_percent))?
        .checked_mul(multiplier)
}

/// Income tax saved by moving (positive) or added (negative).
///
/// `None` on overflow.
pub fn income_tax_delta(
    income: Decimal,
    from_top_rate_percent: Decimal,
    to_top_rate_percent: Decimal,
) -> Option<Decimal> {
    effective_income_tax(income, from_top_rate_percent)?
        .checked_sub(effective_income_tax(income, to_top_rate_percent)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // IncomeBracket tests
    // =========================================================================

    #[test]
    fn for_income_uses_inclusive_upper_bounds() {
        assert_eq!(IncomeBracket::for_income(dec!(0)), IncomeBracket::Low);
        assert_eq!(IncomeBracket::for_income(dec!(50000)), IncomeBracket::Low);
        assert_eq!(IncomeBracket::for_income(dec!(50000.01)), IncomeBracket::Middle);
        assert_eq!(IncomeBracket::for_income(dec!(100000)), IncomeBracket::Middle);
        assert_eq!(IncomeBracket::for_income(dec!(100000.01)), IncomeBracket::UpperMiddle);
        assert_eq!(IncomeBracket::for_income(dec!(200000)), IncomeBracket::UpperMiddle);
        assert_eq!(IncomeBracket::for_income(dec!(200001)), IncomeBracket::High);
        assert_eq!(IncomeBracket::for_income(dec!(500000)), IncomeBracket::High);
        assert_eq!(IncomeBracket::for_income(dec!(500000.01)), IncomeBracket::VeryHigh);
        assert_eq!(IncomeBracket::for_income(dec!(10000000)), IncomeBracket::VeryHigh);
    }

    #[test]
    fn multipliers_match_calibration_table() {
        let multipliers: Vec<_> = IncomeBracket::all().iter().map(|b| b.multiplier()).collect();

        assert_eq!(
            multipliers,
            vec![dec!(0.25), dec!(0.45), dec!(0.52), dec!(0.65), dec!(0.80)]
        );
    }

    #[test]
    fn multipliers_increase_with_bracket() {
        let multipliers: Vec<_> = IncomeBracket::all().iter().map(|b| b.multiplier()).collect();

        assert!(multipliers.windows(2).all(|w| w[0] < w[1]));
    }

    // =========================================================================
    // effective_income_tax tests
    // =========================================================================

    #[test]
    fn zero_rate_short_circuits_for_any_income() {
        for income in [dec!(0), dec!(1), dec!(50000), dec!(750000), dec!(99999999)] {
            assert_eq!(effective_income_tax(income, dec!(0)), Some(Decimal::ZERO));
        }
    }

    #[test]
    fn calibration_point_105k_at_13_3_percent() {
        let tax = effective_income_tax(dec!(105000), dec!(13.3)).unwrap();

        assert_eq!(tax, dec!(7261.80));
        // ≈ 6.9% effective
        assert_eq!((tax / dec!(105000)).round_dp(4), dec!(0.0692));
    }

    #[test]
    fn applies_bracket_multiplier_per_band() {
        assert_eq!(effective_income_tax(dec!(40000), dec!(5)), Some(dec!(500))); // × 0.25
        assert_eq!(effective_income_tax(dec!(80000), dec!(5)), Some(dec!(1800))); // × 0.45
        assert_eq!(effective_income_tax(dec!(150000), dec!(5)), Some(dec!(3900))); // × 0.52
        assert_eq!(effective_income_tax(dec!(300000), dec!(5)), Some(dec!(9750))); // × 0.65
        assert_eq!(effective_income_tax(dec!(1000000), dec!(5)), Some(dec!(40000))); // × 0.80
    }

    #[test]
    fn non_decreasing_across_bracket_boundaries() {
        let rate = dec!(9.9);
        for bound in IncomeBracket::all().iter().filter_map(|b| b.upper_bound()) {
            let at = effective_income_tax(bound, rate).unwrap();
            let above = effective_income_tax(bound + dec!(0.01), rate).unwrap();
            let below = effective_income_tax(bound - dec!(0.01), rate).unwrap();

            assert!(below <= at, "decrease just below {bound}");
            assert!(at <= above, "decrease just above {bound}");
        }
    }

    #[test]
    fn non_decreasing_over_income_sweep() {
        let rate = dec!(4.25);
        let mut previous = Decimal::ZERO;
        let mut income = Decimal::ZERO;
        while income <= dec!(700000) {
            let tax = effective_income_tax(income, rate).unwrap();
            assert!(tax >= previous, "tax decreased at income {income}");
            previous = tax;
            income += dec!(2500);
        }
    }

    // =========================================================================
    // income_tax_delta tests
    // =========================================================================

    #[test]
    fn delta_is_positive_when_moving_to_no_income_tax_state() {
        assert_eq!(income_tax_delta(dec!(105000), dec!(13.3), dec!(0)), Some(dec!(7261.80)));
    }

    #[test]
    fn delta_is_negative_when_moving_to_higher_rate() {
        assert_eq!(income_tax_delta(dec!(40000), dec!(0), dec!(5)), Some(dec!(-500)));
    }

    #[test]
    fn delta_is_zero_for_equal_rates() {
        assert_eq!(income_tax_delta(dec!(250000), dec!(6.6), dec!(6.6)), Some(Decimal::ZERO));
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!(effective_income_tax(Decimal::MAX, dec!(1000)), None);
        assert_eq!(income_tax_delta(Decimal::MAX, dec!(1000), dec!(0)), None);
    }
}
