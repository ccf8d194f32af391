//! Common utility functions for moving-impact calculations.
//!
//! Shared rounding, percentage and currency-formatting helpers used by the
//! individual estimators and by report rendering.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use analytica_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts percentage points to a fraction (`7.25` → `0.0725`).
pub fn percent_to_fraction(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}

/// Share of income that is spent rather than saved.
///
/// `savings_rate` is a percentage; `20` yields `0.8`.
pub fn consumption_share(savings_rate: Decimal) -> Decimal {
    Decimal::ONE - percent_to_fraction(savings_rate)
}

/// Formats a USD amount as whole dollars with thousands separators.
///
/// Cents are rounded half away from zero; negative amounts carry a leading
/// minus sign.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use analytica_core::calculations::common::format_usd;
///
/// assert_eq!(format_usd(dec!(39236.01)), "$39,236");
/// assert_eq!(format_usd(dec!(-1780)), "-$1,780");
/// ```
pub fn format_usd(value: Decimal) -> String {
    let dollars = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if dollars.is_sign_negative() && !dollars.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = dollars.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}")
}
