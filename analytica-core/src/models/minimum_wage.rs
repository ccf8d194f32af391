use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label the source data uses for states without a state-level minimum wage.
pub const NO_STATE_LAW: &str = "No state law";

/// A state's minimum wage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum MinimumWage {
    /// Hourly wage in USD.
    Amount(Decimal),
    /// The state defers to the federal minimum.
    NoStateLaw,
}

impl MinimumWage {
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Amount(amount) => Some(*amount),
            Self::NoStateLaw => None,
        }
    }
}

impl Default for MinimumWage {
    fn default() -> Self {
        Self::Amount(Decimal::ZERO)
    }
}

impl fmt::Display for MinimumWage {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "${amount}"),
            Self::NoStateLaw => f.write_str(NO_STATE_LAW),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn amount_is_none_without_state_law() {
        assert_eq!(MinimumWage::NoStateLaw.amount(), None);
        assert_eq!(MinimumWage::Amount(dec!(15.00)).amount(), Some(dec!(15.00)));
    }

    #[test]
    fn display_matches_source_labels() {
        assert_eq!(MinimumWage::NoStateLaw.to_string(), "No state law");
        assert_eq!(MinimumWage::Amount(dec!(16.50)).to_string(), "$16.50");
    }
}
