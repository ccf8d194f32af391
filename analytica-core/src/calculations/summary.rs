use rust_decimal::Decimal;

use crate::ImpactBreakdown;
use crate::calculations::common::format_usd;

impl ImpactBreakdown {
    /// One-sentence description of the total, e.g.
    /// `You'll save approximately $39,236 per year by moving to Texas!`.
    pub fn summary(
        &self,
        to_name: &str,
    ) -> String {
        if self.total > Decimal::ZERO {
            format!(
                "You'll save approximately {} per year by moving to {to_name}!",
                format_usd(self.total)
            )
        } else if self.total < Decimal::ZERO {
            format!(
                "It will cost you approximately {} more per year to live in {to_name}.",
                format_usd(self.total.abs())
            )
        } else {
            format!("Moving to {to_name} has no estimated effect on your annual costs.")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn with_total(total: Decimal) -> ImpactBreakdown {
        ImpactBreakdown {
            total,
            ..ImpactBreakdown::default()
        }
    }

    #[test]
    fn positive_total_reports_savings() {
        assert_eq!(
            with_total(dec!(39236.0122)).summary("Texas"),
            "You'll save approximately $39,236 per year by moving to Texas!"
        );
    }

    #[test]
    fn negative_total_reports_cost_without_sign() {
        assert_eq!(
            with_total(dec!(-39236.0122)).summary("California"),
            "It will cost you approximately $39,236 more per year to live in California."
        );
    }

    #[test]
    fn zero_total_is_neutral() {
        assert_eq!(
            with_total(Decimal::ZERO).summary("Ohio"),
            "Moving to Ohio has no estimated effect on your annual costs."
        );
    }
}
