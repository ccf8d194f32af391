use rust_decimal::Decimal;

use crate::{MetricComparison, StateMetric, StateProfile, Verdict};

/// Side-by-side comparison of the headline statistics of two states.
///
/// Lower is better for every metric. Cost of living must be strictly lower
/// to count as better; the others accept a tie.
pub fn compare_metrics(
    from: &StateProfile,
    to: &StateProfile,
) -> Vec<MetricComparison> {
    StateMetric::all()
        .iter()
        .map(|&metric| {
            let (from_value, to_value) = (metric_value(from, metric), metric_value(to, metric));
            let better = match metric {
                StateMetric::CostOfLiving => to_value < from_value,
                _ => to_value <= from_value,
            };
            MetricComparison {
                metric,
                from: from_value,
                to: to_value,
                verdict: Verdict::from_condition(better),
            }
        })
        .collect()
}

fn metric_value(
    state: &StateProfile,
    metric: StateMetric,
) -> Decimal {
    match metric {
        StateMetric::CostOfLiving => state.cost_of_living,
        StateMetric::IncomeTax => state.income_tax,
        StateMetric::SalesTax => state.sales_tax,
        StateMetric::PropertyTax => state.property_taxes,
        StateMetric::K12SchoolRank => state.k12_school_performance,
        StateMetric::HigherEdRank => state.higher_ed_school_performance,
        StateMetric::ViolentCrime => state.violent_crimes,
    }
}
