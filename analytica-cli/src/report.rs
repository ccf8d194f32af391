//! Plain-text rendering of analyses and state listings.

use std::fmt;

use analytica_core::calculations::{MovingAnalysis, format_usd};
use analytica_core::{
    ImpactBreakdown, MetricComparison, MinimumWage, MovingInputs, PreferenceCategory,
    StateProfile,
};

const LABEL_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 14;

/// Full report for one move: inputs, financial breakdown, summary sentence,
/// preference verdicts, metric table and data warnings.
pub struct AnalysisReport<'a> {
    pub analysis: &'a MovingAnalysis,
    pub inputs: &'a MovingInputs,
}

impl fmt::Display for AnalysisReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let analysis = self.analysis;
        let (from, to) = (&analysis.from.name, &analysis.to.name);

        writeln!(f, "Moving from {from} to {to}")?;
        writeln!(
            f,
            "Income {}, home value {}, savings rate {}%",
            format_usd(self.inputs.income),
            format_usd(self.inputs.house_value),
            self.inputs.savings_rate.normalize()
        )?;
        writeln!(f)?;

        write_breakdown(f, &analysis.estimate.breakdown)?;
        writeln!(f)?;
        writeln!(f, "{}", analysis.estimate.breakdown.summary(to))?;
        writeln!(f)?;

        writeln!(f, "Preferences")?;
        for &category in PreferenceCategory::all() {
            writeln!(
                f,
                "  {:<LABEL_WIDTH$}{}",
                category.label(),
                analysis.verdicts.get(category)
            )?;
        }
        writeln!(f)?;

        write!(f, "{}", MetricTable { from, to, metrics: &analysis.metrics })?;

        if !analysis.estimate.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warnings")?;
            for warning in &analysis.estimate.warnings {
                writeln!(f, "  - {warning}")?;
            }
        }
        Ok(())
    }
}

fn write_breakdown(
    f: &mut fmt::Formatter<'_>,
    breakdown: &ImpactBreakdown,
) -> fmt::Result {
    let rounded = breakdown.rounded();
    writeln!(f, "Annual financial impact (positive saves money)")?;
    for (label, value) in [
        ("Income tax", rounded.income_tax),
        ("Sales tax", rounded.sales_tax),
        ("Property tax", rounded.property_tax),
        ("Cost of living", rounded.cost_of_living),
    ] {
        writeln!(f, "  {:<LABEL_WIDTH$}{:>VALUE_WIDTH$}", label, format_usd(value))?;
    }
    writeln!(f, "  {:<LABEL_WIDTH$}{:>VALUE_WIDTH$}", "Total", format_usd(rounded.total))
}

/// Side-by-side statistics; used alone by the `compare` command.
pub struct MetricTable<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub metrics: &'a [MetricComparison],
}

impl fmt::Display for MetricTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "  {:<LABEL_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}  Verdict",
            "Metric", self.from, self.to
        )?;
        for metric in self.metrics {
            writeln!(
                f,
                "  {:<LABEL_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}  {}",
                metric.metric.label(),
                metric.from.normalize().to_string(),
                metric.to.normalize().to_string(),
                metric.verdict
            )?;
        }
        Ok(())
    }
}

/// One line per state with its headline tax and cost figures.
pub struct StateList<'a>(pub &'a [StateProfile]);

impl fmt::Display for StateList<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:<20}{:>10}{:>10}{:>10}{:>10}{:>12}",
            "State", "Income %", "Sales %", "Prop. %", "CoL", "Min. wage"
        )?;
        for state in self.0 {
            let minimum_wage = match state.minimum_wage {
                MinimumWage::Amount(amount) => format!("${:.2}", amount),
                MinimumWage::NoStateLaw => "none".to_string(),
            };
            writeln!(
                f,
                "{:<20}{:>10}{:>10}{:>10}{:>10}{:>12}",
                state.name,
                state.income_tax.normalize().to_string(),
                state.sales_tax.normalize().to_string(),
                state.property_taxes.normalize().to_string(),
                state.cost_of_living.normalize().to_string(),
                minimum_wage
            )?;
        }
        Ok(())
    }
}
