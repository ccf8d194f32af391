use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a move improves a category from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Better,
    Worse,
    Neutral,
}

impl Verdict {
    /// `Better` when the condition holds, otherwise `Worse`.
    pub fn from_condition(better: bool) -> Self {
        if better { Self::Better } else { Self::Worse }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Better => "better",
            Self::Worse => "worse",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-financial categories judged against the user's preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreferenceCategory {
    Abortion,
    GunLaws,
    PoliticalLeaning,
    MinimumWage,
    Population,
}

impl PreferenceCategory {
    pub fn all() -> &'static [PreferenceCategory] {
        &[
            Self::Abortion,
            Self::GunLaws,
            Self::PoliticalLeaning,
            Self::MinimumWage,
            Self::Population,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abortion => "abortion",
            Self::GunLaws => "gunLaws",
            Self::PoliticalLeaning => "politicalLeaning",
            Self::MinimumWage => "minimumWage",
            Self::Population => "population",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Abortion => "Abortion Laws",
            Self::GunLaws => "Gun Laws",
            Self::PoliticalLeaning => "Political Leaning",
            Self::MinimumWage => "Minimum Wage",
            Self::Population => "Population",
        }
    }
}

/// One verdict per [`PreferenceCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceVerdicts {
    pub abortion: Verdict,
    pub gun_laws: Verdict,
    pub political_leaning: Verdict,
    pub minimum_wage: Verdict,
    pub population: Verdict,
}

impl PreferenceVerdicts {
    pub fn get(
        &self,
        category: PreferenceCategory,
    ) -> Verdict {
        match category {
            PreferenceCategory::Abortion => self.abortion,
            PreferenceCategory::GunLaws => self.gun_laws,
            PreferenceCategory::PoliticalLeaning => self.political_leaning,
            PreferenceCategory::MinimumWage => self.minimum_wage,
            PreferenceCategory::Population => self.population,
        }
    }
}

/// Statistics shown side by side in the detailed comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateMetric {
    CostOfLiving,
    IncomeTax,
    SalesTax,
    PropertyTax,
    K12SchoolRank,
    HigherEdRank,
    ViolentCrime,
}

impl StateMetric {
    pub fn all() -> &'static [StateMetric] {
        &[
            Self::CostOfLiving,
            Self::IncomeTax,
            Self::SalesTax,
            Self::PropertyTax,
            Self::K12SchoolRank,
            Self::HigherEdRank,
            Self::ViolentCrime,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CostOfLiving => "Cost of Living Index",
            Self::IncomeTax => "Income Tax Rate",
            Self::SalesTax => "Sales Tax",
            Self::PropertyTax => "Property Tax Rate",
            Self::K12SchoolRank => "K-12 School Ranking",
            Self::HigherEdRank => "Higher Ed Ranking",
            Self::ViolentCrime => "Violent Crime Rate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricComparison {
    pub metric: StateMetric,
    pub from: Decimal,
    pub to: Decimal,
    pub verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_condition_maps_to_better_or_worse() {
        assert_eq!(Verdict::from_condition(true), Verdict::Better);
        assert_eq!(Verdict::from_condition(false), Verdict::Worse);
    }

    #[test]
    fn category_codes_round_trip() {
        for category in PreferenceCategory::all() {
            assert_eq!(PreferenceCategory::parse(category.as_str()), Some(*category));
        }
        assert_eq!(PreferenceCategory::parse("GunLaws"), None);
    }

    #[test]
    fn verdict_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Verdict::Neutral).unwrap(), "\"neutral\"");
    }
}
