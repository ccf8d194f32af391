use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LetterGrade, MinimumWage, PoliticalLeaning};

/// Typed statistics for one US state (or DC), keyed by `name`.
///
/// Tax fields are percentage points (`6.6` means 6.6%). `income_tax` is the
/// state's top marginal rate, not an effective rate. `cost_of_living` is an
/// index where 100 is the national average. School fields are ranks, so a
/// lower value is better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateProfile {
    pub name: String,
    pub median_home_price: Decimal,
    pub capital_gains_tax: Decimal,
    pub income_tax: Decimal,
    pub sales_tax: Decimal,
    pub property_taxes: Decimal,
    pub cost_of_living: Decimal,
    pub k12_school_performance: Decimal,
    pub higher_ed_school_performance: Decimal,
    pub forested_land: Decimal,
    pub violent_crimes: Decimal,
    pub population: u64,
    pub minimum_wage: MinimumWage,

    /// `None` when the source grade was not recognized.
    pub abortion: Option<LetterGrade>,
    /// `None` when the source grade was not recognized.
    pub gun_laws: Option<LetterGrade>,
    /// `None` when the source label was not recognized.
    pub political_leaning: Option<PoliticalLeaning>,
}

impl StateProfile {
    /// An all-zero profile with the given name.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            median_home_price: Decimal::ZERO,
            capital_gains_tax: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            sales_tax: Decimal::ZERO,
            property_taxes: Decimal::ZERO,
            cost_of_living: Decimal::ZERO,
            k12_school_performance: Decimal::ZERO,
            higher_ed_school_performance: Decimal::ZERO,
            forested_land: Decimal::ZERO,
            violent_crimes: Decimal::ZERO,
            population: 0,
            minimum_wage: MinimumWage::default(),
            abortion: None,
            gun_laws: None,
            political_leaning: None,
        }
    }
}

/// Looks up a profile by exact name.
pub fn find_state<'a>(
    states: &'a [StateProfile],
    name: &str,
) -> Option<&'a StateProfile> {
    states.iter().find(|s| s.name == name)
}

/// Picks the states a comparison starts from when the user has not chosen.
///
/// Prefers California → Texas. Each side independently falls back to the
/// first (origin) or second (destination) record.
pub fn default_state_pair(states: &[StateProfile]) -> Option<(&str, &str)> {
    let from = find_state(states, "California").or_else(|| states.first())?;
    let to = find_state(states, "Texas").or_else(|| states.get(1))?;
    Some((from.name.as_str(), to.name.as_str()))
}
