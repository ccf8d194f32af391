//! Wire form of a state record and the adapter that types it.
//!
//! The state-data service and the source spreadsheet deliver every
//! statistic as a string. [`StateRecord`] mirrors that layout, and
//! [`StateRecord::into_profile`] parses it exactly once into a
//! [`StateProfile`]. A field that fails to parse is replaced by zero (or
//! `None` for categorical fields) and reported as a [`FieldWarning`]; the
//! conversion itself never fails and never logs.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::{LetterGrade, MinimumWage, NO_STATE_LAW, PoliticalLeaning, StateProfile};

/// A state record exactly as the external service serves it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StateRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub median_home_price: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub capital_gains_tax: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub income_tax: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sales_tax: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub property_taxes: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub abortion: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cost_of_living: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub k12_school_performance: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub higher_ed_school_performance: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub forested_land: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gun_laws: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub minimum_wage: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub population: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub violent_crimes: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub political_leaning: String,
}

/// Accepts a string, a number or null and yields the text form.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    let raw: Option<Raw> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Raw::Text(s)) => s,
        Some(Raw::Integer(n)) => n.to_string(),
        Some(Raw::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

/// Why a field was degraded during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldWarningReason {
    Missing,
    InvalidNumber,
    UnrecognizedGrade,
    UnrecognizedLeaning,
}

impl fmt::Display for FieldWarningReason {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let text = match self {
            Self::Missing => "missing value, using 0",
            Self::InvalidNumber => "not a number, using 0",
            Self::UnrecognizedGrade => "unrecognized grade, scored as F",
            Self::UnrecognizedLeaning => "unrecognized political leaning",
        };
        f.write_str(text)
    }
}

/// One degraded field of one state record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldWarning {
    pub state: String,
    pub field: &'static str,
    pub value: String,
    pub reason: FieldWarningReason,
}

impl fmt::Display for FieldWarning {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{}.{} = '{}': {}",
            self.state, self.field, self.value, self.reason
        )
    }
}

/// Result of typing a [`StateRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConversion {
    pub profile: StateProfile,
    pub warnings: Vec<FieldWarning>,
}

impl StateRecord {
    /// Parses every field once, substituting zero for anything unreadable.
    pub fn into_profile(self) -> ProfileConversion {
        let mut fields = FieldParser {
            state: self.name.trim().to_string(),
            warnings: Vec::new(),
        };

        let profile = StateProfile {
            name: fields.state.clone(),
            median_home_price: fields.decimal("MedianHomePrice", &self.median_home_price),
            capital_gains_tax: fields.decimal("CapitalGainsTax", &self.capital_gains_tax),
            income_tax: fields.decimal("IncomeTax", &self.income_tax),
            sales_tax: fields.decimal("SalesTax", &self.sales_tax),
            property_taxes: fields.decimal("PropertyTaxes", &self.property_taxes),
            cost_of_living: fields.decimal("CostOfLiving", &self.cost_of_living),
            k12_school_performance: fields
                .decimal("K12SchoolPerformance", &self.k12_school_performance),
            higher_ed_school_performance: fields
                .decimal("HigherEdSchoolPerformance", &self.higher_ed_school_performance),
            forested_land: fields.decimal("ForestedLand", &self.forested_land),
            violent_crimes: fields.decimal("ViolentCrimes", &self.violent_crimes),
            population: fields.population("Population", &self.population),
            minimum_wage: fields.minimum_wage("MinimumWage", &self.minimum_wage),
            abortion: fields.grade("Abortion", &self.abortion),
            gun_laws: fields.grade("GunLaws", &self.gun_laws),
            political_leaning: fields.leaning("PoliticalLeaning", &self.political_leaning),
        };

        ProfileConversion {
            profile,
            warnings: fields.warnings,
        }
    }
}

struct FieldParser {
    state: String,
    warnings: Vec<FieldWarning>,
}

impl FieldParser {
    fn warn(
        &mut self,
        field: &'static str,
        value: &str,
        reason: FieldWarningReason,
    ) {
        self.warnings.push(FieldWarning {
            state: self.state.clone(),
            field,
            value: value.to_string(),
            reason,
        });
    }

    fn decimal(
        &mut self,
        field: &'static str,
        value: &str,
    ) -> Decimal {
        parse_stat_decimal(value).unwrap_or_else(|reason| {
            self.warn(field, value, reason);
            Decimal::ZERO
        })
    }

    fn population(
        &mut self,
        field: &'static str,
        value: &str,
    ) -> u64 {
        parse_population(value).unwrap_or_else(|reason| {
            self.warn(field, value, reason);
            0
        })
    }

    fn minimum_wage(
        &mut self,
        field: &'static str,
        value: &str,
    ) -> MinimumWage {
        parse_minimum_wage(value).unwrap_or_else(|reason| {
            self.warn(field, value, reason);
            MinimumWage::Amount(Decimal::ZERO)
        })
    }

    fn grade(
        &mut self,
        field: &'static str,
        value: &str,
    ) -> Option<LetterGrade> {
        let grade = LetterGrade::parse(value.trim());
        if grade.is_none() {
            self.warn(field, value, FieldWarningReason::UnrecognizedGrade);
        }
        grade
    }

    fn leaning(
        &mut self,
        field: &'static str,
        value: &str,
    ) -> Option<PoliticalLeaning> {
        let leaning = PoliticalLeaning::parse(value.trim());
        if leaning.is_none() {
            self.warn(field, value, FieldWarningReason::UnrecognizedLeaning);
        }
        leaning
    }
}

/// Strips decoration the source data puts around numbers: whitespace,
/// thousands separators, a leading `$` or `#` and a trailing `%`.
fn normalize_numeric(s: &str) -> String {
    let trimmed = s.trim();
    let trimmed = trimmed
        .strip_prefix('$')
        .or_else(|| trimmed.strip_prefix('#'))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    trimmed.trim().replace(',', "")
}

/// Parses a string-encoded statistic such as `"6.6"`, `"$1,234"` or `"#12"`.
pub fn parse_stat_decimal(s: &str) -> Result<Decimal, FieldWarningReason> {
    let normalized = normalize_numeric(s);
    if normalized.is_empty() {
        return Err(FieldWarningReason::Missing);
    }
    normalized
        .parse::<Decimal>()
        .map_err(|_| FieldWarningReason::InvalidNumber)
}

/// Parses a population count; fractional values are truncated.
pub fn parse_population(s: &str) -> Result<u64, FieldWarningReason> {
    let value = parse_stat_decimal(s)?;
    value
        .trunc()
        .to_u64()
        .ok_or(FieldWarningReason::InvalidNumber)
}

/// Parses a minimum wage, recognizing the `"No state law"` sentinel.
pub fn parse_minimum_wage(s: &str) -> Result<MinimumWage, FieldWarningReason> {
    if s.trim() == NO_STATE_LAW {
        return Ok(MinimumWage::NoStateLaw);
    }
    parse_stat_decimal(s).map(MinimumWage::Amount)
}
