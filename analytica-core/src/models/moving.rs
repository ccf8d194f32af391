use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The user's financial situation for a moving estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingInputs {
    /// Annual gross income in USD. Must be positive.
    pub income: Decimal,
    /// Value of the home the user expects to own, in USD.
    pub house_value: Decimal,
    /// Percent of income saved each year, in `[0, 100]`.
    pub savings_rate: Decimal,
}

impl Default for MovingInputs {
    fn default() -> Self {
        Self {
            income: Decimal::new(105_000, 0),
            house_value: Decimal::new(200_000, 0),
            savings_rate: Decimal::new(20, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MinimumWagePreference {
    #[default]
    #[serde(rename = "high")]
    High,
    #[serde(rename = "low")]
    Low,
}

impl MinimumWagePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Self::High),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AbortionStance {
    #[default]
    #[serde(rename = "pro-choice")]
    ProChoice,
    #[serde(rename = "pro-life")]
    ProLife,
}

impl AbortionStance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProChoice => "pro-choice",
            Self::ProLife => "pro-life",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pro-choice" => Some(Self::ProChoice),
            "pro-life" => Some(Self::ProLife),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GunStance {
    #[default]
    #[serde(rename = "pro-2A")]
    ProSecondAmendment,
    #[serde(rename = "pro-gun-laws")]
    ProGunLaws,
}

impl GunStance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProSecondAmendment => "pro-2A",
            Self::ProGunLaws => "pro-gun-laws",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pro-2A" => Some(Self::ProSecondAmendment),
            "pro-gun-laws" => Some(Self::ProGunLaws),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PoliticalPreference {
    #[default]
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "blue")]
    Blue,
}

impl PoliticalPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "red" => Some(Self::Red),
            "blue" => Some(Self::Blue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PopulationPreference {
    #[default]
    #[serde(rename = "small-town")]
    SmallTown,
    #[serde(rename = "city")]
    City,
}

impl PopulationPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmallTown => "small-town",
            Self::City => "city",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small-town" => Some(Self::SmallTown),
            "city" => Some(Self::City),
            _ => None,
        }
    }
}

/// Direction the user wants each qualitative category to move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MovingPreferences {
    pub minimum_wage: MinimumWagePreference,
    pub abortion: AbortionStance,
    pub gun: GunStance,
    pub political: PoliticalPreference,
    pub population: PopulationPreference,
}

/// A complete moving question, with both states referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingRequest {
    pub from_state: String,
    pub to_state: String,
    pub inputs: MovingInputs,
    pub preferences: MovingPreferences,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_inputs_match_calculator_defaults() {
        let inputs = MovingInputs::default();

        assert_eq!(inputs.income, dec!(105000));
        assert_eq!(inputs.house_value, dec!(200000));
        assert_eq!(inputs.savings_rate, dec!(20));
    }

    #[test]
    fn default_preferences() {
        let prefs = MovingPreferences::default();

        assert_eq!(prefs.minimum_wage, MinimumWagePreference::High);
        assert_eq!(prefs.abortion, AbortionStance::ProChoice);
        assert_eq!(prefs.gun, GunStance::ProSecondAmendment);
        assert_eq!(prefs.political, PoliticalPreference::Red);
        assert_eq!(prefs.population, PopulationPreference::SmallTown);
    }

    #[test]
    fn preference_codes_round_trip() {
        for code in ["high", "low"] {
            assert_eq!(MinimumWagePreference::parse(code).map(|p| p.as_str()), Some(code));
        }
        for code in ["pro-choice", "pro-life"] {
            assert_eq!(AbortionStance::parse(code).map(|p| p.as_str()), Some(code));
        }
        for code in ["pro-2A", "pro-gun-laws"] {
            assert_eq!(GunStance::parse(code).map(|p| p.as_str()), Some(code));
        }
        for code in ["red", "blue"] {
            assert_eq!(PoliticalPreference::parse(code).map(|p| p.as_str()), Some(code));
        }
        for code in ["small-town", "city"] {
            assert_eq!(PopulationPreference::parse(code).map(|p| p.as_str()), Some(code));
        }
    }

    #[test]
    fn preference_parse_rejects_unknown_codes() {
        assert_eq!(GunStance::parse("pro-2a"), None);
        assert_eq!(PopulationPreference::parse("suburb"), None);
    }

    #[test]
    fn preferences_deserialize_from_codes() {
        let json = r#"{
            "minimum_wage": "low",
            "abortion": "pro-life",
            "gun": "pro-gun-laws",
            "political": "blue",
            "population": "city"
        }"#;

        let prefs: MovingPreferences = serde_json::from_str(json).unwrap();

        assert_eq!(
            prefs,
            MovingPreferences {
                minimum_wage: MinimumWagePreference::Low,
                abortion: AbortionStance::ProLife,
                gun: GunStance::ProGunLaws,
                political: PoliticalPreference::Blue,
                population: PopulationPreference::City,
            }
        );
    }
}
