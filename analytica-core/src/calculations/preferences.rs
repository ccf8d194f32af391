//! Qualitative comparison of two states against the user's preferences.
//!
//! | Category          | Basis                     | Better when                                      |
//! |-------------------|---------------------------|--------------------------------------------------|
//! | Abortion          | grade points              | pro-choice: `to ≥ from`; pro-life: `to ≤ from`   |
//! | Gun laws          | grade points              | pro-2A: `to ≤ from`; pro-gun-laws: `to ≥ from`   |
//! | Political leaning | destination is red        | red: red; blue: not red                          |
//! | Minimum wage      | hourly amount             | high: `to ≥ from`; low: `to ≤ from`              |
//! | Population        | head count                | small-town: `to ≤ from`; city: `to ≥ from`       |
//!
//! Every other case is `Worse`, except minimum wage, which is `Neutral` when
//! either state has no state-level law. Ties count as `Better`.

use rust_decimal::Decimal;

use crate::{
    AbortionStance, GunStance, LetterGrade, MinimumWage, MinimumWagePreference,
    MovingPreferences, PoliticalLeaning, PoliticalPreference, PopulationPreference,
    PreferenceCategory, PreferenceVerdicts, StateProfile, Verdict, grade_points,
    parse_minimum_wage, parse_population,
};

/// Judges each preference category for a move.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceComparator {
    preferences: MovingPreferences,
}

impl PreferenceComparator {
    pub fn new(preferences: &MovingPreferences) -> Self {
        Self {
            preferences: *preferences,
        }
    }

    pub fn abortion(
        &self,
        from: Option<LetterGrade>,
        to: Option<LetterGrade>,
    ) -> Verdict {
        let (from, to) = (grade_points(from), grade_points(to));
        Verdict::from_condition(match self.preferences.abortion {
            AbortionStance::ProChoice => to >= from,
            AbortionStance::ProLife => to <= from,
        })
    }

    pub fn gun_laws(
        &self,
        from: Option<LetterGrade>,
        to: Option<LetterGrade>,
    ) -> Verdict {
        let (from, to) = (grade_points(from), grade_points(to));
        Verdict::from_condition(match self.preferences.gun {
            GunStance::ProSecondAmendment => to <= from,
            GunStance::ProGunLaws => to >= from,
        })
    }

    /// Only the destination's leaning matters. An unrecognized leaning is
    /// not red.
    pub fn political_leaning(
        &self,
        to: Option<PoliticalLeaning>,
    ) -> Verdict {
        self.political_leaning_is_red(to.is_some_and(|leaning| leaning.is_red()))
    }

    fn political_leaning_is_red(
        &self,
        destination_is_red: bool,
    ) -> Verdict {
        Verdict::from_condition(match self.preferences.political {
            PoliticalPreference::Red => destination_is_red,
            PoliticalPreference::Blue => !destination_is_red,
        })
    }

    pub fn minimum_wage(
        &self,
        from: MinimumWage,
        to: MinimumWage,
    ) -> Verdict {
        let (Some(from), Some(to)) = (from.amount(), to.amount()) else {
            return Verdict::Neutral;
        };
        Verdict::from_condition(match self.preferences.minimum_wage {
            MinimumWagePreference::High => to >= from,
            MinimumWagePreference::Low => to <= from,
        })
    }

    pub fn population(
        &self,
        from: u64,
        to: u64,
    ) -> Verdict {
        Verdict::from_condition(match self.preferences.population {
            PopulationPreference::SmallTown => to <= from,
            PopulationPreference::City => to >= from,
        })
    }

    pub fn compare(
        &self,
        category: PreferenceCategory,
        from: &StateProfile,
        to: &StateProfile,
    ) -> Verdict {
        match category {
            PreferenceCategory::Abortion => self.abortion(from.abortion, to.abortion),
            PreferenceCategory::GunLaws => self.gun_laws(from.gun_laws, to.gun_laws),
            PreferenceCategory::PoliticalLeaning => self.political_leaning(to.political_leaning),
            PreferenceCategory::MinimumWage => self.minimum_wage(from.minimum_wage, to.minimum_wage),
            PreferenceCategory::Population => self.population(from.population, to.population),
        }
    }

    pub fn compare_all(
        &self,
        from: &StateProfile,
        to: &StateProfile,
    ) -> PreferenceVerdicts {
        PreferenceVerdicts {
            abortion: self.compare(PreferenceCategory::Abortion, from, to),
            gun_laws: self.compare(PreferenceCategory::GunLaws, from, to),
            political_leaning: self.compare(PreferenceCategory::PoliticalLeaning, from, to),
            minimum_wage: self.compare(PreferenceCategory::MinimumWage, from, to),
            population: self.compare(PreferenceCategory::Population, from, to),
        }
    }
}

/// Compares one category from raw, string-encoded values as they appear in
/// state records.
///
/// Unrecognized grades score zero. The political test checks whether
/// `to_value` contains `Red`. Wages and populations use the same
/// normalization as record ingestion and fall back to zero.
///
/// # Examples
///
/// ```
/// use analytica_core::calculations::compare_category;
/// use analytica_core::{MovingPreferences, PreferenceCategory, Verdict};
///
/// let prefs = MovingPreferences::default();
/// assert_eq!(
///     compare_category(PreferenceCategory::MinimumWage, "No state law", "$15", &prefs),
///     Verdict::Neutral
/// );
/// ```
pub fn compare_category(
    category: PreferenceCategory,
    from_value: &str,
    to_value: &str,
    preferences: &MovingPreferences,
) -> Verdict {
    let comparator = PreferenceComparator::new(preferences);
    match category {
        PreferenceCategory::Abortion => {
            comparator.abortion(LetterGrade::parse(from_value), LetterGrade::parse(to_value))
        }
        PreferenceCategory::GunLaws => {
            comparator.gun_laws(LetterGrade::parse(from_value), LetterGrade::parse(to_value))
        }
        PreferenceCategory::PoliticalLeaning => {
            comparator.political_leaning_is_red(to_value.contains("Red"))
        }
        PreferenceCategory::MinimumWage => {
            comparator.minimum_wage(raw_minimum_wage(from_value), raw_minimum_wage(to_value))
        }
        PreferenceCategory::Population => comparator.population(
            parse_population(from_value).unwrap_or(0),
            parse_population(to_value).unwrap_or(0),
        ),
    }
}

fn raw_minimum_wage(value: &str) -> MinimumWage {
    parse_minimum_wage(value).unwrap_or(MinimumWage::Amount(Decimal::ZERO))
}
