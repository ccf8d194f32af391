mod grade;
mod impact;
mod minimum_wage;
mod moving;
mod political_leaning;
mod state_profile;
mod state_record;
mod verdict;

pub use grade::{LetterGrade, grade_points};
pub use impact::{ImpactBreakdown, ImpactEstimate, ImpactWarning};
pub use minimum_wage::{MinimumWage, NO_STATE_LAW};
pub use moving::{
    AbortionStance, GunStance, MinimumWagePreference, MovingInputs, MovingPreferences,
    MovingRequest, PoliticalPreference, PopulationPreference,
};
pub use political_leaning::PoliticalLeaning;
pub use state_profile::{StateProfile, default_state_pair, find_state};
pub use state_record::{
    FieldWarning, FieldWarningReason, ProfileConversion, StateRecord, parse_minimum_wage,
    parse_population, parse_stat_decimal,
};
pub use verdict::{MetricComparison, PreferenceCategory, PreferenceVerdicts, StateMetric, Verdict};
