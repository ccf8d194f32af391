//! Moving-impact calculations.
//!
//! Each financial component has its own estimator module; `moving_impact`
//! validates inputs and aggregates them. The comparators in `preferences` and
//! `metrics` produce the qualitative side of a comparison.

pub mod common;
pub mod cost_of_living;
pub mod income_tax;
pub mod metrics;
pub mod moving_impact;
pub mod preferences;
pub mod property_tax;
pub mod sales_tax;
mod summary;

pub use common::format_usd;
pub use cost_of_living::cost_of_living_delta;
pub use income_tax::{IncomeBracket, effective_income_tax, income_tax_delta};
pub use metrics::compare_metrics;
pub use moving_impact::{
    MovingAnalysis, MovingImpactError, MovingImpactEstimator, analyze_move, estimate_moving_impact,
};
pub use preferences::{PreferenceComparator, compare_category};
pub use property_tax::property_tax_delta;
pub use sales_tax::{TAXABLE_SPEND_SHARE, sales_tax_delta};
