//! Annual financial impact of moving between two states.
//!
//! The estimate is the sum of four independent components, each signed so
//! that a positive value means the move saves the user money:
//!
//! | Component      | Basis                                                   |
//! |----------------|---------------------------------------------------------|
//! | Income tax     | effective rate approximated from each top marginal rate |
//! | Sales tax      | half of consumption × rate difference                   |
//! | Property tax   | home value × rate difference                            |
//! | Cost of living | consumption × (1 − to index / from index)               |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use analytica_core::calculations::MovingImpactEstimator;
//! use analytica_core::{MovingInputs, StateProfile};
//!
//! let mut california = StateProfile::empty("California");
//! california.income_tax = dec!(13.3);
//! california.sales_tax = dec!(7.25);
//! california.property_taxes = dec!(0.71);
//! california.cost_of_living = dec!(151.7);
//!
//! let mut texas = StateProfile::empty("Texas");
//! texas.sales_tax = dec!(6.25);
//! texas.property_taxes = dec!(1.6);
//! texas.cost_of_living = dec!(91.5);
//!
//! let estimate = MovingImpactEstimator::new(&california, &texas)
//!     .estimate(&MovingInputs::default())
//!     .unwrap();
//!
//! let rounded = estimate.breakdown.rounded();
//! assert_eq!(rounded.income_tax, dec!(7261.80));
//! assert_eq!(rounded.total, dec!(39236.01));
//! assert!(estimate.warnings.is_empty());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::cost_of_living::cost_of_living_delta;
use crate::calculations::income_tax::income_tax_delta;
use crate::calculations::metrics::compare_metrics;
use crate::calculations::preferences::PreferenceComparator;
use crate::calculations::property_tax::property_tax_delta;
use crate::calculations::sales_tax::sales_tax_delta;
use crate::{
    ImpactBreakdown, ImpactEstimate, ImpactWarning, MetricComparison, MovingInputs,
    MovingRequest, PreferenceVerdicts, StateProfile, find_state,
};

/// Errors that can occur while estimating a move.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MovingImpactError {
    /// Savings rate is outside `[0, 100]` percent.
    #[error("savings rate {0}% is outside 0-100%")]
    SavingsRateOutOfRange(Decimal),

    #[error("income must be positive, got {0}")]
    NonPositiveIncome(Decimal),

    #[error("house value cannot be negative, got {0}")]
    NegativeHouseValue(Decimal),

    /// No state with this name is available.
    #[error("state not found: {0}")]
    MissingState(String),

    /// An intermediate value or the total exceeds the range of `Decimal`.
    #[error("estimate is too large to represent")]
    Overflow,
}

/// Estimator for one origin/destination pair.
///
/// The estimator is stateless; the same instance can be reused for any
/// number of inputs.
pub struct MovingImpactEstimator<'a> {
    from: &'a StateProfile,
    to: &'a StateProfile,
}

impl<'a> MovingImpactEstimator<'a> {
    pub fn new(
        from: &'a StateProfile,
        to: &'a StateProfile,
    ) -> Self {
        Self { from, to }
    }

    /// Validates the inputs and computes the full breakdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the savings rate is outside `[0, 100]`, income is
    /// not positive, the house value is negative, or a component or the
    /// total does not fit in a `Decimal`.
    pub fn estimate(
        &self,
        inputs: &MovingInputs,
    ) -> Result<ImpactEstimate, MovingImpactError> {
        validate_inputs(inputs)?;

        let mut warnings = Vec::new();

        let breakdown = ImpactBreakdown::from_components(
            self.income_tax(inputs)?,
            self.sales_tax(inputs)?,
            self.property_tax(inputs)?,
            self.cost_of_living(inputs, &mut warnings)?,
        )
        .ok_or(MovingImpactError::Overflow)?;

        tracing::debug!(
            from = %self.from.name,
            to = %self.to.name,
            total = %breakdown.total,
            "estimated moving impact"
        );

        Ok(ImpactEstimate {
            breakdown,
            warnings,
        })
    }

    fn income_tax(
        &self,
        inputs: &MovingInputs,
    ) -> Result<Decimal, MovingImpactError> {
        income_tax_delta(inputs.income, self.from.income_tax, self.to.income_tax)
            .ok_or(MovingImpactError::Overflow)
    }

    fn sales_tax(
        &self,
        inputs: &MovingInputs,
    ) -> Result<Decimal, MovingImpactError> {
        sales_tax_delta(
            inputs.income,
            inputs.savings_rate,
            self.from.sales_tax,
            self.to.sales_tax,
        )
        .ok_or(MovingImpactError::Overflow)
    }

    fn property_tax(
        &self,
        inputs: &MovingInputs,
    ) -> Result<Decimal, MovingImpactError> {
        property_tax_delta(
            inputs.house_value,
            self.from.property_taxes,
            self.to.property_taxes,
        )
        .ok_or(MovingImpactError::Overflow)
    }

    /// Zero when the origin index is zero; the caller gets a warning instead.
    fn cost_of_living(
        &self,
        inputs: &MovingInputs,
        warnings: &mut Vec<ImpactWarning>,
    ) -> Result<Decimal, MovingImpactError> {
        if self.from.cost_of_living.is_zero() {
            warnings.push(ImpactWarning::ZeroCostOfLivingIndex {
                state: self.from.name.clone(),
            });
            return Ok(Decimal::ZERO);
        }

        cost_of_living_delta(
            inputs.income,
            inputs.savings_rate,
            self.from.cost_of_living,
            self.to.cost_of_living,
        )
        .ok_or(MovingImpactError::Overflow)
    }
}

fn validate_inputs(inputs: &MovingInputs) -> Result<(), MovingImpactError> {
    if inputs.savings_rate < Decimal::ZERO || inputs.savings_rate > Decimal::ONE_HUNDRED {
        return Err(MovingImpactError::SavingsRateOutOfRange(inputs.savings_rate));
    }
    if inputs.income <= Decimal::ZERO {
        return Err(MovingImpactError::NonPositiveIncome(inputs.income));
    }
    if inputs.house_value < Decimal::ZERO {
        return Err(MovingImpactError::NegativeHouseValue(inputs.house_value));
    }
    Ok(())
}

/// Estimates the annual impact of moving from `from` to `to`.
///
/// Shorthand for `MovingImpactEstimator::new(from, to).estimate(inputs)`.
pub fn estimate_moving_impact(
    from: &StateProfile,
    to: &StateProfile,
    inputs: &MovingInputs,
) -> Result<ImpactEstimate, MovingImpactError> {
    MovingImpactEstimator::new(from, to).estimate(inputs)
}

/// Everything shown for one origin/destination comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingAnalysis {
    pub from: StateProfile,
    pub to: StateProfile,
    pub estimate: ImpactEstimate,
    pub verdicts: PreferenceVerdicts,
    pub metrics: Vec<MetricComparison>,
}

/// Resolves both states by name and runs the estimator and comparators.
///
/// # Errors
///
/// Returns [`MovingImpactError::MissingState`] when either name is not in
/// `states`, or any input validation error from
/// [`MovingImpactEstimator::estimate`].
pub fn analyze_move(
    states: &[StateProfile],
    request: &MovingRequest,
) -> Result<MovingAnalysis, MovingImpactError> {
    let from = resolve(states, &request.from_state)?;
    let to = resolve(states, &request.to_state)?;

    let estimate = MovingImpactEstimator::new(from, to).estimate(&request.inputs)?;
    let verdicts = PreferenceComparator::new(&request.preferences).compare_all(from, to);
    let metrics = compare_metrics(from, to);

    Ok(MovingAnalysis {
        from: from.clone(),
        to: to.clone(),
        estimate,
        verdicts,
        metrics,
    })
}

fn resolve<'a>(
    states: &'a [StateProfile],
    name: &str,
) -> Result<&'a StateProfile, MovingImpactError> {
    find_state(states, name).ok_or_else(|| {
        tracing::debug!(name, available = states.len(), "state not found");
        MovingImpactError::MissingState(name.to_string())
    })
}
