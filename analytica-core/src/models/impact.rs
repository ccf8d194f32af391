use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// Estimated annual financial effect of a move, in USD.
///
/// Every component uses the same sign convention: positive means moving
/// saves the user money, negative means it costs more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImpactBreakdown {
    pub income_tax: Decimal,
    pub sales_tax: Decimal,
    pub property_tax: Decimal,
    pub cost_of_living: Decimal,
    /// Sum of the four components.
    pub total: Decimal,
}

impl ImpactBreakdown {
    /// Builds a breakdown whose total is the sum of the components, or
    /// `None` if the sum does not fit in a `Decimal`.
    pub fn from_components(
        income_tax: Decimal,
        sales_tax: Decimal,
        property_tax: Decimal,
        cost_of_living: Decimal,
    ) -> Option<Self> {
        let total = income_tax
            .checked_add(sales_tax)?
            .checked_add(property_tax)?
            .checked_add(cost_of_living)?;

        Some(Self {
            income_tax,
            sales_tax,
            property_tax,
            cost_of_living,
            total,
        })
    }

    /// Every field rounded to cents for display.
    ///
    /// The total is rounded independently, so it may differ by a cent from
    /// the sum of the rounded components.
    pub fn rounded(&self) -> Self {
        Self {
            income_tax: round_half_up(self.income_tax),
            sales_tax: round_half_up(self.sales_tax),
            property_tax: round_half_up(self.property_tax),
            cost_of_living: round_half_up(self.cost_of_living),
            total: round_half_up(self.total),
        }
    }

    pub fn saves_money(&self) -> bool {
        self.total > Decimal::ZERO
    }
}

/// A data problem the estimator worked around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactWarning {
    /// The origin state's cost-of-living index is zero, so the ratio is
    /// undefined; the cost-of-living component was set to zero.
    ZeroCostOfLivingIndex { state: String },
}

impl fmt::Display for ImpactWarning {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::ZeroCostOfLivingIndex { state } => write!(
                f,
                "{state} has a cost-of-living index of 0; cost-of-living impact omitted"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactEstimate {
    pub breakdown: ImpactBreakdown,
    pub warnings: Vec<ImpactWarning>,
}
