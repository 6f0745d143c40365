//! Revenue split and break-even economics
//!
//! Every ratio here has a zero denominator case; those come back as
//! [`Outcome::NotComputable`] so callers can show guidance instead of a number.
//! Quotients too large for a `Decimal` come back as `NotComputable::Overflow`.

use super::types::{NotComputable, Outcome};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Total value divided between vendor and client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RevenueSplit {
    /// Vendor fee revenue
    pub fg_revenue: Decimal,
    /// Value retained by the client
    pub client_uplift: Decimal,
}

/// Split total value by the vendor fee percentage
///
/// The two parts always add back to `total_value` exactly.
pub fn split(total_value: Decimal, fee_rate_pct: Decimal) -> RevenueSplit {
    let fg_revenue = total_value * fee_rate_pct / dec!(100);
    RevenueSplit {
        fg_revenue,
        client_uplift: total_value - fg_revenue,
    }
}

/// Plant capacity needed for fee revenue to reach `target`
///
/// Uses the fee revenue per MW of the current plant.
pub fn capacity_for_target(
    fg_revenue: Decimal,
    plant_mw: Decimal,
    target: Decimal,
) -> Outcome<Decimal> {
    if plant_mw <= Decimal::ZERO {
        return Outcome::NotComputable(NotComputable::ZeroPlantCapacity);
    }
    if fg_revenue <= Decimal::ZERO {
        return Outcome::NotComputable(NotComputable::ZeroFeeRevenue);
    }
    ratio(fg_revenue, plant_mw).and_then(|fg_per_mw| ratio(target, fg_per_mw))
}

/// Vendor cost basis per contracted MW
pub fn breakeven(annual_budget: Decimal, mw_contracted: Decimal) -> Outcome<Decimal> {
    if mw_contracted <= Decimal::ZERO {
        return Outcome::NotComputable(NotComputable::ZeroContractedCapacity);
    }
    ratio(annual_budget, mw_contracted)
}

/// Projected fee revenue per MW over break-even per MW
pub fn margin_of_safety(
    fg_revenue_per_mw_at_scale: Decimal,
    breakeven_per_mw: Decimal,
) -> Outcome<Decimal> {
    if breakeven_per_mw <= Decimal::ZERO {
        return Outcome::NotComputable(NotComputable::ZeroBreakeven);
    }
    ratio(fg_revenue_per_mw_at_scale, breakeven_per_mw)
}

/// Share of projected value needed to cover costs (inverse of the margin)
pub fn cost_coverage_share(margin_of_safety: Decimal) -> Outcome<Decimal> {
    if margin_of_safety <= Decimal::ZERO {
        return Outcome::NotComputable(NotComputable::ZeroMarginOfSafety);
    }
    ratio(Decimal::ONE, margin_of_safety)
}

/// Total value per MW of plant capacity
pub fn value_per_plant_mw(total_value: Decimal, plant_mw: Decimal) -> Outcome<Decimal> {
    if plant_mw <= Decimal::ZERO {
        return Outcome::NotComputable(NotComputable::ZeroPlantCapacity);
    }
    ratio(total_value, plant_mw)
}

fn ratio(numerator: Decimal, denominator: Decimal) -> Outcome<Decimal> {
    match numerator.checked_div(denominator) {
        Some(value) => Outcome::Computed(value),
        None => Outcome::NotComputable(NotComputable::Overflow),
    }
}

/// Break-even economics at the capacity that meets the revenue target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakevenReport {
    /// Vendor annual operating budget
    pub annual_budget: Decimal,
    /// Annual vendor revenue target
    pub revenue_target: Decimal,
    /// Contracted MW: capacity needed to reach the revenue target
    pub mw_contracted: Decimal,
    /// Vendor cost per contracted MW
    pub breakeven_per_mw: Decimal,
    /// Vendor revenue per MW at the target
    pub fg_revenue_per_mw_at_scale: Decimal,
    /// Vendor profit per MW above break-even
    pub fg_margin_per_mw_at_scale: Decimal,
    /// Client share per MW
    pub client_uplift_per_mw: Decimal,
    /// Total value per MW of plant
    pub total_per_mw: Decimal,
    /// Fee revenue at scale over break-even
    pub margin_of_safety: Outcome<Decimal>,
    /// Fraction of projected value needed to cover costs
    pub cost_coverage_share: Outcome<Decimal>,
}

impl BreakevenReport {
    /// Build the report from a valuation's capacity target and per-MW value
    pub fn evaluate(
        annual_budget: Decimal,
        revenue_target: Decimal,
        mw_for_target: Outcome<Decimal>,
        value_per_mw: Outcome<Decimal>,
    ) -> Outcome<Self> {
        mw_for_target.and_then(|mw_contracted| {
            breakeven(annual_budget, mw_contracted).and_then(|breakeven_per_mw| {
                ratio(revenue_target, mw_contracted).and_then(|fg_revenue_per_mw_at_scale| {
                    value_per_mw.map(|total_per_mw| {
                        let margin =
                            margin_of_safety(fg_revenue_per_mw_at_scale, breakeven_per_mw);
                        Self {
                            annual_budget,
                            revenue_target,
                            mw_contracted,
                            breakeven_per_mw,
                            fg_revenue_per_mw_at_scale,
                            fg_margin_per_mw_at_scale: fg_revenue_per_mw_at_scale
                                - breakeven_per_mw,
                            client_uplift_per_mw: total_per_mw - fg_revenue_per_mw_at_scale,
                            total_per_mw,
                            margin_of_safety: margin,
                            cost_coverage_share: margin.and_then(cost_coverage_share),
                        }
                    })
                })
            })
        })
    }
}
