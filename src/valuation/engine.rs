//! Valuation engine
//!
//! Runs the full pipeline for one [`EngineInput`]: strategy values,
//! scenario filter, fee split and capacity target.

use super::revenue::{self, BreakevenReport, RevenueSplit};
use super::scenario::{compose, ComposedValue, ScenarioSelection};
use super::strategy::{Strategy, StrategyValue, StrategyValueCalculator};
use super::types::{EngineInput, Outcome};
use crate::calibration::{AccuracyLevel, CalibrationError, CalibrationStore};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-strategy values before the scenario filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyValues {
    pub rn: StrategyValue,
    pub vt_alpha: StrategyValue,
    pub vt_hedge: StrategyValue,
}

impl StrategyValues {
    pub fn get(&self, strategy: Strategy) -> &StrategyValue {
        match strategy {
            Strategy::Rn => &self.rn,
            Strategy::VtAlpha => &self.vt_alpha,
            Strategy::VtHedge => &self.vt_hedge,
        }
    }
}

/// Output of one valuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Accuracy level as requested
    pub accuracy: AccuracyLevel,
    /// Level after clamping to the calibrated domain
    pub effective_accuracy: AccuracyLevel,
    pub high_threshold: Decimal,
    pub low_threshold: Decimal,
    pub scenario: ScenarioSelection,
    pub plant_capacity_mw: Decimal,
    pub virtual_position_mw: Decimal,
    pub fee_rate_pct: Decimal,
    pub strategies: StrategyValues,
    /// Annual values after the scenario filter
    pub annual: ComposedValue,
    pub split: RevenueSplit,
    /// Total value per MW of plant
    pub value_per_mw: Outcome<Decimal>,
    pub revenue_target: Decimal,
    /// Plant MW needed for fee revenue to reach the target
    pub mw_for_target: Outcome<Decimal>,
}

impl ValuationResult {
    pub fn total_value(&self) -> Decimal {
        self.annual.total
    }

    pub fn fg_revenue(&self) -> Decimal {
        self.split.fg_revenue
    }

    pub fn client_uplift(&self) -> Decimal {
        self.split.client_uplift
    }

    /// Break-even economics for an annual vendor budget
    pub fn breakeven(&self, annual_budget: Decimal) -> Outcome<BreakevenReport> {
        BreakevenReport::evaluate(
            annual_budget,
            self.revenue_target,
            self.mw_for_target,
            self.value_per_mw,
        )
    }
}

/// Pure valuation engine over a validated calibration store
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    store: CalibrationStore,
}

impl ValuationEngine {
    pub fn new(store: CalibrationStore) -> Self {
        Self { store }
    }

    /// Engine over the embedded calibration tables
    pub fn embedded() -> Result<Self, CalibrationError> {
        Ok(Self::new(CalibrationStore::embedded()?))
    }

    pub fn store(&self) -> &CalibrationStore {
        &self.store
    }

    pub fn calculator(&self) -> StrategyValueCalculator<'_> {
        StrategyValueCalculator::new(&self.store)
    }

    /// Evaluate one parameter set
    pub fn evaluate(&self, input: &EngineInput) -> ValuationResult {
        let calc = self.calculator();
        let strategies = StrategyValues {
            rn: calc.evaluate(Strategy::Rn, input),
            vt_alpha: calc.evaluate(Strategy::VtAlpha, input),
            vt_hedge: calc.evaluate(Strategy::VtHedge, input),
        };

        let annual = compose(
            input.scenario,
            strategies.rn.annual,
            strategies.vt_alpha.annual,
            strategies.vt_hedge.annual,
        );
        let split = revenue::split(annual.total, input.plant.fee_rate_pct);
        let plant_mw = input.plant.plant_capacity_mw;
        let value_per_mw = revenue::value_per_plant_mw(annual.total, plant_mw);
        let mw_for_target =
            revenue::capacity_for_target(split.fg_revenue, plant_mw, input.revenue_target);

        tracing::debug!(
            mae = %input.accuracy.value(),
            scenario = %input.scenario,
            total = %annual.total,
            fg_revenue = %split.fg_revenue,
            "Valuation computed"
        );

        ValuationResult {
            accuracy: input.accuracy,
            effective_accuracy: input.accuracy.clamped(),
            high_threshold: input.accuracy.high_threshold(),
            low_threshold: input.accuracy.low_threshold(),
            scenario: input.scenario,
            plant_capacity_mw: plant_mw,
            virtual_position_mw: input.plant.virtual_position_mw,
            fee_rate_pct: input.plant.fee_rate_pct,
            strategies,
            annual,
            split,
            value_per_mw,
            revenue_target: input.revenue_target,
            mw_for_target,
        }
    }
}
