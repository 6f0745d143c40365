//! Valuation engine module
//!
//! Capture-rate rescaling, per-strategy values, scenario composition,
//! revenue split, break-even economics and sensitivity sweeps. Everything
//! here is a pure function of its inputs and the calibration store.

mod capture;
mod engine;
mod revenue;
mod scenario;
mod strategy;
mod sweep;
mod types;

pub use capture::{
    baseline_weighted, rescale, weighted_capture, CaptureRates, ZoneBreakdown, ZoneRow,
};
pub use engine::{StrategyValues, ValuationEngine, ValuationResult};
pub use revenue::{
    breakeven, capacity_for_target, cost_coverage_share, margin_of_safety, split,
    value_per_plant_mw, BreakevenReport, RevenueSplit,
};
pub use scenario::{compose, ComposedValue, ScenarioSelection};
pub use strategy::{
    CapacityBasis, Strategy, StrategyDescriptor, StrategyValue, StrategyValueCalculator,
};
pub use sweep::{
    at_capacity, calibrated_levels, level_range, sweep_accuracy, sweep_capacity, SweepError,
    MAX_SWEEP_MAE, MAX_SWEEP_POINTS,
};
pub use types::{
    EngineInput, HedgeHubPolicy, HubSelection, NotComputable, Outcome, PlantConfiguration,
    DEFAULT_REVENUE_TARGET, MAX_CAPACITY_MW,
};
