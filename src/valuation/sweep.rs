//! Sensitivity sweeps
//!
//! Each point is an independent evaluation with one parameter substituted.

use super::engine::{ValuationEngine, ValuationResult};
use super::types::{EngineInput, MAX_CAPACITY_MW};
use crate::calibration::{AccuracyLevel, MAX_LEVEL, MIN_LEVEL};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Largest MAE a level range may span
pub const MAX_SWEEP_MAE: Decimal = dec!(100);

/// Most points a single level range may produce
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Sweep parameter errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SweepError {
    #[error("MAE {value} is outside [0, {max}]")]
    AccuracyOutOfRange { value: Decimal, max: Decimal },
    #[error("sweep would produce more than {max} points")]
    TooManyPoints { max: usize },
    #[error("capacity {value} MW is outside [0, {max}]")]
    CapacityOutOfRange { value: Decimal, max: Decimal },
    #[error("virtual position at {capacity} MW would exceed {max} MW")]
    VirtualOutOfRange { capacity: Decimal, max: Decimal },
}

/// Integer MAE levels across the calibrated domain
pub fn calibrated_levels() -> Vec<AccuracyLevel> {
    (MIN_LEVEL..=MAX_LEVEL).map(AccuracyLevel::from).collect()
}

/// Evenly spaced levels from `start` to `end` inclusive
///
/// A non-positive step yields just the start level. Both ends must lie in
/// `[0, MAX_SWEEP_MAE]` and the range must stay under `MAX_SWEEP_POINTS`.
pub fn level_range(
    start: Decimal,
    end: Decimal,
    step: Decimal,
) -> Result<Vec<AccuracyLevel>, SweepError> {
    for value in [start, end] {
        if value < Decimal::ZERO || value > MAX_SWEEP_MAE {
            return Err(SweepError::AccuracyOutOfRange {
                value,
                max: MAX_SWEEP_MAE,
            });
        }
    }
    if step <= Decimal::ZERO || end < start {
        return Ok(vec![AccuracyLevel::new(start)]);
    }
    let too_many = SweepError::TooManyPoints {
        max: MAX_SWEEP_POINTS,
    };
    match (end - start).checked_div(step) {
        Some(span) if span < Decimal::from(MAX_SWEEP_POINTS) => {}
        _ => return Err(too_many),
    }
    let mut levels = Vec::new();
    let mut level = start;
    while level <= end {
        levels.push(AccuracyLevel::new(level));
        match level.checked_add(step) {
            Some(next) => level = next,
            None => break,
        }
    }
    Ok(levels)
}

/// Value the input at each accuracy level, in order
pub fn sweep_accuracy(
    engine: &ValuationEngine,
    levels: &[AccuracyLevel],
    input: &EngineInput,
) -> Vec<ValuationResult> {
    tracing::debug!(points = levels.len(), "Running accuracy sweep");
    levels
        .iter()
        .map(|&level| engine.evaluate(&input.with_accuracy(level)))
        .collect()
}

/// Value the input at each plant capacity, in order
///
/// The virtual position scales with capacity so the virtual/plant ratio of
/// the input is preserved. Every capacity is checked before any point is
/// evaluated.
pub fn sweep_capacity(
    engine: &ValuationEngine,
    capacities_mw: &[Decimal],
    input: &EngineInput,
) -> Result<Vec<ValuationResult>, SweepError> {
    tracing::debug!(points = capacities_mw.len(), "Running capacity sweep");
    let inputs = capacities_mw
        .iter()
        .map(|&capacity| at_capacity(input, capacity))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(inputs.iter().map(|resized| engine.evaluate(resized)).collect())
}

/// Input resized to a new plant capacity
pub fn at_capacity(input: &EngineInput, capacity_mw: Decimal) -> Result<EngineInput, SweepError> {
    if capacity_mw < Decimal::ZERO || capacity_mw > MAX_CAPACITY_MW {
        return Err(SweepError::CapacityOutOfRange {
            value: capacity_mw,
            max: MAX_CAPACITY_MW,
        });
    }
    let mut resized = *input;
    let base_plant = input.plant.plant_capacity_mw;
    if base_plant > Decimal::ZERO {
        resized.plant.virtual_position_mw = input
            .plant
            .virtual_position_mw
            .checked_mul(capacity_mw)
            .and_then(|scaled| scaled.checked_div(base_plant))
            .filter(|virtual_mw| *virtual_mw <= MAX_CAPACITY_MW)
            .ok_or(SweepError::VirtualOutOfRange {
                capacity: capacity_mw,
                max: MAX_CAPACITY_MW,
            })?;
    }
    resized.plant.plant_capacity_mw = capacity_mw;
    Ok(resized)
}
