//! Comparison against the reference configuration

use crate::valuation::{
    EngineInput, NotComputable, Outcome, ValuationEngine, ValuationResult,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Percent change of `current` relative to `reference`
pub fn percent_change(current: Decimal, reference: Decimal) -> Outcome<Decimal> {
    if reference.is_zero() {
        return Outcome::NotComputable(NotComputable::ZeroBaseline);
    }
    Outcome::Computed((current / reference - Decimal::ONE) * dec!(100))
}

/// Differences between a valuation and the baseline valuation
#[derive(Debug, Clone, Serialize)]
pub struct BaselineDelta {
    pub baseline: ValuationResult,
    /// Change in value per plant MW, percent
    pub per_mw_change_pct: Outcome<Decimal>,
    /// Change in total annual value, percent
    pub total_change_pct: Outcome<Decimal>,
    /// Inputs that differ from the baseline
    pub changed: Vec<String>,
}

impl BaselineDelta {
    /// Changes below a tenth of a percent are not worth reporting
    pub fn is_material(&self) -> bool {
        self.per_mw_change_pct
            .value()
            .is_some_and(|change| change.abs() > dec!(0.1))
    }
}

pub fn delta_vs_baseline(
    engine: &ValuationEngine,
    input: &EngineInput,
    result: &ValuationResult,
) -> BaselineDelta {
    let reference = EngineInput::baseline();
    let baseline = engine.evaluate(&reference);

    let per_mw_change_pct = result.value_per_mw.and_then(|current| {
        baseline
            .value_per_mw
            .and_then(|reference| percent_change(current, reference))
    });
    let total_change_pct = percent_change(result.total_value(), baseline.total_value());

    BaselineDelta {
        baseline,
        per_mw_change_pct,
        total_change_pct,
        changed: changed_inputs(&reference, input),
    }
}

fn changed_inputs(reference: &EngineInput, input: &EngineInput) -> Vec<String> {
    let mut changed = Vec::new();
    if input.accuracy != reference.accuracy {
        changed.push(format!("MAE: {} -> {}", reference.accuracy, input.accuracy));
    }
    if input.plant.plant_capacity_mw != reference.plant.plant_capacity_mw {
        changed.push(format!(
            "Plant: {} -> {} MW",
            reference.plant.plant_capacity_mw, input.plant.plant_capacity_mw
        ));
    }
    if input.plant.virtual_position_mw != reference.plant.virtual_position_mw {
        changed.push(format!(
            "Position: {} -> {} MW",
            reference.plant.virtual_position_mw, input.plant.virtual_position_mw
        ));
    }
    if input.plant.fee_rate_pct != reference.plant.fee_rate_pct {
        changed.push(format!(
            "Fee: {}% -> {}%",
            reference.plant.fee_rate_pct, input.plant.fee_rate_pct
        ));
    }
    if input.capture != reference.capture {
        changed.push(format!(
            "Capture: {}/{}/{} -> {}/{}/{}",
            reference.capture.high,
            reference.capture.med,
            reference.capture.low,
            input.capture.high,
            input.capture.med,
            input.capture.low
        ));
    }
    if input.hubs.alpha != reference.hubs.alpha {
        changed.push(format!(
            "Alpha Hub: {} -> {}",
            reference.hubs.alpha, input.hubs.alpha
        ));
    }
    if input.hubs.hedge != reference.hubs.hedge {
        changed.push(format!(
            "Hedge Hub: {} -> {}",
            reference.hubs.hedge, input.hubs.hedge
        ));
    }
    if input.scenario != reference.scenario {
        changed.push(format!("Scenario: {} -> {}", reference.scenario, input.scenario));
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::AccuracyLevel;

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(dec!(110), dec!(100)), Outcome::Computed(dec!(10)));
        assert_eq!(
            percent_change(dec!(110), dec!(0)),
            Outcome::NotComputable(NotComputable::ZeroBaseline)
        );
    }

    #[test]
    fn test_baseline_has_no_delta() {
        let engine = ValuationEngine::embedded().unwrap();
        let input = EngineInput::baseline();
        let result = engine.evaluate(&input);
        let delta = delta_vs_baseline(&engine, &input, &result);
        assert_eq!(delta.per_mw_change_pct, Outcome::Computed(dec!(0)));
        assert!(delta.changed.is_empty());
        assert!(!delta.is_material());
    }

    #[test]
    fn test_changed_inputs_listed() {
        let engine = ValuationEngine::embedded().unwrap();
        let input = EngineInput::baseline().with_accuracy(AccuracyLevel::from(4u8));
        let result = engine.evaluate(&input);
        let delta = delta_vs_baseline(&engine, &input, &result);
        assert_eq!(delta.changed, vec!["MAE: $6/MWh -> $4/MWh".to_string()]);
        assert!(delta.is_material());
        assert!(delta.total_change_pct.value().unwrap() > dec!(0));
    }
}
