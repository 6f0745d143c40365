//! Comparative analysis tests

use dart_value::analysis::{compare_hubs, compare_presets, delta_vs_baseline};
use dart_value::calibration::Hub;
use dart_value::valuation::{sweep_capacity, EngineInput, HedgeHubPolicy, ValuationEngine};
use rust_decimal_macros::dec;

#[test]
fn test_presets_are_ordered() {
    let engine = ValuationEngine::embedded().unwrap();
    let input = EngineInput::baseline();
    let presets = compare_presets(&engine, &input);
    assert_eq!(presets.len(), 5);
    for pair in presets.windows(2) {
        assert!(pair[0].result.total_value() < pair[1].result.total_value());
    }
    let base = presets
        .iter()
        .find(|p| p.preset.name == "Base Case")
        .unwrap();
    assert_eq!(base.result, engine.evaluate(&input));
}

#[test]
fn test_plant_settlement_hedge_ignores_hub() {
    let engine = ValuationEngine::embedded().unwrap();
    let input = EngineInput::baseline();
    let mut at_west = input;
    at_west.hubs.hedge = Hub::West;
    assert_eq!(
        engine.evaluate(&input).annual.vt_hedge,
        engine.evaluate(&at_west).annual.vt_hedge
    );

    let selected = input.with_hedge_policy(HedgeHubPolicy::SelectedHub);
    let mut selected_west = selected;
    selected_west.hubs.hedge = Hub::West;
    assert!(
        engine.evaluate(&selected_west).annual.vt_hedge
            > engine.evaluate(&selected).annual.vt_hedge
    );
}

#[test]
fn test_hub_comparison_matches_engine() {
    let engine = ValuationEngine::embedded().unwrap();
    let input = EngineInput::baseline();
    let comparison = compare_hubs(&engine, &input);
    let south = comparison.row(Hub::South).unwrap();
    assert_eq!(south.alpha.annual, engine.evaluate(&input).annual.vt_alpha);
}

#[test]
fn test_capacity_sweep_keeps_ratio() {
    let engine = ValuationEngine::embedded().unwrap();
    let results = sweep_capacity(
        &engine,
        &[dec!(120), dec!(240), dec!(480)],
        &EngineInput::baseline(),
    )
    .unwrap();
    assert_eq!(results[0].virtual_position_mw, dec!(50));
    assert_eq!(results[2].virtual_position_mw, dec!(200));
    assert_eq!(results[0].value_per_mw, results[2].value_per_mw);
}

#[test]
fn test_delta_for_larger_plant() {
    let engine = ValuationEngine::embedded().unwrap();
    let mut input = EngineInput::baseline();
    input.plant.plant_capacity_mw = dec!(300);
    let result = engine.evaluate(&input);
    let delta = delta_vs_baseline(&engine, &input, &result);
    assert_eq!(delta.changed, vec!["Plant: 240 -> 300 MW".to_string()]);
    assert!(delta.total_change_pct.value().unwrap() > dec!(0));
}
