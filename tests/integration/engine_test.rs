//! End-to-end valuation tests against the embedded calibration

use dart_value::calibration::{tables, AccuracyLevel, CalibrationPeriod, CalibrationStore, Hub};
use dart_value::valuation::{
    CaptureRates, EngineInput, NotComputable, Outcome, PlantConfiguration, ScenarioSelection,
    ValuationEngine,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn engine() -> ValuationEngine {
    ValuationEngine::embedded().unwrap()
}

fn reference_input() -> EngineInput {
    EngineInput::baseline().with_plant(PlantConfiguration {
        plant_capacity_mw: dec!(240),
        virtual_position_mw: dec!(100),
        fee_rate_pct: dec!(37),
    })
}

#[test]
fn test_reference_scenario() {
    let result = engine().evaluate(&reference_input());
    assert_eq!(result.total_value(), dec!(15473740));
    assert_eq!(result.fg_revenue(), dec!(5725283.80));
    assert_eq!(result.client_uplift(), dec!(9748456.20));
    assert_eq!(result.fg_revenue() + result.client_uplift(), result.total_value());
}

#[test]
fn test_better_accuracy_is_worth_more() {
    let engine = engine();
    let totals: Vec<Decimal> = (3u8..=12)
        .map(|level| {
            engine
                .evaluate(&reference_input().with_accuracy(level))
                .total_value()
        })
        .collect();
    for pair in totals.windows(2) {
        assert!(pair[0] > pair[1], "{} should exceed {}", pair[0], pair[1]);
    }
}

#[test]
fn test_out_of_domain_accuracy_clamps() {
    let engine = engine();
    let at_12 = engine.evaluate(&reference_input().with_accuracy(12u8));
    let at_15 = engine.evaluate(&reference_input().with_accuracy(AccuracyLevel::new(dec!(15))));
    assert_eq!(at_15.annual, at_12.annual);
    assert_eq!(at_15.effective_accuracy, AccuracyLevel::from(12u8));

    let at_3 = engine.evaluate(&reference_input().with_accuracy(3u8));
    let at_1 = engine.evaluate(&reference_input().with_accuracy(AccuracyLevel::new(dec!(1))));
    assert_eq!(at_1.annual, at_3.annual);
}

#[test]
fn test_baseline_capture_reads_tables_directly() {
    let engine = engine();
    for (level, rn) in tables::RN_PER_MW {
        let result = engine.evaluate(&reference_input().with_accuracy(level));
        assert_eq!(result.strategies.rn.per_mw, Decimal::from(rn));
    }
}

#[test]
fn test_fractional_accuracy_interpolates() {
    let result = engine().evaluate(&reference_input().with_accuracy(AccuracyLevel::new(dec!(6.5))));
    // halfway between 19,999 and 17,802
    assert_eq!(result.strategies.rn.per_mw, dec!(18900.5));
}

#[test]
fn test_value_scales_with_capacity() {
    let engine = engine();
    let single = engine.evaluate(&reference_input());
    let doubled = engine.evaluate(&reference_input().with_plant(PlantConfiguration {
        plant_capacity_mw: dec!(480),
        virtual_position_mw: dec!(200),
        fee_rate_pct: dec!(37),
    }));
    assert_eq!(doubled.total_value(), single.total_value() * dec!(2));
    assert_eq!(doubled.value_per_mw, single.value_per_mw);
}

#[test]
fn test_higher_capture_raises_value() {
    let engine = engine();
    let base = engine.evaluate(&reference_input());
    let optimistic = engine.evaluate(
        &reference_input().with_capture(CaptureRates::new(dec!(95), dec!(60), dec!(15))),
    );
    assert!(optimistic.total_value() > base.total_value());
}

#[test]
fn test_scenario_totals_compose() {
    let engine = engine();
    let combined = engine.evaluate(&reference_input());
    let rn = engine.evaluate(&reference_input().with_scenario(ScenarioSelection::RnOnly));
    let vt = engine.evaluate(&reference_input().with_scenario(ScenarioSelection::VtOnly));
    assert_eq!(rn.total_value() + vt.total_value(), combined.total_value());
}

#[test]
fn test_reference_breakeven() {
    let report = engine()
        .evaluate(&reference_input())
        .breakeven(dec!(682000))
        .value()
        .unwrap();
    assert!(report.mw_contracted > dec!(419.19) && report.mw_contracted < dec!(419.20));
    assert!(report.breakeven_per_mw > dec!(1626) && report.breakeven_per_mw < dec!(1628));
    let margin = report.margin_of_safety.value().unwrap();
    assert!(margin > dec!(14.6) && margin < dec!(14.7));
    assert_eq!(
        report.client_uplift_per_mw + report.fg_revenue_per_mw_at_scale,
        report.total_per_mw
    );
}

#[test]
fn test_breakeven_zero_guards() {
    let engine = engine();
    let mut input = reference_input();
    input.plant.fee_rate_pct = dec!(0);
    assert_eq!(
        engine.evaluate(&input).breakeven(dec!(682000)),
        Outcome::NotComputable(NotComputable::ZeroFeeRevenue)
    );

    let report = engine
        .evaluate(&reference_input())
        .breakeven(dec!(0))
        .value()
        .unwrap();
    assert_eq!(report.breakeven_per_mw, dec!(0));
    assert_eq!(
        report.margin_of_safety,
        Outcome::NotComputable(NotComputable::ZeroBreakeven)
    );
}

#[test]
fn test_observed_tables_are_annualized() {
    let mut builder = CalibrationStore::builder()
        .period(CalibrationPeriod::Observed)
        .zones(&tables::ZONE_DISTRIBUTION)
        .rn(&tables::RN_PER_MW)
        .hedge_plant(&tables::HEDGE_PLANT_PER_MW);
    for (hub, rows) in tables::ALPHA_PER_MW {
        builder = builder.alpha(hub, &rows);
    }
    for (hub, rows) in tables::HEDGE_HUB_PER_MW {
        builder = builder.hedge(hub, &rows);
    }
    for hub in Hub::ALL {
        builder = builder.hub_stats(hub, tables::hub_stats(hub));
    }
    let observed = ValuationEngine::new(builder.build().unwrap());

    let annual = engine().evaluate(&reference_input());
    let scaled = observed.evaluate(&reference_input());
    assert_eq!(scaled.strategies.rn.per_mw, annual.strategies.rn.per_mw);
    assert_eq!(scaled.annual.rn, annual.annual.rn * dec!(12) / dec!(9));
}
