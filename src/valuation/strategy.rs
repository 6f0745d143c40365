//! Strategy value calculator
//!
//! RN, VT Alpha and VT Hedge share one pipeline: pick a calibration table,
//! interpolate at the accuracy level, rescale for capture rates, and scale
//! by the capacity the strategy is sized on.

use super::capture::{rescale, CaptureRates};
use super::types::{EngineInput, HedgeHubPolicy, HubSelection, PlantConfiguration};
use crate::calibration::{AccuracyLevel, CalibrationStore, TableKey};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value-creation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Resource node dispatch optimization
    Rn,
    /// Virtual trading in non-production hours
    VtAlpha,
    /// Virtual hedge of production revenue
    VtHedge,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Rn, Strategy::VtAlpha, Strategy::VtHedge];

    pub fn descriptor(&self) -> StrategyDescriptor {
        match self {
            Strategy::Rn => StrategyDescriptor {
                strategy: *self,
                capacity: CapacityBasis::Plant,
            },
            Strategy::VtAlpha => StrategyDescriptor {
                strategy: *self,
                capacity: CapacityBasis::VirtualPosition,
            },
            Strategy::VtHedge => StrategyDescriptor {
                strategy: *self,
                capacity: CapacityBasis::Plant,
            },
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Rn => "RN",
            Strategy::VtAlpha => "VT Alpha",
            Strategy::VtHedge => "VT Hedge",
        })
    }
}

/// Capacity a strategy's per-MW value is expressed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityBasis {
    Plant,
    VirtualPosition,
}

impl CapacityBasis {
    pub fn capacity_mw(&self, plant: &PlantConfiguration) -> Decimal {
        match self {
            CapacityBasis::Plant => plant.plant_capacity_mw,
            CapacityBasis::VirtualPosition => plant.virtual_position_mw,
        }
    }
}

/// Table selection and sizing for one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyDescriptor {
    pub strategy: Strategy,
    pub capacity: CapacityBasis,
}

impl StrategyDescriptor {
    pub fn table_key(&self, hubs: &HubSelection, policy: HedgeHubPolicy) -> TableKey {
        match (self.strategy, policy) {
            (Strategy::Rn, _) => TableKey::Rn,
            (Strategy::VtAlpha, _) => TableKey::Alpha(hubs.alpha),
            (Strategy::VtHedge, HedgeHubPolicy::PlantSettlement) => TableKey::HedgePlant,
            (Strategy::VtHedge, HedgeHubPolicy::SelectedHub) => TableKey::Hedge(hubs.hedge),
        }
    }
}

/// Per-MW and annual value of one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyValue {
    pub strategy: Strategy,
    /// $/MW/year of the strategy's capacity basis
    pub per_mw: Decimal,
    pub capacity_mw: Decimal,
    /// $/year before any scenario filter
    pub annual: Decimal,
}

/// Computes strategy values against a calibration store
pub struct StrategyValueCalculator<'a> {
    store: &'a CalibrationStore,
}

impl<'a> StrategyValueCalculator<'a> {
    pub fn new(store: &'a CalibrationStore) -> Self {
        Self { store }
    }

    /// Per-MW value from one table at the given accuracy and capture rates
    ///
    /// The table value is interpolated at the clamped level; the zone
    /// distribution comes from the nearest calibrated level.
    pub fn value_per_mw(
        &self,
        key: TableKey,
        level: AccuracyLevel,
        rates: &CaptureRates,
    ) -> Decimal {
        let base = self.store.table(key).interpolate(level);
        let zones = self.store.zones(level);
        rescale(base, &zones, rates)
    }

    /// Annual value for a capacity, scaled to a full year
    pub fn annual_value(&self, per_mw: Decimal, capacity_mw: Decimal) -> Decimal {
        if capacity_mw.is_zero() {
            return Decimal::ZERO;
        }
        self.store.period().annualize(per_mw * capacity_mw)
    }

    pub fn evaluate(&self, strategy: Strategy, input: &EngineInput) -> StrategyValue {
        let descriptor = strategy.descriptor();
        let key = descriptor.table_key(&input.hubs, input.hedge_policy);
        let per_mw = self.value_per_mw(key, input.accuracy, &input.capture);
        let capacity_mw = descriptor.capacity.capacity_mw(&input.plant);
        let annual = self.annual_value(per_mw, capacity_mw);

        tracing::trace!(
            %strategy,
            ?key,
            per_mw = %per_mw,
            capacity_mw = %capacity_mw,
            annual = %annual,
            "Strategy evaluated"
        );

        StrategyValue {
            strategy,
            per_mw,
            capacity_mw,
            annual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::{tables, CalibrationPeriod, Hub};
    use rust_decimal_macros::dec;

    fn store() -> CalibrationStore {
        CalibrationStore::embedded().unwrap()
    }

    #[test]
    fn test_baseline_rates_return_table_values() {
        let store = store();
        let calc = StrategyValueCalculator::new(&store);
        let rates = CaptureRates::baseline();
        for level in 3u8..=12 {
            let level_in = AccuracyLevel::from(level);
            assert_eq!(
                calc.value_per_mw(TableKey::Rn, level_in, &rates),
                *store.table(TableKey::Rn).get(level)
            );
            for hub in Hub::ALL {
                assert_eq!(
                    calc.value_per_mw(TableKey::Alpha(hub), level_in, &rates),
                    *store.table(TableKey::Alpha(hub)).get(level)
                );
            }
        }
    }

    #[test]
    fn test_out_of_domain_clamps() {
        let store = store();
        let calc = StrategyValueCalculator::new(&store);
        let rates = CaptureRates::baseline();
        assert_eq!(
            calc.value_per_mw(TableKey::Rn, AccuracyLevel::new(dec!(1)), &rates),
            dec!(27840)
        );
        assert_eq!(
            calc.value_per_mw(TableKey::Rn, AccuracyLevel::new(dec!(25)), &rates),
            dec!(10331)
        );
    }

    #[test]
    fn test_table_keys() {
        let hubs = HubSelection {
            alpha: Hub::West,
            hedge: Hub::Pan,
        };
        let plant = HedgeHubPolicy::PlantSettlement;
        let selected = HedgeHubPolicy::SelectedHub;
        assert_eq!(Strategy::Rn.descriptor().table_key(&hubs, selected), TableKey::Rn);
        assert_eq!(
            Strategy::VtAlpha.descriptor().table_key(&hubs, plant),
            TableKey::Alpha(Hub::West)
        );
        assert_eq!(
            Strategy::VtHedge.descriptor().table_key(&hubs, plant),
            TableKey::HedgePlant
        );
        assert_eq!(
            Strategy::VtHedge.descriptor().table_key(&hubs, selected),
            TableKey::Hedge(Hub::Pan)
        );
    }

    #[test]
    fn test_capacity_basis() {
        let input = EngineInput::baseline();
        let store = store();
        let calc = StrategyValueCalculator::new(&store);
        assert_eq!(calc.evaluate(Strategy::Rn, &input).capacity_mw, dec!(240));
        assert_eq!(calc.evaluate(Strategy::VtAlpha, &input).capacity_mw, dec!(100));
        assert_eq!(calc.evaluate(Strategy::VtHedge, &input).capacity_mw, dec!(240));
    }

    #[test]
    fn test_zero_capacity_is_zero() {
        let store = store();
        let calc = StrategyValueCalculator::new(&store);
        assert_eq!(calc.annual_value(dec!(19999), dec!(0)), dec!(0));
    }

    #[test]
    fn test_observed_period_annualizes() {
        let mut builder = CalibrationStore::builder()
            .period(CalibrationPeriod::Observed)
            .rn(&tables::RN_PER_MW)
            .hedge_plant(&tables::HEDGE_PLANT_PER_MW)
            .zones(&tables::ZONE_DISTRIBUTION);
        for (hub, values) in &tables::ALPHA_PER_MW {
            builder = builder.alpha(*hub, values);
        }
        for (hub, values) in &tables::HEDGE_HUB_PER_MW {
            builder = builder.hedge(*hub, values);
        }
        for hub in Hub::ALL {
            builder = builder.hub_stats(hub, tables::hub_stats(hub));
        }
        let store = builder.build().unwrap();
        let calc = StrategyValueCalculator::new(&store);
        // 9000 over nine months on 1 MW is 12000 a year
        assert_eq!(calc.annual_value(dec!(9000), dec!(1)), dec!(12000));
    }

    #[test]
    fn test_hedge_policy_changes_table() {
        let store = store();
        let calc = StrategyValueCalculator::new(&store);
        let input = EngineInput::baseline().with_hubs(HubSelection {
            alpha: Hub::South,
            hedge: Hub::West,
        });
        let plant = calc.evaluate(Strategy::VtHedge, &input);
        let hub = calc.evaluate(
            Strategy::VtHedge,
            &input.with_hedge_policy(HedgeHubPolicy::SelectedHub),
        );
        assert_eq!(plant.per_mw, dec!(21327));
        assert_eq!(hub.per_mw, dec!(26232));
    }
}
