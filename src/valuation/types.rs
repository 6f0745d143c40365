//! Valuation input and outcome types

use super::capture::CaptureRates;
use super::scenario::ScenarioSelection;
use crate::calibration::{AccuracyLevel, Hub};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Annual vendor revenue the capacity target is sized against
pub const DEFAULT_REVENUE_TARGET: Decimal = dec!(10000000);

/// Largest plant capacity or virtual position accepted, MW
pub const MAX_CAPACITY_MW: Decimal = dec!(5000);

/// Why a figure could not be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotComputable {
    /// Plant capacity is zero
    ZeroPlantCapacity,
    /// Vendor fee revenue is zero
    ZeroFeeRevenue,
    /// No capacity is contracted
    ZeroContractedCapacity,
    /// Break-even cost per MW is zero
    ZeroBreakeven,
    /// Margin of safety is zero
    ZeroMarginOfSafety,
    /// Reference value to compare against is zero
    ZeroBaseline,
    /// Result exceeds the representable range
    Overflow,
}

impl NotComputable {
    /// Guidance shown in place of the figure
    pub fn guidance(&self) -> &'static str {
        match self {
            NotComputable::ZeroPlantCapacity => "plant capacity is zero, set a capacity",
            NotComputable::ZeroFeeRevenue => "fee revenue is zero, adjust fee rate or scenario",
            NotComputable::ZeroContractedCapacity => {
                "contracted capacity is zero, adjust parameters"
            }
            NotComputable::ZeroBreakeven => "break-even cost is zero, check the budget",
            NotComputable::ZeroMarginOfSafety => "margin of safety is zero, adjust parameters",
            NotComputable::ZeroBaseline => "baseline value is zero, nothing to compare",
            NotComputable::Overflow => "result is out of range, adjust parameters",
        }
    }
}

impl fmt::Display for NotComputable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.guidance())
    }
}

/// A figure that is either computed or explicitly not applicable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome<T> {
    Computed(T),
    NotComputable(NotComputable),
}

impl<T> Outcome<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Computed(value) => Some(value),
            Outcome::NotComputable(_) => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Outcome::Computed(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Computed(value) => Outcome::Computed(f(value)),
            Outcome::NotComputable(reason) => Outcome::NotComputable(reason),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Computed(value) => f(value),
            Outcome::NotComputable(reason) => Outcome::NotComputable(reason),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Computed(value) => value.fmt(f),
            Outcome::NotComputable(reason) => write!(f, "n/a ({reason})"),
        }
    }
}

/// Plant and commercial parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantConfiguration {
    /// Physical nameplate capacity
    pub plant_capacity_mw: Decimal,
    /// Virtual trading position, independent of plant capacity
    pub virtual_position_mw: Decimal,
    /// Vendor share of created value, percent
    pub fee_rate_pct: Decimal,
}

impl Default for PlantConfiguration {
    fn default() -> Self {
        Self {
            plant_capacity_mw: dec!(240),
            virtual_position_mw: dec!(100),
            fee_rate_pct: dec!(37.5),
        }
    }
}

/// Hubs the virtual strategies trade at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubSelection {
    pub alpha: Hub,
    pub hedge: Hub,
}

impl Default for HubSelection {
    fn default() -> Self {
        Self {
            alpha: Hub::South,
            hedge: Hub::South,
        }
    }
}

/// Where the VT Hedge value is calibrated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HedgeHubPolicy {
    /// Hedge tied to the plant's settlement point, hub selection ignored
    #[default]
    PlantSettlement,
    /// Hedge placed at the selected hedge hub
    SelectedHub,
}

impl std::str::FromStr for HedgeHubPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "plant_settlement" | "plant" => Ok(HedgeHubPolicy::PlantSettlement),
            "selected_hub" | "hub" => Ok(HedgeHubPolicy::SelectedHub),
            other => Err(format!(
                "unknown hedge policy '{other}', expected plant-settlement or selected-hub"
            )),
        }
    }
}

/// Everything one valuation needs
///
/// Owned by the caller and rebuilt on each parameter change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineInput {
    pub accuracy: AccuracyLevel,
    pub plant: PlantConfiguration,
    pub capture: CaptureRates,
    pub hubs: HubSelection,
    pub scenario: ScenarioSelection,
    pub hedge_policy: HedgeHubPolicy,
    /// Annual vendor revenue used for the capacity target
    pub revenue_target: Decimal,
}

impl EngineInput {
    /// Reference configuration: MAE $6, 240 MW plant, 100 MW virtual,
    /// 37.5% fee, 90/50/10 capture, SOUTH hubs, all strategies
    pub fn baseline() -> Self {
        Self {
            accuracy: AccuracyLevel::from(6u8),
            plant: PlantConfiguration::default(),
            capture: CaptureRates::baseline(),
            hubs: HubSelection::default(),
            scenario: ScenarioSelection::Combined,
            hedge_policy: HedgeHubPolicy::default(),
            revenue_target: DEFAULT_REVENUE_TARGET,
        }
    }

    pub fn with_accuracy(mut self, accuracy: impl Into<AccuracyLevel>) -> Self {
        self.accuracy = accuracy.into();
        self
    }

    pub fn with_capture(mut self, capture: CaptureRates) -> Self {
        self.capture = capture;
        self
    }

    pub fn with_plant(mut self, plant: PlantConfiguration) -> Self {
        self.plant = plant;
        self
    }

    pub fn with_hubs(mut self, hubs: HubSelection) -> Self {
        self.hubs = hubs;
        self
    }

    pub fn with_scenario(mut self, scenario: ScenarioSelection) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn with_hedge_policy(mut self, policy: HedgeHubPolicy) -> Self {
        self.hedge_policy = policy;
        self
    }
}

impl Default for EngineInput {
    fn default() -> Self {
        Self::baseline()
    }
}
