//! Scenario composition

use super::strategy::Strategy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which strategies count toward the total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioSelection {
    /// Resource node dispatch only
    RnOnly,
    /// Virtual trading only (alpha + hedge)
    VtOnly,
    /// All three strategies
    #[default]
    Combined,
}

impl ScenarioSelection {
    pub fn includes_rn(&self) -> bool {
        !matches!(self, ScenarioSelection::VtOnly)
    }

    pub fn includes_vt(&self) -> bool {
        !matches!(self, ScenarioSelection::RnOnly)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioSelection::RnOnly => "RN only",
            ScenarioSelection::VtOnly => "VT only",
            ScenarioSelection::Combined => "Combined",
        }
    }
}

impl fmt::Display for ScenarioSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScenarioSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "rn_only" | "rn" => Ok(ScenarioSelection::RnOnly),
            "vt_only" | "vt" => Ok(ScenarioSelection::VtOnly),
            "combined" | "all" => Ok(ScenarioSelection::Combined),
            other => Err(format!(
                "unknown scenario '{other}', expected rn-only, vt-only or combined"
            )),
        }
    }
}

/// Annual strategy values after the scenario filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComposedValue {
    pub rn: Decimal,
    pub vt_alpha: Decimal,
    pub vt_hedge: Decimal,
    pub total: Decimal,
}

impl ComposedValue {
    /// Virtual trading subtotal
    pub fn vt(&self) -> Decimal {
        self.vt_alpha + self.vt_hedge
    }

    pub fn get(&self, strategy: Strategy) -> Decimal {
        match strategy {
            Strategy::Rn => self.rn,
            Strategy::VtAlpha => self.vt_alpha,
            Strategy::VtHedge => self.vt_hedge,
        }
    }
}

/// Zero the strategies a scenario excludes and sum the rest
pub fn compose(
    scenario: ScenarioSelection,
    rn_annual: Decimal,
    vt_alpha_annual: Decimal,
    vt_hedge_annual: Decimal,
) -> ComposedValue {
    let rn = if scenario.includes_rn() {
        rn_annual
    } else {
        Decimal::ZERO
    };
    let (vt_alpha, vt_hedge) = if scenario.includes_vt() {
        (vt_alpha_annual, vt_hedge_annual)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    ComposedValue {
        rn,
        vt_alpha,
        vt_hedge,
        total: rn + vt_alpha + vt_hedge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compose_totals() {
        let (a, b, c) = (dec!(4799760), dec!(5555500), dec!(5118480));
        assert_eq!(compose(ScenarioSelection::RnOnly, a, b, c).total, a);
        assert_eq!(compose(ScenarioSelection::VtOnly, a, b, c).total, b + c);
        assert_eq!(compose(ScenarioSelection::Combined, a, b, c).total, a + b + c);
    }

    #[test]
    fn test_compose_zeroes_excluded() {
        let rn_only = compose(ScenarioSelection::RnOnly, dec!(1), dec!(2), dec!(3));
        assert_eq!(rn_only.vt_alpha, dec!(0));
        assert_eq!(rn_only.vt_hedge, dec!(0));
        assert_eq!(rn_only.vt(), dec!(0));

        let vt_only = compose(ScenarioSelection::VtOnly, dec!(1), dec!(2), dec!(3));
        assert_eq!(vt_only.rn, dec!(0));
        assert_eq!(vt_only.vt(), dec!(5));
    }

    #[test]
    fn test_compose_passes_values_through() {
        let combined = compose(ScenarioSelection::Combined, dec!(1.5), dec!(2.25), dec!(3));
        assert_eq!(combined.rn, dec!(1.5));
        assert_eq!(combined.vt_alpha, dec!(2.25));
        assert_eq!(combined.vt_hedge, dec!(3));
        assert_eq!(combined.total, dec!(6.75));
        let sum: Decimal = Strategy::ALL.iter().map(|&s| combined.get(s)).sum();
        assert_eq!(sum, combined.total);
    }

    #[test]
    fn test_scenario_parse() {
        assert_eq!("rn-only".parse(), Ok(ScenarioSelection::RnOnly));
        assert_eq!("VT_ONLY".parse(), Ok(ScenarioSelection::VtOnly));
        assert_eq!("combined".parse(), Ok(ScenarioSelection::Combined));
        assert!("hedge".parse::<ScenarioSelection>().is_err());
    }
}
