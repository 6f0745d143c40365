//! Flags shared by every valuation command

use crate::calibration::Hub;
use crate::config::Config;
use crate::valuation::{EngineInput, HedgeHubPolicy, ScenarioSelection};
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    /// Print `report` as JSON, or the rendered table
    pub fn emit<T: Serialize>(
        &self,
        report: &T,
        table: impl FnOnce() -> String,
    ) -> anyhow::Result<()> {
        match self {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
            OutputFormat::Table => println!("{}", table()),
        }
        Ok(())
    }
}

/// Overrides applied on top of the configuration file
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Forecast MAE in $/MWh
    #[arg(long)]
    pub mae: Option<Decimal>,

    /// Plant capacity in MW
    #[arg(long)]
    pub plant: Option<Decimal>,

    /// Virtual position in MW
    #[arg(long = "virtual")]
    pub virtual_position: Option<Decimal>,

    /// Vendor fee rate in percent
    #[arg(long)]
    pub fee: Option<Decimal>,

    /// High-confidence capture rate in percent
    #[arg(long)]
    pub high: Option<Decimal>,

    /// Medium-confidence capture rate in percent
    #[arg(long)]
    pub med: Option<Decimal>,

    /// Low-confidence capture rate in percent
    #[arg(long)]
    pub low: Option<Decimal>,

    /// Hub for VT Alpha
    #[arg(long)]
    pub alpha_hub: Option<Hub>,

    /// Hub for VT Hedge
    #[arg(long)]
    pub hedge_hub: Option<Hub>,

    /// rn-only, vt-only or combined
    #[arg(long)]
    pub scenario: Option<ScenarioSelection>,

    /// plant-settlement or selected-hub
    #[arg(long)]
    pub hedge_policy: Option<HedgeHubPolicy>,

    /// Annual vendor revenue target in $
    #[arg(long)]
    pub target: Option<Decimal>,
}

impl InputArgs {
    /// Configuration with every given flag applied
    pub fn overlay(&self, config: &Config) -> Config {
        let mut config = config.clone();
        let model = &mut config.model;
        if let Some(mae) = self.mae {
            model.mae = mae;
        }
        if let Some(plant) = self.plant {
            model.plant_capacity_mw = plant;
        }
        if let Some(virtual_position) = self.virtual_position {
            model.virtual_position_mw = virtual_position;
        }
        if let Some(fee) = self.fee {
            model.fee_rate_pct = fee;
        }
        if let Some(scenario) = self.scenario {
            model.scenario = scenario;
        }
        if let Some(policy) = self.hedge_policy {
            model.hedge_policy = policy;
        }
        if let Some(target) = self.target {
            model.revenue_target = target;
        }
        if let Some(high) = self.high {
            config.capture.high = high;
        }
        if let Some(med) = self.med {
            config.capture.med = med;
        }
        if let Some(low) = self.low {
            config.capture.low = low;
        }
        if let Some(hub) = self.alpha_hub {
            config.hubs.alpha = hub;
        }
        if let Some(hub) = self.hedge_hub {
            config.hubs.hedge = hub;
        }
        config
    }

    /// Validated engine input for this invocation
    pub fn resolve(&self, config: &Config) -> anyhow::Result<EngineInput> {
        let config = self.overlay(config);
        config.validate()?;
        Ok(config.engine_input())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::CaptureRates;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_flags_keeps_config() {
        let config = Config::default();
        let input = InputArgs::default().resolve(&config).unwrap();
        assert_eq!(input, config.engine_input());
    }

    #[test]
    fn test_flags_override_config() {
        let args = InputArgs {
            mae: Some(dec!(4)),
            high: Some(dec!(95)),
            alpha_hub: Some(Hub::West),
            scenario: Some(ScenarioSelection::RnOnly),
            ..Default::default()
        };
        let input = args.resolve(&Config::default()).unwrap();
        assert_eq!(input.accuracy.value(), dec!(4));
        assert_eq!(input.capture, CaptureRates::new(dec!(95), dec!(50), dec!(10)));
        assert_eq!(input.hubs.alpha, Hub::West);
        assert_eq!(input.hubs.hedge, Hub::South);
        assert_eq!(input.scenario, ScenarioSelection::RnOnly);
    }

    #[test]
    fn test_out_of_range_flag_rejected() {
        let args = InputArgs {
            fee: Some(dec!(150)),
            ..Default::default()
        };
        assert!(args.resolve(&Config::default()).is_err());
    }

    #[test]
    fn test_unbounded_target_rejected() {
        let args = InputArgs {
            target: Some(Decimal::MAX),
            fee: Some(dec!(0.001)),
            ..Default::default()
        };
        assert!(args.resolve(&Config::default()).is_err());

        let args = InputArgs {
            target: Some(crate::config::MAX_AMOUNT),
            fee: Some(dec!(0.001)),
            ..Default::default()
        };
        let input = args.resolve(&Config::default()).unwrap();
        let engine = crate::valuation::ValuationEngine::embedded().unwrap();
        assert!(engine.evaluate(&input).mw_for_target.is_computed());
    }
}
