//! Configuration types for dart-value

use crate::calibration::{AccuracyLevel, Hub, MAX_LEVEL, MIN_LEVEL};
use crate::telemetry::LogFormat;
use crate::valuation::{
    CaptureRates, EngineInput, HedgeHubPolicy, HubSelection, PlantConfiguration,
    ScenarioSelection, DEFAULT_REVENUE_TARGET, MAX_CAPACITY_MW,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest revenue target or budget accepted, dollars
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

const EMBEDDED_CONFIG: &str = include_str!("../config.toml.example");

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File is not valid TOML for this schema
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// A parameter is outside its supported range
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },
}

impl ConfigError {
    /// The file does not exist, as opposed to being unreadable or invalid
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub hubs: HubConfig,
    #[serde(default)]
    pub budget: BudgetConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Valuation model parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Forecast mean absolute error ($/MWh)
    #[serde(default = "default_mae")]
    pub mae: Decimal,

    /// Physical plant capacity (MW)
    #[serde(default = "default_plant_capacity")]
    pub plant_capacity_mw: Decimal,

    /// Virtual trading position (MW)
    #[serde(default = "default_virtual_position")]
    pub virtual_position_mw: Decimal,

    /// Vendor share of created value (percent)
    #[serde(default = "default_fee_rate")]
    pub fee_rate_pct: Decimal,

    /// Strategies included in the total
    #[serde(default)]
    pub scenario: ScenarioSelection,

    /// Where the VT Hedge value is calibrated
    #[serde(default)]
    pub hedge_policy: HedgeHubPolicy,

    /// Annual vendor revenue target for capacity sizing ($)
    #[serde(default = "default_revenue_target")]
    pub revenue_target: Decimal,
}

fn default_mae() -> Decimal {
    dec!(6)
}
fn default_plant_capacity() -> Decimal {
    dec!(240)
}
fn default_virtual_position() -> Decimal {
    dec!(100)
}
fn default_fee_rate() -> Decimal {
    dec!(37.5)
}
fn default_revenue_target() -> Decimal {
    DEFAULT_REVENUE_TARGET
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            mae: default_mae(),
            plant_capacity_mw: default_plant_capacity(),
            virtual_position_mw: default_virtual_position(),
            fee_rate_pct: default_fee_rate(),
            scenario: ScenarioSelection::default(),
            hedge_policy: HedgeHubPolicy::default(),
            revenue_target: default_revenue_target(),
        }
    }
}

/// Capture rates per confidence zone (percent)
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    #[serde(default = "default_high_capture")]
    pub high: Decimal,
    #[serde(default = "default_med_capture")]
    pub med: Decimal,
    #[serde(default = "default_low_capture")]
    pub low: Decimal,
}

fn default_high_capture() -> Decimal {
    dec!(90)
}
fn default_med_capture() -> Decimal {
    dec!(50)
}
fn default_low_capture() -> Decimal {
    dec!(10)
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            high: default_high_capture(),
            med: default_med_capture(),
            low: default_low_capture(),
        }
    }
}

impl CaptureConfig {
    pub fn rates(&self) -> CaptureRates {
        CaptureRates::new(self.high, self.med, self.low)
    }
}

/// Hub selection for the virtual strategies
#[derive(Debug, Clone, Deserialize)]
pub struct HubConfig {
    #[serde(default = "default_hub")]
    pub alpha: Hub,
    #[serde(default = "default_hub")]
    pub hedge: Hub,
}

fn default_hub() -> Hub {
    Hub::South
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            alpha: default_hub(),
            hedge: default_hub(),
        }
    }
}

/// Budget year for break-even analysis
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
pub enum BudgetYear {
    #[default]
    #[serde(rename = "year_1", alias = "year1")]
    Year1,
    #[serde(rename = "year_2", alias = "year2")]
    Year2,
    #[serde(rename = "year_3", alias = "year3")]
    Year3,
}

impl std::fmt::Display for BudgetYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BudgetYear::Year1 => "Year 1",
            BudgetYear::Year2 => "Year 2",
            BudgetYear::Year3 => "Year 3",
        })
    }
}

impl std::str::FromStr for BudgetYear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "1" | "year_1" | "year1" => Ok(BudgetYear::Year1),
            "2" | "year_2" | "year2" => Ok(BudgetYear::Year2),
            "3" | "year_3" | "year3" => Ok(BudgetYear::Year3),
            other => Err(format!("unknown budget year '{other}', expected 1, 2 or 3")),
        }
    }
}

/// Vendor operating budget per contract year ($)
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct BudgetSchedule {
    #[serde(default = "default_year_1")]
    pub year_1: Decimal,
    #[serde(default = "default_year_2")]
    pub year_2: Decimal,
    #[serde(default = "default_year_3")]
    pub year_3: Decimal,
}

fn default_year_1() -> Decimal {
    dec!(682000)
}
fn default_year_2() -> Decimal {
    dec!(1404700)
}
fn default_year_3() -> Decimal {
    dec!(2076800)
}

impl Default for BudgetSchedule {
    fn default() -> Self {
        Self {
            year_1: default_year_1(),
            year_2: default_year_2(),
            year_3: default_year_3(),
        }
    }
}

impl BudgetSchedule {
    pub fn amount(&self, year: BudgetYear) -> Decimal {
        match year {
            BudgetYear::Year1 => self.year_1,
            BudgetYear::Year2 => self.year_2,
            BudgetYear::Year3 => self.year_3,
        }
    }

    /// Load a budget schedule from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let schedule: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        check("budget.year_1", schedule.year_1, dec!(0), MAX_AMOUNT)?;
        check("budget.year_2", schedule.year_2, dec!(0), MAX_AMOUNT)?;
        check("budget.year_3", schedule.year_3, dec!(0), MAX_AMOUNT)?;
        Ok(schedule)
    }

    /// Load a budget schedule, falling back to the defaults when the file
    /// is missing, malformed or out of range
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(schedule) => {
                tracing::info!(path = %path.display(), "Loaded budget schedule");
                schedule
            }
            Err(e) => {
                tracing::warn!(error = %e, "Using default budget schedule");
                Self::default()
            }
        }
    }
}

/// Break-even budget configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetConfig {
    /// Optional budget schedule file
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Year used for break-even
    #[serde(default)]
    pub year: BudgetYear,

    /// Custom annual budget overriding the schedule
    #[serde(default)]
    pub custom: Option<Decimal>,
}

impl BudgetConfig {
    /// Annual budget for the configured year
    pub fn annual_budget(&self) -> Decimal {
        match self.custom {
            Some(amount) => amount,
            None => BudgetSchedule::load_or_default(self.path.as_deref()).amount(self.year),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration shipped with the binary as `config.toml.example`
    pub fn embedded() -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(EMBEDDED_CONFIG).map_err(|source| ConfigError::Parse {
                path: PathBuf::from("config.toml.example"),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter against its supported range
    pub fn validate(&self) -> Result<(), ConfigError> {
        check(
            "model.mae",
            self.model.mae,
            Decimal::from(MIN_LEVEL),
            Decimal::from(MAX_LEVEL),
        )?;
        check(
            "model.plant_capacity_mw",
            self.model.plant_capacity_mw,
            dec!(0),
            MAX_CAPACITY_MW,
        )?;
        check(
            "model.virtual_position_mw",
            self.model.virtual_position_mw,
            dec!(0),
            MAX_CAPACITY_MW,
        )?;
        check("model.fee_rate_pct", self.model.fee_rate_pct, dec!(0), dec!(100))?;
        check(
            "model.revenue_target",
            self.model.revenue_target,
            dec!(0),
            MAX_AMOUNT,
        )?;
        check("capture.high", self.capture.high, dec!(50), dec!(100))?;
        check("capture.med", self.capture.med, dec!(20), dec!(80))?;
        check("capture.low", self.capture.low, dec!(0), dec!(30))?;
        if let Some(custom) = self.budget.custom {
            check("budget.custom", custom, dec!(0), MAX_AMOUNT)?;
        }
        Ok(())
    }

    /// Engine input described by this configuration
    pub fn engine_input(&self) -> EngineInput {
        EngineInput {
            accuracy: AccuracyLevel::new(self.model.mae),
            plant: PlantConfiguration {
                plant_capacity_mw: self.model.plant_capacity_mw,
                virtual_position_mw: self.model.virtual_position_mw,
                fee_rate_pct: self.model.fee_rate_pct,
            },
            capture: self.capture.rates(),
            hubs: HubSelection {
                alpha: self.hubs.alpha,
                hedge: self.hubs.hedge,
            },
            scenario: self.model.scenario,
            hedge_policy: self.model.hedge_policy,
            revenue_target: self.model.revenue_target,
        }
    }
}

fn check(field: &'static str, value: Decimal, min: Decimal, max: Decimal) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
