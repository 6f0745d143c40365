//! Calibration types

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lowest calibrated MAE level ($/MWh)
pub const MIN_LEVEL: u8 = 3;
/// Highest calibrated MAE level ($/MWh)
pub const MAX_LEVEL: u8 = 12;
/// Number of integer levels covered by every table
pub const LEVEL_COUNT: usize = (MAX_LEVEL - MIN_LEVEL + 1) as usize;

/// Calibration construction errors
#[derive(Debug, Error, PartialEq)]
pub enum CalibrationError {
    /// A table has no entry for a required level
    #[error("{table}: missing entry for MAE level {level}")]
    MissingLevel { table: String, level: u8 },
    /// A table defines the same level twice
    #[error("{table}: duplicate entry for MAE level {level}")]
    DuplicateLevel { table: String, level: u8 },
    /// A table defines a level outside the calibrated domain
    #[error("{table}: MAE level {level} outside the calibrated range 3-12")]
    UnexpectedLevel { table: String, level: u8 },
    /// A per-hub table or statistic is absent
    #[error("{table}: missing hub {hub}")]
    MissingHub { table: String, hub: Hub },
    /// A per-MW value is negative
    #[error("{table}: negative value at MAE level {level}")]
    NegativeValue { table: String, level: u8 },
    /// Zone shares do not add up to 100%
    #[error("zone distribution at MAE level {level} sums to {total}, expected 100")]
    InvalidZoneDistribution { level: u8, total: Decimal },
    /// Hub name not recognised
    #[error("unknown hub: {0}")]
    UnknownHub(String),
}

/// Trading hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hub {
    South,
    North,
    West,
    Houston,
    Pan,
}

impl Hub {
    /// Every hub, in table order
    pub const ALL: [Hub; 5] = [Hub::South, Hub::North, Hub::West, Hub::Houston, Hub::Pan];

    /// Upper-case hub name as used in settlement data
    pub fn name(&self) -> &'static str {
        match self {
            Hub::South => "SOUTH",
            Hub::North => "NORTH",
            Hub::West => "WEST",
            Hub::Houston => "HOUSTON",
            Hub::Pan => "PAN",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Hub::South => 0,
            Hub::North => 1,
            Hub::West => 2,
            Hub::Houston => 3,
            Hub::Pan => 4,
        }
    }
}

impl fmt::Display for Hub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Hub {
    type Err = CalibrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hub::ALL
            .into_iter()
            .find(|hub| hub.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalibrationError::UnknownHub(s.to_string()))
    }
}

/// Descriptive price statistics for a hub over the observed period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HubStats {
    /// Average day-ahead price ($/MWh)
    pub avg_da_price: Decimal,
    /// Average real-time price ($/MWh)
    pub avg_rt_price: Decimal,
    /// Average absolute DART spread ($/MWh)
    pub avg_spread: Decimal,
    /// Standard deviation of the DART spread ($/MWh)
    pub volatility: Decimal,
}

/// Forecast accuracy expressed as mean absolute error in $/MWh
///
/// Lower is better. The value is kept as given; clamping to the calibrated
/// domain happens at lookup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccuracyLevel(Decimal);

impl AccuracyLevel {
    pub fn new(mae: Decimal) -> Self {
        Self(mae)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Spread above which an hour falls in the high-confidence zone
    pub fn high_threshold(&self) -> Decimal {
        self.0 * dec!(2)
    }

    /// Spread below which an hour falls in the low-confidence zone
    pub fn low_threshold(&self) -> Decimal {
        self.0
    }

    /// Level limited to the calibrated domain
    pub fn clamped(&self) -> Self {
        Self(
            self.0
                .max(Decimal::from(MIN_LEVEL))
                .min(Decimal::from(MAX_LEVEL)),
        )
    }

    /// Nearest calibrated integer level (ties to even)
    pub fn rounded(&self) -> u8 {
        self.clamped().0.round().to_u8().unwrap_or(MIN_LEVEL)
    }

    /// Bracketing integer levels and the fractional position between them
    pub fn bracket(&self) -> (u8, u8, Decimal) {
        let level = self.clamped().0;
        let lower = level.floor();
        let upper = level.ceil();
        (
            lower.to_u8().unwrap_or(MIN_LEVEL),
            upper.to_u8().unwrap_or(MAX_LEVEL),
            level - lower,
        )
    }
}

impl From<u8> for AccuracyLevel {
    fn from(level: u8) -> Self {
        Self(Decimal::from(level))
    }
}

impl From<Decimal> for AccuracyLevel {
    fn from(mae: Decimal) -> Self {
        Self(mae)
    }
}

impl fmt::Display for AccuracyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}/MWh", self.0.normalize())
    }
}

/// Share of forecast hours in each confidence zone, in percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoneDistribution {
    pub high_pct: Decimal,
    pub med_pct: Decimal,
    pub low_pct: Decimal,
}

impl ZoneDistribution {
    pub fn new(high_pct: Decimal, med_pct: Decimal, low_pct: Decimal) -> Self {
        Self {
            high_pct,
            med_pct,
            low_pct,
        }
    }

    pub fn total(&self) -> Decimal {
        self.high_pct + self.med_pct + self.low_pct
    }

    pub(crate) fn validate(&self, level: u8) -> Result<(), CalibrationError> {
        let negative = self.high_pct.is_sign_negative()
            || self.med_pct.is_sign_negative()
            || self.low_pct.is_sign_negative();
        if negative || self.total() != dec!(100) {
            return Err(CalibrationError::InvalidZoneDistribution {
                level,
                total: self.total(),
            });
        }
        Ok(())
    }
}

/// Period the per-MW values of a store were measured over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationPeriod {
    /// Values are already $/MW/year
    #[default]
    Annualized,
    /// Values cover the nine observed months and must be scaled to a year
    Observed,
}

/// Months in the observation window (January to September)
pub const OBSERVED_MONTHS: u32 = 9;

/// Multiplier from the observed window to a twelve-month year
pub fn annualization_factor() -> Decimal {
    Decimal::from(12) / Decimal::from(OBSERVED_MONTHS)
}

impl CalibrationPeriod {
    pub fn factor(&self) -> Decimal {
        match self {
            CalibrationPeriod::Annualized => Decimal::ONE,
            CalibrationPeriod::Observed => annualization_factor(),
        }
    }

    /// Scale a value measured over this period to a full year
    pub fn annualize(&self, value: Decimal) -> Decimal {
        match self {
            CalibrationPeriod::Annualized => value,
            CalibrationPeriod::Observed => {
                value * Decimal::from(12) / Decimal::from(OBSERVED_MONTHS)
            }
        }
    }
}
