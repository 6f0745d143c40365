//! Calibration store
//!
//! Static lookup tables from the backtest: per-MW strategy values by MAE
//! level and hub, hourly zone distributions, hub statistics and the observed
//! monthly results.

mod store;
pub mod tables;
mod types;

pub use store::{CalibrationStore, CalibrationStoreBuilder, LevelTable, TableKey};
pub use types::{
    annualization_factor, AccuracyLevel, CalibrationError, CalibrationPeriod, Hub, HubStats,
    ZoneDistribution, LEVEL_COUNT, MAX_LEVEL, MIN_LEVEL, OBSERVED_MONTHS,
};
