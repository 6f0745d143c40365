//! dart-value: value created by DART spread forecasts for a generation plant
//!
//! This library provides the core components for:
//! - Calibration tables per forecast accuracy level and trading hub
//! - Confidence-zone capture-rate rescaling
//! - Per-strategy valuation (RN, VT Alpha, VT Hedge)
//! - Scenario composition and vendor/client revenue split
//! - Break-even and capacity targets
//! - Accuracy and capacity sensitivity sweeps
//! - Preset, hub, baseline and monthly comparisons

pub mod analysis;
pub mod calibration;
pub mod cli;
pub mod config;
pub mod telemetry;
pub mod valuation;
