//! Comparative analysis built on the valuation engine
//!
//! - Capture-rate presets from very conservative to aggressive
//! - Per-hub VT values
//! - Deltas against the reference configuration
//! - Observed monthly performance

mod baseline;
mod hubs;
mod monthly;
mod presets;

pub use baseline::{delta_vs_baseline, percent_change, BaselineDelta};
pub use hubs::{compare_hubs, HubComparison, HubValuation};
pub use monthly::{monthly_records, summarize, MonthlyRecord, MonthlySummary};
pub use presets::{capture_presets, compare_presets, CapturePreset, PresetValuation};
