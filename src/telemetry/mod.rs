//! Telemetry module
//!
//! Structured logging for the CLI and library

mod logging;

pub use logging::{init_logging, LogFormat};

use crate::config::TelemetryConfig;

/// Guard held for the lifetime of the process
pub struct TelemetryGuard {
    _priv: (),
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.format)?;

    tracing::debug!(level = %config.log_level, format = ?config.format, "Telemetry initialized");

    Ok(TelemetryGuard { _priv: () })
}
