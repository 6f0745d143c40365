//! Plant capacity sweep command implementation

use super::input::{InputArgs, OutputFormat};
use super::report::{money, money_or_na, mw, RULE, THIN_RULE};
use crate::config::Config;
use crate::valuation::{sweep_capacity, ValuationEngine, ValuationResult};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write;

#[derive(Args, Debug)]
pub struct CapacityArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Plant capacities to value (MW, comma separated)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "100,150,200,240,300,400,500"
    )]
    pub capacities: Vec<Decimal>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct CapacityReport {
    /// Valuation at the configured plant
    base: ValuationResult,
    points: Vec<ValuationResult>,
}

impl CapacityArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let engine = ValuationEngine::embedded()?;
        let input = self.input.resolve(config)?;
        let report = CapacityReport {
            base: engine.evaluate(&input),
            points: sweep_capacity(&engine, &self.capacities, &input)?,
        };

        tracing::info!(points = report.points.len(), "Capacity sweep complete");

        self.format.emit(&report, || format_table(&report))
    }
}

fn format_table(report: &CapacityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}\n                      CAPACITY SENSITIVITY\n{RULE}");
    let _ = writeln!(
        out,
        "{:>10} {:>10} {:>14} {:>13} {:>13} {:>10}",
        "Plant", "Virtual", "Total", "FG Revenue", "Uplift", "$/MW"
    );
    let _ = writeln!(out, "{THIN_RULE}");
    for r in &report.points {
        let _ = writeln!(
            out,
            "{:>10} {:>10} {:>14} {:>13} {:>13} {:>10}",
            mw(r.plant_capacity_mw),
            mw(r.virtual_position_mw),
            money(r.total_value()),
            money(r.fg_revenue()),
            money(r.client_uplift()),
            money_or_na(r.value_per_mw),
        );
    }
    let base = &report.base;
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(
        out,
        "MW for {} target: {}",
        money(base.revenue_target),
        base.mw_for_target.map(mw)
    );
    let _ = write!(out, "{RULE}");
    out
}
