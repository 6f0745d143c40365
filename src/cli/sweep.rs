//! Accuracy sweep command implementation

use super::input::{InputArgs, OutputFormat};
use super::report::{money, money_or_na, RULE, THIN_RULE};
use crate::config::Config;
use crate::valuation::{level_range, sweep_accuracy, ValuationEngine, ValuationResult};
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt::Write;

#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// First MAE in the sweep ($/MWh)
    #[arg(long, default_value = "3")]
    pub from: Decimal,

    /// Last MAE in the sweep ($/MWh)
    #[arg(long, default_value = "12")]
    pub to: Decimal,

    /// Step between points ($/MWh)
    #[arg(long, default_value = "1")]
    pub step: Decimal,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl SweepArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        if self.step <= dec!(0) {
            anyhow::bail!("--step must be positive, got {}", self.step);
        }
        let levels = level_range(self.from, self.to, self.step)?;
        let engine = ValuationEngine::embedded()?;
        let input = self.input.resolve(config)?;
        let results = sweep_accuracy(&engine, &levels, &input);

        tracing::info!(points = results.len(), "Accuracy sweep complete");

        self.format.emit(&results, || format_table(&results))
    }
}

fn format_table(results: &[ValuationResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}\n                      ACCURACY SENSITIVITY\n{RULE}");
    let _ = writeln!(
        out,
        "{:>8} {:>12} {:>12} {:>12} {:>14} {:>10} {:>12}",
        "MAE", "RN", "VT Alpha", "VT Hedge", "Total", "$/MW", "FG Revenue"
    );
    let _ = writeln!(out, "{THIN_RULE}");
    for r in results {
        let _ = writeln!(
            out,
            "{:>8} {:>12} {:>12} {:>12} {:>14} {:>10} {:>12}",
            format!("${}", r.accuracy.value().normalize()),
            money(r.annual.rn),
            money(r.annual.vt_alpha),
            money(r.annual.vt_hedge),
            money(r.total_value()),
            money_or_na(r.value_per_mw),
            money(r.fg_revenue()),
        );
    }
    let _ = write!(out, "{RULE}");
    out
}
