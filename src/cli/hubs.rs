//! Hub comparison command implementation

use super::input::{InputArgs, OutputFormat};
use super::report::{money, signed_money, RULE, THIN_RULE};
use crate::analysis::{compare_hubs, HubComparison};
use crate::config::Config;
use crate::valuation::ValuationEngine;
use clap::Args;
use std::fmt::Write;

#[derive(Args, Debug)]
pub struct HubsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl HubsArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let engine = ValuationEngine::embedded()?;
        let input = self.input.resolve(config)?;
        let comparison = compare_hubs(&engine, &input);

        tracing::info!(best_alpha = %comparison.best_alpha, "Hub comparison complete");

        self.format.emit(&comparison, || format_table(&comparison))
    }
}

fn format_table(comparison: &HubComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}\n                         HUB COMPARISON\n{RULE}");
    let _ = writeln!(
        out,
        "{:<8} {:>8} {:>8} {:>11} {:>12} {:>11} {:>12}",
        "Hub", "Spread", "Vol", "Alpha/MW", "Alpha", "vs Best", "Hedge"
    );
    let _ = writeln!(out, "{THIN_RULE}");
    for row in &comparison.rows {
        let hedge = row
            .hedge
            .map(|hedge| money(hedge.annual))
            .unwrap_or_else(|| "plant".to_string());
        let _ = writeln!(
            out,
            "{:<8} {:>8} {:>8} {:>11} {:>12} {:>11} {:>12}",
            row.hub.name(),
            format!("${:.2}", row.stats.avg_spread),
            format!("{:.2}", row.stats.volatility),
            money(row.alpha.per_mw),
            money(row.alpha.annual),
            signed_money(row.alpha_vs_best),
            hedge,
        );
    }
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(out, "Best alpha hub:   {}", comparison.best_alpha);
    if let Some(best_hedge) = comparison.best_hedge {
        let _ = writeln!(out, "Best hedge hub:   {best_hedge}");
    }
    let _ = write!(out, "{RULE}");
    out
}
