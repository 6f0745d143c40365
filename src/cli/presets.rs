//! Capture preset comparison command implementation

use super::input::{InputArgs, OutputFormat};
use super::report::{money, money_or_na, RULE, THIN_RULE};
use crate::analysis::{compare_presets, PresetValuation};
use crate::config::Config;
use crate::valuation::ValuationEngine;
use clap::Args;
use std::fmt::Write;

#[derive(Args, Debug)]
pub struct PresetsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl PresetsArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let engine = ValuationEngine::embedded()?;
        let input = self.input.resolve(config)?;
        let presets = compare_presets(&engine, &input);
        self.format.emit(&presets, || format_table(&presets))
    }
}

fn format_table(presets: &[PresetValuation]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}\n                     CAPTURE RATE PRESETS\n{RULE}");
    let _ = writeln!(
        out,
        "{:<18} {:>10} {:>14} {:>13} {:>10}",
        "Preset", "H/M/L", "Total", "FG Revenue", "$/MW"
    );
    let _ = writeln!(out, "{THIN_RULE}");
    for p in presets {
        let rates = p.preset.rates;
        let _ = writeln!(
            out,
            "{:<18} {:>10} {:>14} {:>13} {:>10}",
            p.preset.name,
            format!("{}/{}/{}", rates.high, rates.med, rates.low),
            money(p.result.total_value()),
            money(p.result.fg_revenue()),
            money_or_na(p.result.value_per_mw),
        );
    }
    let _ = write!(out, "{RULE}");
    out
}
