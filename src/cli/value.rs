//! Value command implementation

use super::input::{InputArgs, OutputFormat};
use super::report::{money, money_or_na, mw, pct, RULE, THIN_RULE};
use crate::analysis::{delta_vs_baseline, BaselineDelta};
use crate::config::Config;
use crate::valuation::{Strategy, ValuationEngine, ValuationResult};
use clap::Args;
use serde::Serialize;
use std::fmt::Write;

#[derive(Args, Debug)]
pub struct ValueArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ValueReport {
    result: ValuationResult,
    vs_baseline: BaselineDelta,
}

impl ValueArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let engine = ValuationEngine::embedded()?;
        let input = self.input.resolve(config)?;
        let result = engine.evaluate(&input);
        let vs_baseline = delta_vs_baseline(&engine, &input, &result);

        tracing::info!(total = %result.total_value(), "Valuation complete");

        let report = ValueReport {
            result,
            vs_baseline,
        };
        self.format.emit(&report, || format_table(&report))
    }
}

fn format_table(report: &ValueReport) -> String {
    let r = &report.result;
    let mut strategies = String::new();
    for strategy in Strategy::ALL {
        let value = r.strategies.get(strategy);
        let _ = writeln!(
            strategies,
            "{:<18} {:>12}   {:>12}   {:>12}",
            strategy.to_string(),
            money(value.per_mw),
            mw(value.capacity_mw),
            money(r.annual.get(strategy)),
        );
    }
    let delta = &report.vs_baseline;
    let changes = if delta.changed.is_empty() {
        "none".to_string()
    } else {
        delta.changed.join(", ")
    };

    format!(
        r#"
{RULE}
                         VALUE CREATION
{RULE}

FORECAST
{THIN_RULE}
MAE:              {} (effective {})
Zones:            high > ${}/MWh, low < ${}/MWh
Scenario:         {}

STRATEGIES               $/MW          Capacity        Annual
{THIN_RULE}
{strategies}
TOTALS
{THIN_RULE}
Total Value:      {}
Value per MW:     {}
FG Revenue:       {} ({} fee)
Client Uplift:    {}
MW for {} target: {}

VS BASELINE
{THIN_RULE}
Value per MW:     {}
Total Value:      {}
Changed:          {}
{RULE}
"#,
        r.accuracy,
        r.effective_accuracy,
        r.high_threshold.normalize(),
        r.low_threshold.normalize(),
        r.scenario,
        money(r.total_value()),
        money_or_na(r.value_per_mw),
        money(r.fg_revenue()),
        pct(r.fee_rate_pct),
        money(r.client_uplift()),
        money(r.revenue_target),
        r.mw_for_target.map(mw),
        delta.per_mw_change_pct.map(pct),
        delta.total_change_pct.map(pct),
        changes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::EngineInput;

    #[test]
    fn test_table_lists_every_strategy() {
        let engine = ValuationEngine::embedded().unwrap();
        let input = EngineInput::baseline();
        let result = engine.evaluate(&input);
        let report = ValueReport {
            vs_baseline: delta_vs_baseline(&engine, &input, &result),
            result,
        };
        let table = format_table(&report);
        for strategy in Strategy::ALL {
            let row = table
                .lines()
                .find(|line| line.starts_with(&format!("{strategy} ")))
                .unwrap();
            assert!(row.contains(&money(report.result.annual.get(strategy))));
        }
    }
}
