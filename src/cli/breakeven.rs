//! Break-even command implementation

use super::input::{InputArgs, OutputFormat};
use super::report::{money, mw, pct, RULE, THIN_RULE};
use crate::config::{BudgetYear, Config};
use crate::valuation::{BreakevenReport, Outcome, ValuationEngine};
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Args, Debug)]
pub struct BreakevenArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Budget year (1, 2 or 3)
    #[arg(long)]
    pub year: Option<BudgetYear>,

    /// Custom annual budget in $, overrides the schedule
    #[arg(long)]
    pub budget: Option<Decimal>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl BreakevenArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let engine = ValuationEngine::embedded()?;
        let input = self.input.resolve(config)?;

        let mut budget = config.budget.clone();
        if let Some(year) = self.year {
            budget.year = year;
            budget.custom = None;
        }
        if let Some(custom) = self.budget {
            if custom.is_sign_negative() {
                anyhow::bail!("budget must be non-negative, got {custom}");
            }
            budget.custom = Some(custom);
        }
        let annual_budget = budget.annual_budget();

        let report = engine.evaluate(&input).breakeven(annual_budget);
        if let Outcome::NotComputable(reason) = report {
            tracing::warn!(%reason, "Break-even not computable");
        }

        let label = match budget.custom {
            Some(_) => "Custom".to_string(),
            None => budget.year.to_string(),
        };
        self.format.emit(&report, || format_table(&label, &report))
    }
}

fn format_table(label: &str, report: &Outcome<BreakevenReport>) -> String {
    let r = match report {
        Outcome::Computed(r) => r,
        Outcome::NotComputable(reason) => {
            return format!("\n{RULE}\nBreak-even not computable: {reason}\n{RULE}");
        }
    };

    format!(
        r#"
{RULE}
                       BREAK-EVEN ANALYSIS
{RULE}

BUDGET
{THIN_RULE}
Annual Budget:    {} ({})
Revenue Target:   {}
MW Contracted:    {}

PER MW AT SCALE
{THIN_RULE}
Break-even:       {}
FG Revenue:       {}
FG Margin:        {}
Client Uplift:    {}
Total Value:      {}

COVERAGE
{THIN_RULE}
Margin of Safety: {}
Cost Coverage:    {}
{RULE}
"#,
        money(r.annual_budget),
        label,
        money(r.revenue_target),
        mw(r.mw_contracted),
        money(r.breakeven_per_mw),
        money(r.fg_revenue_per_mw_at_scale),
        money(r.fg_margin_per_mw_at_scale),
        money(r.client_uplift_per_mw),
        money(r.total_per_mw),
        r.margin_of_safety.map(|m| format!("{:.1}x", m)),
        r.cost_coverage_share.map(|s| pct(s * dec!(100))),
    )
}
