//! Monthly performance command implementation

use super::input::OutputFormat;
use super::report::{money, RULE, THIN_RULE};
use crate::analysis::{monthly_records, summarize, MonthlyRecord, MonthlySummary};
use clap::Args;
use serde::Serialize;
use std::fmt::Write;

#[derive(Args, Debug)]
pub struct MonthlyArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct MonthlyReport {
    months: Vec<MonthlyRecord>,
    summary: MonthlySummary,
}

impl MonthlyArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let months = monthly_records();
        let summary = summarize(&months);
        let report = MonthlyReport { months, summary };
        self.format.emit(&report, || format_table(&report))
    }
}

fn format_table(report: &MonthlyReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}\n                     OBSERVED MONTHLY VALUE\n{RULE}");
    let _ = writeln!(
        out,
        "{:<6} {:>12} {:>12} {:>12} {:>13} {:>7} {:>8}",
        "Month", "RN", "VT Alpha", "VT Hedge", "Total", "Hours", "|DART|"
    );
    let _ = writeln!(out, "{THIN_RULE}");
    for m in &report.months {
        let _ = writeln!(
            out,
            "{:<6} {:>12} {:>12} {:>12} {:>13} {:>7} {:>8}",
            m.month,
            money(m.rn),
            money(m.alpha),
            money(m.hedge),
            money(m.total()),
            m.production_hours,
            format!("${:.1}", m.avg_dart),
        );
    }
    let s = &report.summary;
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(
        out,
        "{:<6} {:>12} {:>12} {:>12} {:>13} {:>7}",
        "Total",
        money(s.rn),
        money(s.alpha),
        money(s.hedge),
        money(s.total),
        s.production_hours,
    );
    let _ = writeln!(out, "Annualized total: {}", money(s.annualized_total));
    if let Some(best) = s.best_month {
        let _ = writeln!(out, "Best month:       {best}");
    }
    let _ = write!(out, "{RULE}");
    out
}
