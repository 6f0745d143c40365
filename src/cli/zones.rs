//! Confidence zone command implementation

use super::input::{InputArgs, OutputFormat};
use super::report::{pct, RULE, THIN_RULE};
use crate::calibration::ZoneDistribution;
use crate::config::Config;
use crate::valuation::{ValuationEngine, ZoneBreakdown};
use clap::Args;
use serde::Serialize;
use std::fmt::Write;

#[derive(Args, Debug)]
pub struct ZonesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ZoneLevel {
    level: u8,
    zones: ZoneDistribution,
}

#[derive(Debug, Serialize)]
struct ZonesReport {
    breakdown: ZoneBreakdown,
    table: Vec<ZoneLevel>,
}

impl ZonesArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let engine = ValuationEngine::embedded()?;
        let input = self.input.resolve(config)?;
        let zones = engine.store().zones(input.accuracy);
        let report = ZonesReport {
            breakdown: ZoneBreakdown::new(input.accuracy, &zones, &input.capture),
            table: engine
                .store()
                .zone_table()
                .iter()
                .map(|(level, zones)| ZoneLevel {
                    level,
                    zones: *zones,
                })
                .collect(),
        };
        self.format.emit(&report, || format_table(&report))
    }
}

fn format_table(report: &ZonesReport) -> String {
    let b = &report.breakdown;
    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}\n                        CONFIDENCE ZONES\n{RULE}");
    let _ = writeln!(out, "MAE {}", b.level);
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(
        out,
        "{:<8} {:>16} {:>8} {:>9} {:>10}",
        "Zone", "|DART|", "Hours", "Capture", "Weighted"
    );
    for (name, range, row) in [
        ("High", format!("> ${}", b.high_threshold.normalize()), &b.high),
        (
            "Medium",
            format!("${}-${}", b.low_threshold.normalize(), b.high_threshold.normalize()),
            &b.med,
        ),
        ("Low", format!("< ${}", b.low_threshold.normalize()), &b.low),
    ] {
        let _ = writeln!(
            out,
            "{:<8} {:>16} {:>8} {:>9} {:>10}",
            name,
            range,
            pct(row.share_pct),
            pct(row.capture_pct),
            pct(row.weighted),
        );
    }
    let _ = writeln!(out, "Effective capture: {}", pct(b.effective_capture_pct));
    let _ = writeln!(out, "Rescale vs 90/50/10: {:.3}x", b.rescale_ratio);

    let _ = writeln!(out, "\nCALIBRATED DISTRIBUTION\n{THIN_RULE}");
    let _ = writeln!(out, "{:>6} {:>8} {:>8} {:>8}", "MAE", "High", "Medium", "Low");
    for level in &report.table {
        let _ = writeln!(
            out,
            "{:>6} {:>8} {:>8} {:>8}",
            format!("${}", level.level),
            pct(level.zones.high_pct),
            pct(level.zones.med_pct),
            pct(level.zones.low_pct),
        );
    }
    let _ = write!(out, "{RULE}");
    out
}
