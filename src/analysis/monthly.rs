//! Observed monthly performance over the backtest window

use crate::calibration::{tables, CalibrationPeriod};
use rust_decimal::Decimal;
use serde::Serialize;

/// One observed month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRecord {
    pub month: &'static str,
    pub rn: Decimal,
    pub alpha: Decimal,
    pub hedge: Decimal,
    pub production_hours: u32,
    /// Average absolute DART spread, $/MWh
    pub avg_dart: Decimal,
}

impl MonthlyRecord {
    pub fn total(&self) -> Decimal {
        self.rn + self.alpha + self.hedge
    }
}

/// Totals across the observation window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub rn: Decimal,
    pub alpha: Decimal,
    pub hedge: Decimal,
    pub total: Decimal,
    /// Observed total scaled to a twelve-month year
    pub annualized_total: Decimal,
    pub production_hours: u32,
    pub best_month: Option<&'static str>,
}

pub fn monthly_records() -> Vec<MonthlyRecord> {
    (0..tables::MONTHS.len())
        .map(|i| MonthlyRecord {
            month: tables::MONTHS[i],
            rn: Decimal::from(tables::MONTHLY_RN[i]),
            alpha: Decimal::from(tables::MONTHLY_ALPHA[i]),
            hedge: Decimal::from(tables::MONTHLY_HEDGE[i]),
            production_hours: tables::MONTHLY_PRODUCTION_HOURS[i],
            avg_dart: Decimal::new(tables::MONTHLY_AVG_DART_TENTHS[i], 1),
        })
        .collect()
}

pub fn summarize(records: &[MonthlyRecord]) -> MonthlySummary {
    let rn: Decimal = records.iter().map(|r| r.rn).sum();
    let alpha: Decimal = records.iter().map(|r| r.alpha).sum();
    let hedge: Decimal = records.iter().map(|r| r.hedge).sum();
    let total = rn + alpha + hedge;

    // first month wins ties
    let best_month = records
        .iter()
        .fold(None::<&MonthlyRecord>, |best, record| match best {
            Some(b) if b.total() >= record.total() => Some(b),
            _ => Some(record),
        })
        .map(|record| record.month);

    MonthlySummary {
        rn,
        alpha,
        hedge,
        total,
        annualized_total: CalibrationPeriod::Observed.annualize(total),
        production_hours: records.iter().map(|r| r.production_hours).sum(),
        best_month,
    }
}
