//! Capture-rate rescaling
//!
//! Calibration values assume the baseline capture rates (90% high, 50%
//! medium, 10% low). A user override is applied as the ratio of the new
//! zone-weighted capture to the baseline one.

use crate::calibration::{AccuracyLevel, ZoneDistribution};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Percentage of the zone opportunity captured, per zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureRates {
    pub high: Decimal,
    pub med: Decimal,
    pub low: Decimal,
}

impl CaptureRates {
    pub fn new(high: Decimal, med: Decimal, low: Decimal) -> Self {
        Self { high, med, low }
    }

    /// Rates the calibration tables were produced with
    pub fn baseline() -> Self {
        Self::new(dec!(90), dec!(50), dec!(10))
    }

    pub fn is_baseline(&self) -> bool {
        *self == Self::baseline()
    }
}

impl Default for CaptureRates {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Zone-weighted capture at the baseline rates
pub fn baseline_weighted(zones: &ZoneDistribution) -> Decimal {
    zones.high_pct * dec!(0.90) + zones.med_pct * dec!(0.50) + zones.low_pct * dec!(0.10)
}

/// Zone-weighted capture at the given rates
pub fn weighted_capture(zones: &ZoneDistribution, rates: &CaptureRates) -> Decimal {
    zones.high_pct * rates.high / dec!(100)
        + zones.med_pct * rates.med / dec!(100)
        + zones.low_pct * rates.low / dec!(100)
}

/// Rescale a baseline-calibrated value to new capture rates
///
/// A distribution with no weight leaves the value untouched.
pub fn rescale(base_value: Decimal, zones: &ZoneDistribution, rates: &CaptureRates) -> Decimal {
    let baseline = baseline_weighted(zones);
    if rates.is_baseline() || baseline <= Decimal::ZERO {
        return base_value;
    }
    base_value * weighted_capture(zones, rates) / baseline
}

/// One row of the confidence-zone table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneRow {
    /// Share of forecast hours, percent
    pub share_pct: Decimal,
    /// Capture rate applied, percent
    pub capture_pct: Decimal,
    /// Weighted capture contribution (share × rate / 100)
    pub weighted: Decimal,
}

/// Confidence-zone analysis for one accuracy level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneBreakdown {
    pub level: AccuracyLevel,
    pub high_threshold: Decimal,
    pub low_threshold: Decimal,
    pub high: ZoneRow,
    pub med: ZoneRow,
    pub low: ZoneRow,
    /// Fraction of total opportunity captured across all zones, percent
    pub effective_capture_pct: Decimal,
    /// Effective capture relative to the baseline rates
    pub rescale_ratio: Decimal,
}

impl ZoneBreakdown {
    pub fn new(level: AccuracyLevel, zones: &ZoneDistribution, rates: &CaptureRates) -> Self {
        let row = |share_pct: Decimal, capture_pct: Decimal| ZoneRow {
            share_pct,
            capture_pct,
            weighted: share_pct * capture_pct / dec!(100),
        };
        let total = zones.total();
        let weighted = weighted_capture(zones, rates);
        let effective_capture_pct = if total > Decimal::ZERO {
            weighted / total * dec!(100)
        } else {
            Decimal::ZERO
        };
        let baseline = baseline_weighted(zones);
        let rescale_ratio = if baseline > Decimal::ZERO {
            weighted / baseline
        } else {
            Decimal::ONE
        };

        Self {
            level,
            high_threshold: level.high_threshold(),
            low_threshold: level.low_threshold(),
            high: row(zones.high_pct, rates.high),
            med: row(zones.med_pct, rates.med),
            low: row(zones.low_pct, rates.low),
            effective_capture_pct,
            rescale_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones() -> ZoneDistribution {
        ZoneDistribution::new(dec!(34), dec!(24), dec!(42))
    }

    #[test]
    fn test_baseline_is_identity() {
        let value = rescale(dec!(19999), &zones(), &CaptureRates::baseline());
        assert_eq!(value, dec!(19999));

        let third = dec!(1) / dec!(3);
        assert_eq!(rescale(third, &zones(), &CaptureRates::baseline()), third);
    }

    #[test]
    fn test_doubling_rates_doubles_value() {
        let rates = CaptureRates::new(dec!(90), dec!(50), dec!(10));
        let doubled = CaptureRates::new(dec!(180), dec!(100), dec!(20));
        let base = rescale(dec!(1000), &zones(), &rates);
        let scaled = rescale(dec!(1000), &zones(), &doubled);
        assert_eq!(scaled, base * dec!(2));
    }

    #[test]
    fn test_ratio_matches_weighted_capture() {
        let z = zones();
        let rates = CaptureRates::new(dec!(80), dec!(40), dec!(5));
        let ratio = rescale(dec!(50000), &z, &rates) / rescale(dec!(50000), &z, &CaptureRates::baseline());
        let expected = weighted_capture(&z, &rates) / baseline_weighted(&z);
        assert!((ratio - expected).abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_degenerate_zones_leave_value() {
        let empty = ZoneDistribution::default();
        let rates = CaptureRates::new(dec!(70), dec!(30), dec!(0));
        assert_eq!(rescale(dec!(12345), &empty, &rates), dec!(12345));
    }

    #[test]
    fn test_zero_rates_give_zero() {
        let rates = CaptureRates::new(dec!(0), dec!(0), dec!(0));
        assert_eq!(rescale(dec!(12345), &zones(), &rates), dec!(0));
    }

    #[test]
    fn test_zone_breakdown() {
        let breakdown =
            ZoneBreakdown::new(AccuracyLevel::from(6u8), &zones(), &CaptureRates::baseline());
        assert_eq!(breakdown.high_threshold, dec!(12));
        assert_eq!(breakdown.low_threshold, dec!(6));
        assert_eq!(breakdown.high.weighted, dec!(30.6));
        assert_eq!(breakdown.med.weighted, dec!(12));
        assert_eq!(breakdown.low.weighted, dec!(4.2));
        // 30.6 + 12 + 4.2 = 46.8 of 100
        assert_eq!(breakdown.effective_capture_pct, dec!(46.8));
        assert_eq!(breakdown.rescale_ratio, dec!(1));
    }
}
