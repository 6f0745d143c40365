//! Validated lookup tables

use super::tables;
use super::types::{
    AccuracyLevel, CalibrationError, CalibrationPeriod, Hub, HubStats, ZoneDistribution,
    LEVEL_COUNT, MAX_LEVEL, MIN_LEVEL,
};
use rust_decimal::Decimal;

/// Table keyed by every integer MAE level in the calibrated domain
#[derive(Debug, Clone, PartialEq)]
pub struct LevelTable<T> {
    entries: Vec<T>,
}

impl<T: Clone> LevelTable<T> {
    /// Build a table, rejecting gaps, duplicates and stray levels
    pub fn from_entries(
        table: &str,
        entries: impl IntoIterator<Item = (u8, T)>,
    ) -> Result<Self, CalibrationError> {
        let mut slots: Vec<Option<T>> = vec![None; LEVEL_COUNT];

        for (level, value) in entries {
            if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
                return Err(CalibrationError::UnexpectedLevel {
                    table: table.to_string(),
                    level,
                });
            }
            let slot = &mut slots[usize::from(level - MIN_LEVEL)];
            if slot.is_some() {
                return Err(CalibrationError::DuplicateLevel {
                    table: table.to_string(),
                    level,
                });
            }
            *slot = Some(value);
        }

        let entries = slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.ok_or_else(|| CalibrationError::MissingLevel {
                    table: table.to_string(),
                    level: MIN_LEVEL + i as u8,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }
}

impl<T> LevelTable<T> {
    /// Entry at an integer level, clamped to the table's range
    pub fn get(&self, level: u8) -> &T {
        let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
        &self.entries[usize::from(level - MIN_LEVEL)]
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &T)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, value)| (MIN_LEVEL + i as u8, value))
    }
}

impl LevelTable<Decimal> {
    fn from_values(table: &str, values: &[(u8, i64)]) -> Result<Self, CalibrationError> {
        for &(level, value) in values {
            if value < 0 {
                return Err(CalibrationError::NegativeValue {
                    table: table.to_string(),
                    level,
                });
            }
        }
        Self::from_entries(
            table,
            values
                .iter()
                .map(|&(level, value)| (level, Decimal::from(value))),
        )
    }

    /// Value at a possibly fractional level
    ///
    /// Clamps to [3, 12]; between integer levels the two bracketing entries
    /// are linearly interpolated.
    pub fn interpolate(&self, level: AccuracyLevel) -> Decimal {
        let (lower, upper, fraction) = level.bracket();
        let lo = *self.get(lower);
        if lower == upper {
            return lo;
        }
        let hi = *self.get(upper);
        lo + (hi - lo) * fraction
    }
}

/// Identifies one per-MW calibration table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKey {
    /// Resource node dispatch
    Rn,
    /// Virtual alpha trading at a hub
    Alpha(Hub),
    /// Virtual hedge at the plant's settlement point
    HedgePlant,
    /// Virtual hedge at a selected hub
    Hedge(Hub),
}

/// Read-only calibration store
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationStore {
    period: CalibrationPeriod,
    zones: LevelTable<ZoneDistribution>,
    rn: LevelTable<Decimal>,
    hedge_plant: LevelTable<Decimal>,
    alpha: Vec<LevelTable<Decimal>>,
    hedge: Vec<LevelTable<Decimal>>,
    hub_stats: Vec<HubStats>,
}

impl CalibrationStore {
    /// Store built from the embedded backtest tables
    pub fn embedded() -> Result<Self, CalibrationError> {
        let mut builder = CalibrationStoreBuilder::new()
            .rn(&tables::RN_PER_MW)
            .hedge_plant(&tables::HEDGE_PLANT_PER_MW)
            .zones(&tables::ZONE_DISTRIBUTION);
        for (hub, values) in &tables::ALPHA_PER_MW {
            builder = builder.alpha(*hub, values);
        }
        for (hub, values) in &tables::HEDGE_HUB_PER_MW {
            builder = builder.hedge(*hub, values);
        }
        for hub in Hub::ALL {
            builder = builder.hub_stats(hub, tables::hub_stats(hub));
        }
        builder.build()
    }

    pub fn builder() -> CalibrationStoreBuilder {
        CalibrationStoreBuilder::new()
    }

    pub fn period(&self) -> CalibrationPeriod {
        self.period
    }

    /// Zone distribution at the level's nearest calibrated integer
    pub fn zones(&self, level: AccuracyLevel) -> ZoneDistribution {
        *self.zones.get(level.rounded())
    }

    pub fn zone_table(&self) -> &LevelTable<ZoneDistribution> {
        &self.zones
    }

    pub fn table(&self, key: TableKey) -> &LevelTable<Decimal> {
        match key {
            TableKey::Rn => &self.rn,
            TableKey::Alpha(hub) => &self.alpha[hub.index()],
            TableKey::HedgePlant => &self.hedge_plant,
            TableKey::Hedge(hub) => &self.hedge[hub.index()],
        }
    }

    pub fn hub_stats(&self, hub: Hub) -> HubStats {
        self.hub_stats[hub.index()]
    }
}

/// Collects raw table rows and validates them into a [`CalibrationStore`]
#[derive(Debug, Clone, Default)]
pub struct CalibrationStoreBuilder {
    period: CalibrationPeriod,
    zones: Vec<(u8, [i64; 3])>,
    rn: Vec<(u8, i64)>,
    hedge_plant: Vec<(u8, i64)>,
    alpha: Vec<(Hub, Vec<(u8, i64)>)>,
    hedge: Vec<(Hub, Vec<(u8, i64)>)>,
    hub_stats: Vec<(Hub, HubStats)>,
}

impl CalibrationStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period(mut self, period: CalibrationPeriod) -> Self {
        self.period = period;
        self
    }

    pub fn zones(mut self, rows: &[(u8, [i64; 3])]) -> Self {
        self.zones = rows.to_vec();
        self
    }

    pub fn rn(mut self, rows: &[(u8, i64)]) -> Self {
        self.rn = rows.to_vec();
        self
    }

    pub fn hedge_plant(mut self, rows: &[(u8, i64)]) -> Self {
        self.hedge_plant = rows.to_vec();
        self
    }

    pub fn alpha(mut self, hub: Hub, rows: &[(u8, i64)]) -> Self {
        self.alpha.retain(|(h, _)| *h != hub);
        self.alpha.push((hub, rows.to_vec()));
        self
    }

    pub fn hedge(mut self, hub: Hub, rows: &[(u8, i64)]) -> Self {
        self.hedge.retain(|(h, _)| *h != hub);
        self.hedge.push((hub, rows.to_vec()));
        self
    }

    pub fn hub_stats(mut self, hub: Hub, stats: HubStats) -> Self {
        self.hub_stats.retain(|(h, _)| *h != hub);
        self.hub_stats.push((hub, stats));
        self
    }

    pub fn build(self) -> Result<CalibrationStore, CalibrationError> {
        let zones = LevelTable::from_entries(
            "zones",
            self.zones.iter().map(|&(level, [high, med, low])| {
                (
                    level,
                    ZoneDistribution::new(
                        Decimal::from(high),
                        Decimal::from(med),
                        Decimal::from(low),
                    ),
                )
            }),
        )?;
        for (level, zone) in zones.iter() {
            zone.validate(level)?;
        }

        let rn = LevelTable::from_values("rn", &self.rn)?;
        let hedge_plant = LevelTable::from_values("hedge_plant", &self.hedge_plant)?;
        let alpha = per_hub("alpha", &self.alpha)?;
        let hedge = per_hub("hedge", &self.hedge)?;

        let hub_stats = Hub::ALL
            .into_iter()
            .map(|hub| {
                self.hub_stats
                    .iter()
                    .find(|(h, _)| *h == hub)
                    .map(|(_, stats)| *stats)
                    .ok_or_else(|| CalibrationError::MissingHub {
                        table: "hub_stats".to_string(),
                        hub,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(period = ?self.period, "Calibration store validated");

        Ok(CalibrationStore {
            period: self.period,
            zones,
            rn,
            hedge_plant,
            alpha,
            hedge,
            hub_stats,
        })
    }
}

fn per_hub(
    table: &str,
    rows: &[(Hub, Vec<(u8, i64)>)],
) -> Result<Vec<LevelTable<Decimal>>, CalibrationError> {
    Hub::ALL
        .into_iter()
        .map(|hub| {
            let (_, values) =
                rows.iter()
                    .find(|(h, _)| *h == hub)
                    .ok_or_else(|| CalibrationError::MissingHub {
                        table: table.to_string(),
                        hub,
                    })?;
            LevelTable::from_values(&format!("{table}.{hub}"), values)
        })
        .collect()
}
