//! Embedded calibration data
//!
//! Per-MW values are $/MW/year at baseline capture (90/50/10), aggregated
//! from the January to September backtest and annualized. Zone shares are
//! the percentage of forecast hours falling in each confidence zone.

use super::types::{Hub, HubStats};
use rust_decimal_macros::dec;

/// RN dispatch value, $/MW of plant capacity
pub const RN_PER_MW: [(u8, i64); 10] = [
    (3, 27840),
    (4, 25112),
    (5, 22461),
    (6, 19999),
    (7, 17802),
    (8, 15874),
    (9, 14188),
    (10, 12719),
    (11, 11442),
    (12, 10331),
];

/// VT Hedge value at the plant's settlement point, $/MW of plant capacity
pub const HEDGE_PLANT_PER_MW: [(u8, i64); 10] = [
    (3, 27190),
    (4, 25218),
    (5, 23255),
    (6, 21327),
    (7, 19512),
    (8, 17846),
    (9, 16331),
    (10, 14969),
    (11, 13744),
    (12, 12650),
];

/// High/medium/low share of hours, percent
pub const ZONE_DISTRIBUTION: [(u8, [i64; 3]); 10] = [
    (3, [52, 22, 26]),
    (4, [46, 23, 31]),
    (5, [40, 24, 36]),
    (6, [34, 24, 42]),
    (7, [29, 24, 47]),
    (8, [25, 23, 52]),
    (9, [21, 22, 57]),
    (10, [18, 21, 61]),
    (11, [15, 20, 65]),
    (12, [13, 18, 69]),
];

/// VT Alpha value per hub, $/MW of virtual position
pub const ALPHA_PER_MW: [(Hub, [(u8, i64); 10]); 5] = [
    (
        Hub::South,
        [
            (3, 71240),
            (4, 66012),
            (5, 60731),
            (6, 55555),
            (7, 50618),
            (8, 46104),
            (9, 42035),
            (10, 38420),
            (11, 35207),
            (12, 32361),
        ],
    ),
    (
        Hub::North,
        [
            (3, 58417),
            (4, 54130),
            (5, 49799),
            (6, 45555),
            (7, 41507),
            (8, 37805),
            (9, 34469),
            (10, 31504),
            (11, 28870),
            (12, 26536),
        ],
    ),
    (
        Hub::West,
        [
            (3, 96616),
            (4, 89526),
            (5, 82364),
            (6, 75344),
            (7, 68649),
            (8, 62527),
            (9, 57008),
            (10, 52105),
            (11, 47748),
            (12, 43888),
        ],
    ),
    (
        Hub::Houston,
        [
            (3, 52718),
            (4, 48849),
            (5, 44941),
            (6, 41111),
            (7, 37457),
            (8, 34117),
            (9, 31106),
            (10, 28431),
            (11, 26053),
            (12, 23947),
        ],
    ),
    (
        Hub::Pan,
        [
            (3, 95614),
            (4, 88598),
            (5, 81510),
            (6, 74563),
            (7, 67937),
            (8, 61878),
            (9, 56417),
            (10, 51565),
            (11, 47253),
            (12, 43433),
        ],
    ),
];

/// VT Hedge value when the hedge is placed at a selected hub, $/MW of plant capacity
pub const HEDGE_HUB_PER_MW: [(Hub, [(u8, i64); 10]); 5] = [
    (
        Hub::South,
        [
            (3, 27190),
            (4, 25218),
            (5, 23255),
            (6, 21327),
            (7, 19512),
            (8, 17846),
            (9, 16331),
            (10, 14969),
            (11, 13744),
            (12, 12650),
        ],
    ),
    (
        Hub::North,
        [
            (3, 23112),
            (4, 21435),
            (5, 19767),
            (6, 18128),
            (7, 16585),
            (8, 15169),
            (9, 13881),
            (10, 12724),
            (11, 11682),
            (12, 10752),
        ],
    ),
    (
        Hub::West,
        [
            (3, 33444),
            (4, 31018),
            (5, 28604),
            (6, 26232),
            (7, 24000),
            (8, 21951),
            (9, 20087),
            (10, 18412),
            (11, 16905),
            (12, 15560),
        ],
    ),
    (
        Hub::Houston,
        [
            (3, 21752),
            (4, 20174),
            (5, 18604),
            (6, 17062),
            (7, 15610),
            (8, 14277),
            (9, 13065),
            (10, 11975),
            (11, 10995),
            (12, 10120),
        ],
    ),
    (
        Hub::Pan,
        [
            (3, 32356),
            (4, 30009),
            (5, 27673),
            (6, 25379),
            (7, 23219),
            (8, 21237),
            (9, 19434),
            (10, 17813),
            (11, 16355),
            (12, 15054),
        ],
    ),
];

/// Observed price statistics per hub
pub fn hub_stats(hub: Hub) -> HubStats {
    match hub {
        Hub::South => HubStats {
            avg_da_price: dec!(38.42),
            avg_rt_price: dec!(36.95),
            avg_spread: dec!(8.73),
            volatility: dec!(24.6),
        },
        Hub::North => HubStats {
            avg_da_price: dec!(35.10),
            avg_rt_price: dec!(33.88),
            avg_spread: dec!(6.91),
            volatility: dec!(19.8),
        },
        Hub::West => HubStats {
            avg_da_price: dec!(33.27),
            avg_rt_price: dec!(31.04),
            avg_spread: dec!(11.62),
            volatility: dec!(31.5),
        },
        Hub::Houston => HubStats {
            avg_da_price: dec!(39.85),
            avg_rt_price: dec!(38.71),
            avg_spread: dec!(6.15),
            volatility: dec!(18.2),
        },
        Hub::Pan => HubStats {
            avg_da_price: dec!(29.64),
            avg_rt_price: dec!(27.13),
            avg_spread: dec!(10.87),
            volatility: dec!(29.3),
        },
    }
}

/// Observation window month labels
pub const MONTHS: [&str; 9] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep"];

/// Captured RN value per month, $
pub const MONTHLY_RN: [i64; 9] = [
    380000, 420000, 450000, 480000, 520000, 490000, 410000, 350000, 348790,
];

/// Captured VT Alpha value per month, $
pub const MONTHLY_ALPHA: [i64; 9] = [
    420000, 450000, 490000, 530000, 580000, 560000, 480000, 400000, 406599,
];

/// Captured VT Hedge value per month, $
pub const MONTHLY_HEDGE: [i64; 9] = [
    480000, 510000, 550000, 590000, 640000, 620000, 530000, 450000, 459442,
];

/// Plant production hours per month
pub const MONTHLY_PRODUCTION_HOURS: [u32; 9] = [350, 380, 400, 420, 430, 410, 390, 370, 345];

/// Average absolute DART spread per month, tenths of $/MWh
pub const MONTHLY_AVG_DART_TENTHS: [i64; 9] = [142, 158, 173, 191, 215, 202, 168, 145, 139];
