//! Hub comparison
//!
//! Values the VT strategies at every hub with all other inputs fixed.

use crate::calibration::{Hub, HubStats};
use crate::valuation::{
    EngineInput, HedgeHubPolicy, HubSelection, Strategy, StrategyValue, ValuationEngine,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// One hub's row in the comparison
#[derive(Debug, Clone, Serialize)]
pub struct HubValuation {
    pub hub: Hub,
    pub stats: HubStats,
    pub alpha: StrategyValue,
    /// Only present when the hedge follows the selected hub
    pub hedge: Option<StrategyValue>,
    /// Alpha annual value relative to the best hub (zero or negative)
    pub alpha_vs_best: Decimal,
    /// Hedge annual value relative to the best hub
    pub hedge_vs_best: Option<Decimal>,
}

/// Comparison across all hubs
#[derive(Debug, Clone, Serialize)]
pub struct HubComparison {
    pub rows: Vec<HubValuation>,
    pub best_alpha: Hub,
    pub best_hedge: Option<Hub>,
}

impl HubComparison {
    pub fn row(&self, hub: Hub) -> Option<&HubValuation> {
        self.rows.iter().find(|row| row.hub == hub)
    }
}

pub fn compare_hubs(engine: &ValuationEngine, input: &EngineInput) -> HubComparison {
    let calc = engine.calculator();
    let hub_policy = input.hedge_policy == HedgeHubPolicy::SelectedHub;

    let mut rows: Vec<HubValuation> = Hub::ALL
        .into_iter()
        .map(|hub| {
            let at_hub = input.with_hubs(HubSelection {
                alpha: hub,
                hedge: hub,
            });
            HubValuation {
                hub,
                stats: engine.store().hub_stats(hub),
                alpha: calc.evaluate(Strategy::VtAlpha, &at_hub),
                hedge: hub_policy.then(|| calc.evaluate(Strategy::VtHedge, &at_hub)),
                alpha_vs_best: Decimal::ZERO,
                hedge_vs_best: None,
            }
        })
        .collect();

    let best_alpha = best_by(&rows, |row| Some(row.alpha.annual));
    let best_hedge = best_by(&rows, |row| row.hedge.map(|hedge| hedge.annual));

    let best_alpha_value = best_alpha.map(|(_, value)| value).unwrap_or_default();
    let best_hedge_value = best_hedge.map(|(_, value)| value);
    for row in &mut rows {
        row.alpha_vs_best = row.alpha.annual - best_alpha_value;
        row.hedge_vs_best = row
            .hedge
            .zip(best_hedge_value)
            .map(|(hedge, best)| hedge.annual - best);
    }

    HubComparison {
        rows,
        best_alpha: best_alpha.map(|(hub, _)| hub).unwrap_or(input.hubs.alpha),
        best_hedge: best_hedge.map(|(hub, _)| hub),
    }
}

fn best_by(
    rows: &[HubValuation],
    value: impl Fn(&HubValuation) -> Option<Decimal>,
) -> Option<(Hub, Decimal)> {
    rows.iter()
        .filter_map(|row| value(row).map(|v| (row.hub, v)))
        .fold(None, |best, (hub, v)| match best {
            Some((_, best_value)) if best_value >= v => best,
            _ => Some((hub, v)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_best_alpha_hub() {
        let engine = ValuationEngine::embedded().unwrap();
        let comparison = compare_hubs(&engine, &EngineInput::baseline());
        assert_eq!(comparison.rows.len(), 5);
        assert_eq!(comparison.best_alpha, Hub::West);
        assert!(comparison.best_hedge.is_none());

        let west = comparison.row(Hub::West).unwrap();
        assert_eq!(west.alpha_vs_best, dec!(0));
        let south = comparison.row(Hub::South).unwrap();
        assert_eq!(south.alpha.per_mw, dec!(55555));
        // (55555 - 75344) * 100 MW
        assert_eq!(south.alpha_vs_best, dec!(-1978900));
        assert!(south.hedge.is_none());
    }

    #[test]
    fn test_hedge_compared_under_hub_policy() {
        let engine = ValuationEngine::embedded().unwrap();
        let input = EngineInput::baseline().with_hedge_policy(HedgeHubPolicy::SelectedHub);
        let comparison = compare_hubs(&engine, &input);
        assert_eq!(comparison.best_hedge, Some(Hub::West));
        let pan = comparison.row(Hub::Pan).unwrap();
        assert_eq!(pan.hedge.unwrap().per_mw, dec!(25379));
        assert!(pan.hedge_vs_best.unwrap() < dec!(0));
    }

    #[test]
    fn test_alpha_hub_ordering() {
        let engine = ValuationEngine::embedded().unwrap();
        for level in [3u8, 6, 9, 12] {
            let input = EngineInput::baseline().with_accuracy(level);
            let comparison = compare_hubs(&engine, &input);
            let alpha = |hub| comparison.row(hub).unwrap().alpha.per_mw;
            assert!(alpha(Hub::West) > alpha(Hub::Pan));
            assert!(alpha(Hub::Pan) > alpha(Hub::South));
            assert!(alpha(Hub::South) > alpha(Hub::North));
            assert!(alpha(Hub::North) > alpha(Hub::Houston));
        }
    }
}
