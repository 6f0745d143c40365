//! Capture-rate preset comparison

use crate::valuation::{CaptureRates, EngineInput, ValuationEngine, ValuationResult};
use rust_decimal_macros::dec;
use serde::Serialize;

/// Named capture-rate assumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapturePreset {
    pub name: &'static str,
    pub rates: CaptureRates,
}

/// Presets from most to least conservative
pub fn capture_presets() -> [CapturePreset; 5] {
    [
        CapturePreset {
            name: "Very Conservative",
            rates: CaptureRates::new(dec!(70), dec!(30), dec!(0)),
        },
        CapturePreset {
            name: "Conservative",
            rates: CaptureRates::new(dec!(80), dec!(40), dec!(5)),
        },
        CapturePreset {
            name: "Base Case",
            rates: CaptureRates::baseline(),
        },
        CapturePreset {
            name: "Optimistic",
            rates: CaptureRates::new(dec!(95), dec!(60), dec!(15)),
        },
        CapturePreset {
            name: "Aggressive",
            rates: CaptureRates::new(dec!(98), dec!(70), dec!(20)),
        },
    ]
}

/// Valuation of one preset
#[derive(Debug, Clone, Serialize)]
pub struct PresetValuation {
    pub preset: CapturePreset,
    pub result: ValuationResult,
}

/// Value the input under every capture preset
pub fn compare_presets(engine: &ValuationEngine, input: &EngineInput) -> Vec<PresetValuation> {
    capture_presets()
        .into_iter()
        .map(|preset| PresetValuation {
            preset,
            result: engine.evaluate(&input.with_capture(preset.rates)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_ordered() {
        let engine = ValuationEngine::embedded().unwrap();
        let rows = compare_presets(&engine, &EngineInput::baseline());
        assert_eq!(rows.len(), 5);
        for pair in rows.windows(2) {
            assert!(pair[0].result.total_value() < pair[1].result.total_value());
        }
    }

    #[test]
    fn test_base_case_matches_baseline() {
        let engine = ValuationEngine::embedded().unwrap();
        let input = EngineInput::baseline();
        let rows = compare_presets(&engine, &input);
        let base = rows.iter().find(|row| row.preset.name == "Base Case").unwrap();
        assert_eq!(base.result, engine.evaluate(&input));
    }
}
