//! Configuration loading tests

use dart_value::config::{BudgetYear, Config};
use dart_value::valuation::{EngineInput, ValuationEngine};
use rust_decimal_macros::dec;
use std::io::Write;
use std::path::Path;

#[test]
fn test_example_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.toml.example");
    let config = Config::load(&path).unwrap();
    assert_eq!(config.engine_input(), EngineInput::baseline());
    assert_eq!(config.budget.year, BudgetYear::Year1);
    assert_eq!(config.budget.annual_budget(), dec!(682000));
}

#[test]
fn test_budget_file_feeds_breakeven() {
    let mut budget = tempfile::NamedTempFile::new().unwrap();
    writeln!(budget, "year_1 = 700000\nyear_2 = 1500000\nyear_3 = 2200000").unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[budget]\npath = {:?}\nyear = \"year_2\"",
        budget.path().display().to_string()
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    let annual_budget = config.budget.annual_budget();
    assert_eq!(annual_budget, dec!(1500000));

    let engine = ValuationEngine::embedded().unwrap();
    let report = engine
        .evaluate(&config.engine_input())
        .breakeven(annual_budget)
        .value()
        .unwrap();
    assert_eq!(report.annual_budget, dec!(1500000));
}

#[test]
fn test_missing_budget_file_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[budget]\npath = \"/nonexistent/budget.toml\"\nyear = \"year_3\""
    )
    .unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.budget.annual_budget(), dec!(2076800));
}

#[test]
fn test_out_of_range_config_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[capture]\nhigh = 40").unwrap();
    assert!(Config::load(file.path()).is_err());
}
