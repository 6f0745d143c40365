//! Integration tests for dart-value

mod analysis_test;
mod config_test;
mod engine_test;
