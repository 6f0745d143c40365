//! CLI interface for dart-value
//!
//! Provides subcommands for:
//! - `value`: Value one parameter set
//! - `sweep`: Value across forecast accuracy levels
//! - `capacity`: Value across plant capacities
//! - `presets`: Compare capture-rate presets
//! - `hubs`: Compare trading hubs
//! - `breakeven`: Break-even economics against the budget
//! - `monthly`: Observed monthly performance
//! - `zones`: Confidence zone breakdown
//! - `config`: Show configuration

mod breakeven;
mod capacity;
mod hubs;
mod input;
mod monthly;
mod presets;
mod report;
mod sweep;
mod value;
mod zones;

pub use breakeven::BreakevenArgs;
pub use capacity::CapacityArgs;
pub use hubs::HubsArgs;
pub use input::{InputArgs, OutputFormat};
pub use monthly::MonthlyArgs;
pub use presets::PresetsArgs;
pub use sweep::SweepArgs;
pub use value::ValueArgs;
pub use zones::ZonesArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dart-value")]
#[command(about = "Value created by DART spread forecasts for a generation plant")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Value one parameter set
    Value(ValueArgs),
    /// Value across forecast accuracy levels
    Sweep(SweepArgs),
    /// Value across plant capacities
    Capacity(CapacityArgs),
    /// Compare capture-rate presets
    Presets(PresetsArgs),
    /// Compare trading hubs
    Hubs(HubsArgs),
    /// Break-even economics against the budget
    Breakeven(BreakevenArgs),
    /// Observed monthly performance
    Monthly(MonthlyArgs),
    /// Confidence zone breakdown
    Zones(ZonesArgs),
    /// Show configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::Hub;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_value_flags() {
        let cli = Cli::try_parse_from([
            "dart-value",
            "value",
            "--mae",
            "4.5",
            "--alpha-hub",
            "west",
            "--scenario",
            "vt-only",
            "--format",
            "json",
        ])
        .unwrap();
        let Commands::Value(args) = cli.command else {
            panic!("expected value command");
        };
        assert_eq!(args.input.mae, Some(dec!(4.5)));
        assert_eq!(args.input.alpha_hub, Some(Hub::West));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(cli.config, "config.toml");
    }

    #[test]
    fn test_parse_capacity_list() {
        let cli = Cli::try_parse_from(["dart-value", "capacity", "--capacities", "100,240.5"])
            .unwrap();
        let Commands::Capacity(args) = cli.command else {
            panic!("expected capacity command");
        };
        assert_eq!(args.capacities, vec![dec!(100), dec!(240.5)]);
    }

    #[test]
    fn test_unknown_hub_rejected() {
        let result = Cli::try_parse_from(["dart-value", "hubs", "--alpha-hub", "east"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sweep_bounds_are_errors() {
        let config = crate::config::Config::default();
        let cli = Cli::try_parse_from([
            "dart-value",
            "sweep",
            "--from",
            "79228162514264337593543950334",
            "--to",
            "79228162514264337593543950335",
        ])
        .unwrap();
        let Commands::Sweep(args) = cli.command else {
            panic!("expected sweep command");
        };
        assert!(args.execute(&config).is_err());

        let cli = Cli::try_parse_from([
            "dart-value",
            "capacity",
            "--capacities",
            "100,10000000000000000000000000",
        ])
        .unwrap();
        let Commands::Capacity(args) = cli.command else {
            panic!("expected capacity command");
        };
        assert!(args.execute(&config).is_err());
    }
}
