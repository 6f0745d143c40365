use clap::Parser;
use dart_value::cli::{Cli, Commands};
use dart_value::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration, a missing file falls back to the embedded example
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) if e.is_not_found() => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::embedded()?
        }
        Err(e) => return Err(e.into()),
    };

    // Initialize telemetry
    let _guard = dart_value::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Value(args) => {
            tracing::info!("Running valuation");
            args.execute(&config)?;
        }
        Commands::Sweep(args) => {
            tracing::info!("Running accuracy sweep");
            args.execute(&config)?;
        }
        Commands::Capacity(args) => {
            tracing::info!("Running capacity sweep");
            args.execute(&config)?;
        }
        Commands::Presets(args) => {
            tracing::info!("Comparing capture presets");
            args.execute(&config)?;
        }
        Commands::Hubs(args) => {
            tracing::info!("Comparing hubs");
            args.execute(&config)?;
        }
        Commands::Breakeven(args) => {
            tracing::info!("Running break-even analysis");
            args.execute(&config)?;
        }
        Commands::Monthly(args) => {
            args.execute()?;
        }
        Commands::Zones(args) => {
            args.execute(&config)?;
        }
        Commands::Config => {
            let model = &config.model;
            println!("Current configuration:");
            println!(
                "  Model: MAE=${}/MWh, Plant={} MW, Virtual={} MW, Fee={}%",
                model.mae, model.plant_capacity_mw, model.virtual_position_mw, model.fee_rate_pct
            );
            println!(
                "  Scenario: {}, Hedge: {:?}, Target: ${}",
                model.scenario, model.hedge_policy, model.revenue_target
            );
            println!(
                "  Capture: {}/{}/{}",
                config.capture.high, config.capture.med, config.capture.low
            );
            println!("  Hubs: alpha={} hedge={}", config.hubs.alpha, config.hubs.hedge);
            println!(
                "  Budget: {} ${}",
                config.budget.year,
                config.budget.annual_budget()
            );
        }
    }

    Ok(())
}
