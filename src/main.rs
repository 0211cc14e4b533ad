use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use motolog::cli::{
    handle_bike_command, handle_export_command, handle_fuel_command, handle_interval_command,
    handle_service_command, handle_stats_command, handle_status_command,
};
use motolog::config::{paths::MotoPaths, DistanceUnit, FuelUnit};
use motolog::storage::open_garage;

#[derive(Parser)]
#[command(
    name = "motolog",
    version,
    about = "Motorcycle maintenance log",
    long_about = "motolog keeps a service log and fuel log for your motorcycle, \
                  tells you which services are due or overdue, and summarizes \
                  what the bike costs to run."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default service intervals
    Init,

    /// Show paths and settings, or change units
    Config {
        /// Distance unit label (km or mi)
        #[arg(long)]
        distance_unit: Option<String>,
        /// Fuel unit label (L or gal)
        #[arg(long)]
        fuel_unit: Option<String>,
        /// Mark onboarding as not completed
        #[arg(long)]
        reset_onboarding: bool,
    },

    /// Bike profile commands
    #[command(subcommand)]
    Bike(motolog::cli::BikeCommands),

    /// Service log commands
    #[command(subcommand, alias = "svc")]
    Service(motolog::cli::ServiceCommands),

    /// Fuel log commands
    #[command(subcommand)]
    Fuel(motolog::cli::FuelCommands),

    /// Service interval commands
    #[command(subcommand)]
    Interval(motolog::cli::IntervalCommands),

    /// Show what is due and overdue
    Status,

    /// Show cost and fuel statistics
    Stats,

    /// Export bikes, services and fuel log as JSON
    Export {
        /// Output file, or `-` for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn init_logging() {
    let log_env = std::env::var("MOTOLOG_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = MotoPaths::new()?;
    let mut garage = open_garage(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing motolog at: {}", paths.data_dir().display());
            garage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Default intervals have been created for every service type.");
            println!("Run 'motolog bike setup --name <NAME>' to add your bike.");
        }
        Some(Commands::Config {
            distance_unit,
            fuel_unit,
            reset_onboarding,
        }) => {
            let mut settings = garage.settings().clone();
            let mut changed = false;

            if let Some(unit) = distance_unit {
                let Some(parsed) = DistanceUnit::parse(&unit) else {
                    bail!("Unknown distance unit '{}'. Use km or mi", unit);
                };
                settings.distance_unit = parsed;
                changed = true;
            }
            if let Some(unit) = fuel_unit {
                let Some(parsed) = FuelUnit::parse(&unit) else {
                    bail!("Unknown fuel unit '{}'. Use L or gal", unit);
                };
                settings.fuel_unit = parsed;
                changed = true;
            }
            if changed {
                garage.update_settings(settings)?;
            }
            if reset_onboarding {
                garage.reset_onboarding()?;
            }

            let settings = garage.settings();
            println!("motolog Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Export file:      {}", paths.export_file().display());
            println!();
            println!("Settings:");
            println!("  Distance unit:  {}", settings.distance_unit);
            println!("  Fuel unit:      {}", settings.fuel_unit);
            println!("  Onboarded:      {}", settings.has_completed_onboarding);
        }
        Some(Commands::Bike(cmd)) => {
            handle_bike_command(&mut garage, cmd)?;
        }
        Some(Commands::Service(cmd)) => {
            handle_service_command(&mut garage, cmd)?;
        }
        Some(Commands::Fuel(cmd)) => {
            handle_fuel_command(&mut garage, cmd)?;
        }
        Some(Commands::Interval(cmd)) => {
            handle_interval_command(&mut garage, cmd)?;
        }
        Some(Commands::Status) => {
            handle_status_command(&garage)?;
        }
        Some(Commands::Stats) => {
            handle_stats_command(&garage)?;
        }
        Some(Commands::Export { output, pretty }) => {
            handle_export_command(&garage, output, &paths.export_file(), pretty)?;
        }
        None => {
            println!("motolog - Motorcycle maintenance log");
            println!();
            println!("Run 'motolog --help' for usage information.");
            if !paths.is_initialized() {
                println!("Run 'motolog init' to create the data directory.");
            } else if !garage.has_bike() {
                println!("Run 'motolog bike setup --name <NAME>' to get started.");
            }
        }
    }

    Ok(())
}
