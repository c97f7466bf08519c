use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;
use vehicle_cost::config;
use vehicle_cost::core::{VehicleProfile, compare_vehicles};

#[derive(Parser, Debug)]
#[command(
    name = "vehicle-cost",
    about = "Side-by-side total cost of ownership for financed vehicles"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the comparison page and JSON API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Print a comparison as JSON
    Compare {
        #[arg(
            long,
            help = "TOML file with [[vehicles]] tables; defaults to the two sample vehicles"
        )]
        profiles: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() {
    vehicle_cost::init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { port } => {
            if let Err(e) = vehicle_cost::api::run_http_server(port).await {
                error!("server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Compare { profiles, pretty } => {
            let profiles = match profiles {
                Some(path) => match config::load_profiles(&path) {
                    Ok(profiles) => profiles,
                    Err(e) => {
                        error!("{e}");
                        std::process::exit(1);
                    }
                },
                None => VehicleProfile::default_pair(),
            };

            let summary = compare_vehicles(&profiles);
            let rendered = if pretty {
                serde_json::to_string_pretty(&summary)
            } else {
                serde_json::to_string(&summary)
            };
            match rendered {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    error!("failed to serialize comparison: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
