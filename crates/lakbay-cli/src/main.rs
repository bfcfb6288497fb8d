mod nearby;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lakbay-cli")]
#[command(about = "Nearby place recommendations around Cebu hotels")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for recommended places near a configured hotel.
    Nearby {
        /// Hotel name as listed in the venues file (case-insensitive).
        #[arg(long)]
        hotel: String,
        /// Category label as listed in the venues file (case-insensitive).
        #[arg(long)]
        category: String,
        /// Search radius in kilometres.
        #[arg(long, default_value_t = 3)]
        radius_km: u32,
        /// PHP-to-target exchange rate used for converted amounts.
        #[arg(long)]
        rate: Option<f64>,
    },
    /// List the configured hotel origins.
    Hotels,
    /// List the configured categories and their cost table.
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Nearby {
            hotel,
            category,
            radius_km,
            rate,
        } => nearby::run(&hotel, &category, radius_km, rate).await,
        Commands::Hotels => nearby::list_hotels(),
        Commands::Categories => nearby::list_categories(),
    }
}
