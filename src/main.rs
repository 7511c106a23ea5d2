use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{
    BmiCommand, CaloriesCommand, CartCommand, ConfigCommand, DashboardCommand, DoctorCommand,
    ExerciseCommand, GoalCommand, ProfileCommand, ShopCommand, StepsCommand, SugarCommand,
};
use config::Config;
use wellmart_core::{CartStore, CatalogClient, FileSlotStore, WellnessStore};

#[derive(Parser)]
#[command(name = "wellmart")]
#[command(version)]
#[command(about = "Wellness tracker and storefront", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage your profile and daily goals
    Profile(ProfileCommand),

    /// Log and review food intake
    Calories(CaloriesCommand),

    /// Record daily step counts
    Steps(StepsCommand),

    /// Track blood glucose readings
    Sugar(SugarCommand),

    /// Log workouts
    Exercise(ExerciseCommand),

    /// Book and review doctor appointments
    Doctor(DoctorCommand),

    /// Set goals and track progress
    Goal(GoalCommand),

    /// Compute body mass index
    Bmi(BmiCommand),

    /// Today's overview
    Dashboard(DashboardCommand),

    /// Browse the product catalog
    Shop(ShopCommand),

    /// Manage the shopping cart
    Cart(CartCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wellmart=warn,wellmart_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Save config path for init command
    let cli_config_path = cli.config.clone();

    let config = Config::load(cli.config)?;
    let slots = FileSlotStore::new(config.data_dir.value.clone());

    match cli.command {
        Some(Commands::Profile(cmd)) => cmd.run(&mut WellnessStore::hydrate(&slots))?,
        Some(Commands::Calories(cmd)) => cmd.run(&mut WellnessStore::hydrate(&slots))?,
        Some(Commands::Steps(cmd)) => cmd.run(&mut WellnessStore::hydrate(&slots))?,
        Some(Commands::Sugar(cmd)) => cmd.run(&mut WellnessStore::hydrate(&slots))?,
        Some(Commands::Exercise(cmd)) => cmd.run(&mut WellnessStore::hydrate(&slots))?,
        Some(Commands::Doctor(cmd)) => cmd.run(&mut WellnessStore::hydrate(&slots))?,
        Some(Commands::Goal(cmd)) => cmd.run(&mut WellnessStore::hydrate(&slots))?,
        Some(Commands::Bmi(cmd)) => cmd.run(&mut WellnessStore::hydrate(&slots))?,
        Some(Commands::Dashboard(cmd)) => cmd.run(&WellnessStore::hydrate(&slots))?,
        Some(Commands::Shop(cmd)) => {
            let client = CatalogClient::new(config.catalog_url.value.clone());
            let mut cart = CartStore::hydrate(&slots);
            cmd.run(&client, &mut cart, &config).await?;
        }
        Some(Commands::Cart(cmd)) => cmd.run(&mut CartStore::hydrate(&slots))?,
        Some(Commands::Config(cmd)) => cmd.run(&config, cli_config_path)?,
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
