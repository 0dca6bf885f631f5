//! Market Service - HTTP server for currency-matched product lookups.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use market_service_lib::config::MarketServiceConfig;
use market_service_lib::{MigrateAction, StoreBackend};

#[derive(Parser)]
#[command(name = "market-service")]
#[command(about = "Users, products and currency-matched lookups")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "MARKET_SERVICE_HOST")]
        host: Option<String>,
        #[arg(long, env = "MARKET_SERVICE_PORT")]
        port: Option<u16>,
        /// Keep records in process memory instead of the database
        #[arg(long)]
        in_memory: bool,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let mut config = MarketServiceConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            in_memory,
        } => {
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            let backend = if in_memory {
                StoreBackend::InMemory
            } else {
                StoreBackend::Database
            };
            market_service_lib::run_server(config, backend).await?;
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            market_service_lib::run_migrations(config, migrate_action).await?;
        }
    }

    Ok(())
}
