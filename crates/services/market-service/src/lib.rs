//! Market Service Library
//!
//! Saves users and products, and answers "which products share this user's
//! currency" over HTTP. Backed by PostgreSQL through SeaORM, or by an
//! in-memory store for local runs.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::MarketServiceConfig;
use crate::infra::Database;

/// Where the record store lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL via SeaORM
    Database,
    /// Process-local arena, lost on exit
    InMemory,
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(
    config: MarketServiceConfig,
    backend: StoreBackend,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = match backend {
        StoreBackend::Database => {
            let db = Database::connect(&config.database).await?;
            AppState::from_database(db, config.product_page_size)
        }
        StoreBackend::InMemory => {
            info!("Using in-memory store; data is lost on shutdown");
            AppState::in_memory()
        }
    };

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.service.bind_address().parse()?;
    info!("{} listening on {}", config.service.service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: MarketServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
