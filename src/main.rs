//! Transaction Service - Main Application Entry Point
//!
//! A REST API server that records financial transactions per user and tracks
//! their status from `PENDING` to `COMPLETED` or `FAILED`.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: PostgreSQL with sqlx, or an in-memory store
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the configured transaction store (running migrations for PostgreSQL)
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod services;
mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    config::{Config, StorageKind},
    store::{MemoryTransactionStore, PgTransactionStore, TransactionStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(storage = ?config.storage, "Configuration loaded");

    match config.storage {
        StorageKind::Postgres => {
            let pool = db::create_pool(&config.database_url, config.database_max_connections)?;

            // An unreachable database is not fatal; requests report storage errors until it is back.
            match db::run_migrations(&pool).await {
                Ok(()) => tracing::info!("Database migrations complete"),
                Err(err) => tracing::error!(error = %err, "Could not prepare database"),
            }

            serve(&config, PgTransactionStore::new(pool)).await
        }
        StorageKind::Memory => {
            tracing::warn!("Using in-memory storage; transactions are lost on shutdown");
            serve(&config, MemoryTransactionStore::new()).await
        }
    }
}

async fn serve<S: TransactionStore>(config: &Config, store: S) -> anyhow::Result<()> {
    let app = routes::app(Arc::new(store));

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
