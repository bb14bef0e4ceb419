//! Link store implementations and backend bootstrap.
//!
//! # Stores
//!
//! - [`PgLinkStore`] - PostgreSQL, the production backend
//! - [`MemoryLinkStore`] - in-process map for tests and local runs
//!
//! [`open_store`] picks one from [`Config::store_backend`] and, for
//! PostgreSQL, connects and applies the embedded migrations before the
//! server takes traffic.

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use pg_link_store::PgLinkStore;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::LinkStore;

/// Connects to PostgreSQL and provisions the schema.
///
/// # Errors
///
/// Returns an error if `DATABASE_URL` is missing, the connection fails, or
/// a migration cannot be applied.
pub async fn connect_postgres(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set for the postgres backend")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;
    tracing::debug!("Migrations applied");

    Ok(pool)
}

/// Builds the configured link store.
pub async fn open_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let pool = connect_postgres(config).await?;
            Ok(Arc::new(PgLinkStore::new(Arc::new(pool))))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; links are lost on restart");
            Ok(Arc::new(MemoryLinkStore::new()))
        }
    }
}
