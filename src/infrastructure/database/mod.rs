//! Database Module
//!
//! PostgreSQL connection pool with the embedded schema migrations.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseSettings;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors raised while opening the store
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("database.url is required for the postgres backend")]
    MissingUrl,

    #[error("Failed to connect: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Failed to apply migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Open a pool from settings, applying migrations when enabled.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DatabaseError> {
    let url = settings.url.as_deref().ok_or(DatabaseError::MissingUrl)?;

    tracing::debug!(
        max_connections = settings.max_connections,
        min_connections = settings.min_connections,
        "Opening connection pool"
    );

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect(url)
        .await?;

    if settings.run_migrations {
        MIGRATOR.run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(pool)
}
