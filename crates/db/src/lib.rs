//! Persistence layer for the Glocation projects API.
//!
//! Owns the PostgreSQL pool, the embedded schema migrations, the row models
//! and the repositories. The pool is created once at startup and handed to
//! every repository call explicitly.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Schema migrations embedded at compile time from `db/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// Fatal errors raised while bringing the store up.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The store is unreachable or rejected the credentials.
    #[error("Failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    /// The schema could not be reconciled with the embedded migrations.
    #[error("Failed to synchronise database schema: {0}")]
    SchemaSync(#[source] MigrateError),
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the store answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the pool and verify the connection in one step.
pub async fn connect(database_url: &str) -> Result<DbPool, StartupError> {
    let pool = create_pool(database_url)
        .await
        .map_err(StartupError::Connection)?;
    health_check(&pool)
        .await
        .map_err(StartupError::Connection)?;
    tracing::debug!("Database connection verified");
    Ok(pool)
}

/// Apply any pending migrations.
pub async fn sync_schema(pool: &DbPool) -> Result<(), StartupError> {
    MIGRATOR.run(pool).await.map_err(StartupError::SchemaSync)?;
    tracing::debug!(migrations = MIGRATOR.iter().count(), "Database schema up to date");
    Ok(())
}
