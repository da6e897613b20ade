use crate::config::DatabaseSettings;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while setting up the database connection
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connect a pool and run migrations on startup
///
/// The pool is the single persistence handle for the process; every
/// component that touches the database receives a clone of it at
/// construction time.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, PostgresError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections.unwrap_or(10))
        .min_connections(settings.min_connections.unwrap_or(1))
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs.unwrap_or(5)))
        .idle_timeout(Duration::from_secs(settings.idle_timeout_secs.unwrap_or(600)))
        .test_before_acquire(true)
        .connect(&settings.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
