use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::app_config::AppConfig;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
///
/// # Errors
/// Returns error if DATABASE_URL is not set or connection fails
pub async fn init_database(config: &AppConfig) -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let db_config = DatabaseConfig::new(db_url)
        .with_max_connections(config.max_connections)
        .with_acquire_timeout(config.acquire_timeout);
    let pool = create_postgres_pool(&db_config).await?;
    Ok(pool)
}

pub async fn migrate(pool: &PgPool, config: &AppConfig) -> anyhow::Result<()> {
    run_migrations(pool, &config.migrations_path)
        .await
        .with_context(|| format!("running migrations from {}", config.migrations_path))
}
