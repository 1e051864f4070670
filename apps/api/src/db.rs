use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates the PostgreSQL pool backing learning-path storage.
///
/// Connects lazily so curation keeps serving while the database is down;
/// only learning-path routes fail in that case.
pub fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_lazy(database_url)
        .context("DATABASE_URL is not a valid PostgreSQL connection string")?;

    info!("PostgreSQL pool configured (lazy connect)");
    Ok(pool)
}
