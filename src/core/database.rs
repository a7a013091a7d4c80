use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::core::config::DatabaseConfig;
use crate::core::error::Result;
use crate::modules::store::PandalStore;
use crate::shared::deadline::Deadline;

pub async fn create_pool(config: &DatabaseConfig) -> std::result::Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Ensure the spherical index over `location` exists.
///
/// Runs once at startup, before the listener accepts connections. The
/// caller treats a failure as fatal.
pub async fn ensure_indexes(store: &dyn PandalStore, timeout: Duration) -> Result<String> {
    tracing::info!("Ensuring geospatial index on pandals.location...");

    let index_name = store
        .ensure_location_index(Deadline::after(timeout))
        .await?;

    tracing::info!("Geospatial index ready: {}", index_name);
    Ok(index_name)
}
