//! Schema bootstrap for the DVD rental database.
//!
//! [`run`] connects with the loaded [`config::BootstrapConfig`], checks the
//! database is reachable and creates the schema. The binary maps its result
//! to the process exit code.

pub mod config;

use anyhow::Context;
use dvdrental_db::{DbPool, SchemaReport};

use crate::config::BootstrapConfig;

/// Connect, initialize the schema and close the pool again.
///
/// The pool is closed whether or not initialization succeeds.
pub async fn run(config: &BootstrapConfig) -> anyhow::Result<SchemaReport> {
    let pool = dvdrental_db::create_pool(&config.database)
        .await
        .context("Failed to connect to database")?;
    tracing::info!(
        max_connections = config.database.max_connections,
        "Database connection pool created"
    );

    let result = bootstrap(&pool).await;
    pool.close().await;
    result
}

/// Health-check `pool` and create whatever part of the schema is missing.
pub async fn bootstrap(pool: &DbPool) -> anyhow::Result<SchemaReport> {
    dvdrental_db::health_check(pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    let report = dvdrental_db::initialize_schema(pool)
        .await
        .context("Failed to initialize schema")?;

    if report.is_noop() {
        tracing::info!(tables = report.existing.len(), "All tables already present");
    } else {
        tracing::info!(created = ?report.created, "Tables created");
    }
    Ok(report)
}
