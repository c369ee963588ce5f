//! Relational schema for the DVD rental domain.
//!
//! The crate declares every table ([`models`]), creates them on demand
//! ([`schema::initialize_schema`]) and offers thin per-entity repositories
//! ([`repositories`]). It never owns the connection pool: callers create one
//! with [`create_pool`] and pass it in.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;
pub mod schema;

pub use error::{is_foreign_key_violation, is_not_null_violation, SchemaError};
pub use schema::{initialize_schema, SchemaReport};

pub type DbPool = sqlx::PgPool;

/// Connection settings for [`create_pool`].
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// How long to wait for a connection before giving up.
    pub acquire_timeout: Duration,
}

impl DbConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

/// Create a connection pool. Fails if the database cannot be reached.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
