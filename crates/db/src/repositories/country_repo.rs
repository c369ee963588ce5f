//! Repository for the `country` table.

use dvdrental_core::types::DbId;
use sqlx::PgPool;

use crate::models::country::{CreateCountry, Country, UpdateCountry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "country_id, country, last_update";

/// Provides CRUD operations for countries.
pub struct CountryRepo;

impl CountryRepo {
    /// Insert a new country, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCountry) -> Result<Country, sqlx::Error> {
        let query = format!(
            "INSERT INTO country (country)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Country>(&query)
            .bind(&input.country)
            .fetch_one(pool)
            .await
    }

    /// Find a country by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM country WHERE country_id = $1");
        sqlx::query_as::<_, Country>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all countries ordered by `country`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM country ORDER BY country");
        sqlx::query_as::<_, Country>(&query).fetch_all(pool).await
    }

    /// Update a country. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCountry,
    ) -> Result<Option<Country>, sqlx::Error> {
        let query = format!(
            "UPDATE country SET
                country = COALESCE($2, country)
             WHERE country_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Country>(&query)
            .bind(id)
            .bind(&input.country)
            .fetch_optional(pool)
            .await
    }

    /// Delete a country by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM country WHERE country_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
