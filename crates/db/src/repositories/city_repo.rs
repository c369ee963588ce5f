//! Repository for the `city` table.

use dvdrental_core::types::DbId;
use sqlx::PgPool;

use crate::models::city::{CreateCity, City, UpdateCity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "city_id, city, country_id, last_update";

/// Provides CRUD operations for cities.
pub struct CityRepo;

impl CityRepo {
    /// Insert a new city, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCity) -> Result<City, sqlx::Error> {
        let query = format!(
            "INSERT INTO city (city, country_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(&input.city)
            .bind(input.country_id)
            .fetch_one(pool)
            .await
    }

    /// Find a city by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM city WHERE city_id = $1");
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cities ordered by `city`.
    pub async fn list(pool: &PgPool) -> Result<Vec<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM city ORDER BY city");
        sqlx::query_as::<_, City>(&query).fetch_all(pool).await
    }

    /// Update a city. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCity,
    ) -> Result<Option<City>, sqlx::Error> {
        let query = format!(
            "UPDATE city SET
                city = COALESCE($2, city),
                country_id = COALESCE($3, country_id)
             WHERE city_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .bind(&input.city)
            .bind(input.country_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a city by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM city WHERE city_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
