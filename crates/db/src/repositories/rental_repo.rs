//! Repository for the `rental` table.

use dvdrental_core::types::DbId;
use sqlx::PgPool;

use crate::models::rental::{CreateRental, Rental, UpdateRental};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = concat!(
    "rental_id, rental_date, inventory_id, customer_id, return_date, stuff_id, ",
    "last_update",
);

/// Provides CRUD operations for rentals.
pub struct RentalRepo;

impl RentalRepo {
    /// Insert a new rental, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRental) -> Result<Rental, sqlx::Error> {
        let query = format!(
            "INSERT INTO rental (rental_date, inventory_id, customer_id, return_date, stuff_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(input.rental_date)
            .bind(input.inventory_id)
            .bind(input.customer_id)
            .bind(input.return_date)
            .bind(input.stuff_id)
            .fetch_one(pool)
            .await
    }

    /// Find a rental by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rental WHERE rental_id = $1");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rentals ordered by `rental_date DESC`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rental ORDER BY rental_date DESC");
        sqlx::query_as::<_, Rental>(&query).fetch_all(pool).await
    }

    /// Update a rental. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRental,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!(
            "UPDATE rental SET
                rental_date = COALESCE($2, rental_date),
                inventory_id = COALESCE($3, inventory_id),
                customer_id = COALESCE($4, customer_id),
                return_date = COALESCE($5, return_date),
                stuff_id = COALESCE($6, stuff_id)
             WHERE rental_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .bind(input.rental_date)
            .bind(input.inventory_id)
            .bind(input.customer_id)
            .bind(input.return_date)
            .bind(input.stuff_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a rental by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rental WHERE rental_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
