//! Repository for the `inventory` table.

use dvdrental_core::types::DbId;
use sqlx::PgPool;

use crate::models::inventory::{CreateInventory, Inventory, UpdateInventory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "inventory_id, film_id, store_id, last_update";

/// Provides CRUD operations for inventory items.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Insert a new inventory item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateInventory) -> Result<Inventory, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory (film_id, store_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inventory>(&query)
            .bind(input.film_id)
            .bind(input.store_id)
            .fetch_one(pool)
            .await
    }

    /// Find a inventory item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inventory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory WHERE inventory_id = $1");
        sqlx::query_as::<_, Inventory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all inventory items ordered by `inventory_id`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Inventory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory ORDER BY inventory_id");
        sqlx::query_as::<_, Inventory>(&query).fetch_all(pool).await
    }

    /// Update a inventory item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInventory,
    ) -> Result<Option<Inventory>, sqlx::Error> {
        let query = format!(
            "UPDATE inventory SET
                film_id = COALESCE($2, film_id),
                store_id = COALESCE($3, store_id)
             WHERE inventory_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inventory>(&query)
            .bind(id)
            .bind(input.film_id)
            .bind(input.store_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a inventory item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inventory WHERE inventory_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
