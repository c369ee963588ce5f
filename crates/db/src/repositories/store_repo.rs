//! Repository for the `store` table.

use dvdrental_core::types::DbId;
use sqlx::PgPool;

use crate::models::store::{CreateStore, Store, UpdateStore};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "store_id, manager_staff_id, address_id, last_update";

/// Provides CRUD operations for stores.
pub struct StoreRepo;

impl StoreRepo {
    /// Insert a new store, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStore) -> Result<Store, sqlx::Error> {
        let query = format!(
            "INSERT INTO store (manager_staff_id, address_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Store>(&query)
            .bind(input.manager_staff_id)
            .bind(input.address_id)
            .fetch_one(pool)
            .await
    }

    /// Find a store by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Store>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM store WHERE store_id = $1");
        sqlx::query_as::<_, Store>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all stores ordered by `store_id`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Store>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM store ORDER BY store_id");
        sqlx::query_as::<_, Store>(&query).fetch_all(pool).await
    }

    /// Update a store. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStore,
    ) -> Result<Option<Store>, sqlx::Error> {
        let query = format!(
            "UPDATE store SET
                manager_staff_id = COALESCE($2, manager_staff_id),
                address_id = COALESCE($3, address_id)
             WHERE store_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Store>(&query)
            .bind(id)
            .bind(input.manager_staff_id)
            .bind(input.address_id)
            .fetch_optional(pool)
            .await
    }

    /// Point a store at its manager, or clear the link with `None`.
    ///
    /// Closes the store/staff cycle once the manager's staff row exists.
    /// Returns `None` if no store with the given `id` exists.
    pub async fn set_manager(
        pool: &PgPool,
        id: DbId,
        manager_staff_id: Option<DbId>,
    ) -> Result<Option<Store>, sqlx::Error> {
        let query = format!(
            "UPDATE store SET manager_staff_id = $2 WHERE store_id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Store>(&query)
            .bind(id)
            .bind(manager_staff_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a store by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM store WHERE store_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
