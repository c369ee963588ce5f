//! Repository for the `staff` table.

use dvdrental_core::types::DbId;
use sqlx::PgPool;

use crate::models::staff::{CreateStaff, Staff, UpdateStaff};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = concat!(
    "staff_id, first_name, last_name, address_id, store_id, active, username, ",
    "password, last_update, picture",
);

/// Provides CRUD operations for staff members.
pub struct StaffRepo;

impl StaffRepo {
    /// Insert a new staff member, returning the created row.
    ///
    /// `None` for a defaulted field stores its column default
    /// (`active` = TRUE).
    pub async fn create(pool: &PgPool, input: &CreateStaff) -> Result<Staff, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff (first_name, last_name, address_id, store_id, active, username,
                 password, picture)
             VALUES ($1, $2, $3, $4, COALESCE($5, TRUE), $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.address_id)
            .bind(input.store_id)
            .bind(input.active)
            .bind(&input.username)
            .bind(&input.password)
            .bind(&input.picture)
            .fetch_one(pool)
            .await
    }

    /// Find a staff member by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE staff_id = $1");
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all staff members ordered by `staff_id`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff ORDER BY staff_id");
        sqlx::query_as::<_, Staff>(&query).fetch_all(pool).await
    }

    /// Update a staff member. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaff,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!(
            "UPDATE staff SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                address_id = COALESCE($4, address_id),
                store_id = COALESCE($5, store_id),
                active = COALESCE($6, active),
                username = COALESCE($7, username),
                password = COALESCE($8, password),
                picture = COALESCE($9, picture)
             WHERE staff_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.address_id)
            .bind(input.store_id)
            .bind(input.active)
            .bind(&input.username)
            .bind(&input.password)
            .bind(&input.picture)
            .fetch_optional(pool)
            .await
    }

    /// Delete a staff member by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM staff WHERE staff_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
