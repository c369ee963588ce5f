//! Repository for the `address` table.

use dvdrental_core::types::DbId;
use sqlx::PgPool;

use crate::models::address::{CreateAddress, Address, UpdateAddress};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = concat!(
    "address_id, address, address2, district, city_id, postal_code, phone, ",
    "last_update",
);

/// Provides CRUD operations for addresses.
pub struct AddressRepo;

impl AddressRepo {
    /// Insert a new address, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAddress) -> Result<Address, sqlx::Error> {
        let query = format!(
            "INSERT INTO address (address, address2, district, city_id, postal_code, phone)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Address>(&query)
            .bind(&input.address)
            .bind(&input.address2)
            .bind(&input.district)
            .bind(input.city_id)
            .bind(&input.postal_code)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a address by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Address>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM address WHERE address_id = $1");
        sqlx::query_as::<_, Address>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all addresses ordered by `address_id`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Address>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM address ORDER BY address_id");
        sqlx::query_as::<_, Address>(&query).fetch_all(pool).await
    }

    /// Update a address. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAddress,
    ) -> Result<Option<Address>, sqlx::Error> {
        let query = format!(
            "UPDATE address SET
                address = COALESCE($2, address),
                address2 = COALESCE($3, address2),
                district = COALESCE($4, district),
                city_id = COALESCE($5, city_id),
                postal_code = COALESCE($6, postal_code),
                phone = COALESCE($7, phone)
             WHERE address_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Address>(&query)
            .bind(id)
            .bind(&input.address)
            .bind(&input.address2)
            .bind(&input.district)
            .bind(input.city_id)
            .bind(&input.postal_code)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    /// Delete a address by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM address WHERE address_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
