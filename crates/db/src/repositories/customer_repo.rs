//! Repository for the `customer` table.

use dvdrental_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = concat!(
    "customer_id, store_id, first_name, last_name, email, address_id, is_active, ",
    "create_date, lastupdate, rental_id",
);

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    ///
    /// `None` for a defaulted field stores its column default
    /// (`is_active` = TRUE).
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customer (store_id, first_name, last_name, email, address_id, is_active,
                 create_date)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(input.store_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.address_id)
            .bind(input.is_active)
            .bind(input.create_date)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customer WHERE customer_id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all customers ordered by `last_name, first_name`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customer ORDER BY last_name, first_name");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// Update a customer. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customer SET
                store_id = COALESCE($2, store_id),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                email = COALESCE($5, email),
                address_id = COALESCE($6, address_id),
                is_active = COALESCE($7, is_active),
                create_date = COALESCE($8, create_date)
             WHERE customer_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(input.store_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.address_id)
            .bind(input.is_active)
            .bind(input.create_date)
            .fetch_optional(pool)
            .await
    }

    /// Record the customer's current rental, or clear it with `None`.
    ///
    /// Returns `None` if no customer with the given `id` exists.
    pub async fn set_rental(
        pool: &PgPool,
        id: DbId,
        rental_id: Option<DbId>,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query =
            format!("UPDATE customer SET rental_id = $2 WHERE customer_id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(rental_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customer WHERE customer_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
