//! Repository for the `payment` table.

use dvdrental_core::types::DbId;
use sqlx::PgPool;

use crate::models::payment::{CreatePayment, Payment, UpdatePayment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "payment_id, customer_id, stuff_id, rental_id, amount, payment_date";

/// Provides CRUD operations for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a new payment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePayment) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payment (customer_id, stuff_id, rental_id, amount, payment_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.customer_id)
            .bind(input.stuff_id)
            .bind(input.rental_id)
            .bind(input.amount)
            .bind(input.payment_date)
            .fetch_one(pool)
            .await
    }

    /// Find a payment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payment WHERE payment_id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all payments ordered by `payment_date DESC`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payment ORDER BY payment_date DESC");
        sqlx::query_as::<_, Payment>(&query).fetch_all(pool).await
    }

    /// Update a payment. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePayment,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!(
            "UPDATE payment SET
                customer_id = COALESCE($2, customer_id),
                stuff_id = COALESCE($3, stuff_id),
                rental_id = COALESCE($4, rental_id),
                amount = COALESCE($5, amount),
                payment_date = COALESCE($6, payment_date)
             WHERE payment_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .bind(input.customer_id)
            .bind(input.stuff_id)
            .bind(input.rental_id)
            .bind(input.amount)
            .bind(input.payment_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a payment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payment WHERE payment_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
