//! Repository for the `language` table.

use dvdrental_core::types::DbId;
use sqlx::PgPool;

use crate::models::language::{CreateLanguage, Language, UpdateLanguage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "language_id, name, last_update";

/// Provides CRUD operations for languages.
pub struct LanguageRepo;

impl LanguageRepo {
    /// Insert a new language, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLanguage) -> Result<Language, sqlx::Error> {
        let query = format!(
            "INSERT INTO language (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Language>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a language by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Language>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM language WHERE language_id = $1");
        sqlx::query_as::<_, Language>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all languages ordered by `name`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Language>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM language ORDER BY name");
        sqlx::query_as::<_, Language>(&query).fetch_all(pool).await
    }

    /// Update a language. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLanguage,
    ) -> Result<Option<Language>, sqlx::Error> {
        let query = format!(
            "UPDATE language SET
                name = COALESCE($2, name)
             WHERE language_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Language>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a language by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM language WHERE language_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
