//! Repository for the `film_category` table.

use dvdrental_core::types::DbId;
use sqlx::PgPool;

use crate::models::film_category::{CreateFilmCategory, FilmCategory, UpdateFilmCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, film_id, category_id, last_update";

/// Provides CRUD operations for film/category links.
pub struct FilmCategoryRepo;

impl FilmCategoryRepo {
    /// Insert a new film/category link, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFilmCategory) -> Result<FilmCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO film_category (film_id, category_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FilmCategory>(&query)
            .bind(input.film_id)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// Find a film/category link by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FilmCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM film_category WHERE id = $1");
        sqlx::query_as::<_, FilmCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all film/category links ordered by `id`.
    pub async fn list(pool: &PgPool) -> Result<Vec<FilmCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM film_category ORDER BY id");
        sqlx::query_as::<_, FilmCategory>(&query).fetch_all(pool).await
    }

    /// Update a film/category link. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFilmCategory,
    ) -> Result<Option<FilmCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE film_category SET
                film_id = COALESCE($2, film_id),
                category_id = COALESCE($3, category_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FilmCategory>(&query)
            .bind(id)
            .bind(input.film_id)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    /// List the category links of one film.
    pub async fn list_for_film(
        pool: &PgPool,
        film_id: DbId,
    ) -> Result<Vec<FilmCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM film_category WHERE film_id = $1 ORDER BY id");
        sqlx::query_as::<_, FilmCategory>(&query)
            .bind(film_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a film/category link by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM film_category WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
