//! Repository for the `film_actor` table.

use dvdrental_core::types::DbId;
use sqlx::PgPool;

use crate::models::film_actor::{CreateFilmActor, FilmActor, UpdateFilmActor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, actor_id, film_id, last_update";

/// Provides CRUD operations for film/actor links.
pub struct FilmActorRepo;

impl FilmActorRepo {
    /// Insert a new film/actor link, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFilmActor) -> Result<FilmActor, sqlx::Error> {
        let query = format!(
            "INSERT INTO film_actor (actor_id, film_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FilmActor>(&query)
            .bind(input.actor_id)
            .bind(input.film_id)
            .fetch_one(pool)
            .await
    }

    /// Find a film/actor link by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FilmActor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM film_actor WHERE id = $1");
        sqlx::query_as::<_, FilmActor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all film/actor links ordered by `id`.
    pub async fn list(pool: &PgPool) -> Result<Vec<FilmActor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM film_actor ORDER BY id");
        sqlx::query_as::<_, FilmActor>(&query).fetch_all(pool).await
    }

    /// Update a film/actor link. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFilmActor,
    ) -> Result<Option<FilmActor>, sqlx::Error> {
        let query = format!(
            "UPDATE film_actor SET
                actor_id = COALESCE($2, actor_id),
                film_id = COALESCE($3, film_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FilmActor>(&query)
            .bind(id)
            .bind(input.actor_id)
            .bind(input.film_id)
            .fetch_optional(pool)
            .await
    }

    /// List the cast links of one film.
    pub async fn list_for_film(pool: &PgPool, film_id: DbId) -> Result<Vec<FilmActor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM film_actor WHERE film_id = $1 ORDER BY id");
        sqlx::query_as::<_, FilmActor>(&query)
            .bind(film_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a film/actor link by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM film_actor WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
