//! Repository for the `film` table.

use dvdrental_core::types::DbId;
use sqlx::PgPool;

use crate::models::film::{CreateFilm, Film, UpdateFilm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = concat!(
    "id, title, description, release_year, language_id, rental_duration, rental_rate, ",
    "length, replacement_cost, rating, last_update, special_features, fulltext",
);

/// Provides CRUD operations for films.
pub struct FilmRepo;

impl FilmRepo {
    /// Insert a new film, returning the created row.
    ///
    /// `None` for a defaulted field stores its column default
    /// (`rental_duration` = 0, `rental_rate` = 0, `replacement_cost` = 0).
    pub async fn create(pool: &PgPool, input: &CreateFilm) -> Result<Film, sqlx::Error> {
        let query = format!(
            "INSERT INTO film (title, description, release_year, language_id, rental_duration,
                 rental_rate, length, replacement_cost, rating, special_features,
                 fulltext)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, 0), $7, COALESCE($8, 0),
                 $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_year)
            .bind(input.language_id)
            .bind(input.rental_duration)
            .bind(input.rental_rate)
            .bind(input.length)
            .bind(input.replacement_cost)
            .bind(input.rating)
            .bind(&input.special_features)
            .bind(&input.fulltext)
            .fetch_one(pool)
            .await
    }

    /// Find a film by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Film>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM film WHERE id = $1");
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all films ordered by `title`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Film>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM film ORDER BY title");
        sqlx::query_as::<_, Film>(&query).fetch_all(pool).await
    }

    /// Update a film. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFilm,
    ) -> Result<Option<Film>, sqlx::Error> {
        let query = format!(
            "UPDATE film SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                release_year = COALESCE($4, release_year),
                language_id = COALESCE($5, language_id),
                rental_duration = COALESCE($6, rental_duration),
                rental_rate = COALESCE($7, rental_rate),
                length = COALESCE($8, length),
                replacement_cost = COALESCE($9, replacement_cost),
                rating = COALESCE($10, rating),
                special_features = COALESCE($11, special_features),
                fulltext = COALESCE($12, fulltext)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_year)
            .bind(input.language_id)
            .bind(input.rental_duration)
            .bind(input.rental_rate)
            .bind(input.length)
            .bind(input.replacement_cost)
            .bind(input.rating)
            .bind(&input.special_features)
            .bind(&input.fulltext)
            .fetch_optional(pool)
            .await
    }

    /// Delete a film by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM film WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
