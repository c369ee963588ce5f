//! Film entity model and DTOs.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::table::{ColumnDef, ColumnType, ForeignKeyDef, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "film",
    columns: &[
        ColumnDef::primary_key("id"),
        ColumnDef::required("title", ColumnType::Varchar(50)),
        ColumnDef::required("description", ColumnType::Varchar(200)),
        ColumnDef::required("release_year", ColumnType::Timestamp),
        ColumnDef::optional("language_id", ColumnType::Integer),
        ColumnDef::required("rental_duration", ColumnType::Integer).with_default("0"),
        ColumnDef::required("rental_rate", ColumnType::Integer).with_default("0"),
        ColumnDef::required("length", ColumnType::Integer),
        ColumnDef::required("replacement_cost", ColumnType::DoublePrecision).with_default("0"),
        ColumnDef::required("rating", ColumnType::Integer),
        ColumnDef::optional("last_update", ColumnType::Timestamp),
        ColumnDef::required("special_features", ColumnType::Varchar(50)),
        ColumnDef::required("fulltext", ColumnType::Varchar(200)),
    ],
    foreign_keys: &[ForeignKeyDef::new("language_id", "language", "language_id")],
    touch_column: Some("last_update"),
};

/// A row from the `film` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Film {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub release_year: Timestamp,
    pub language_id: Option<DbId>,
    pub rental_duration: i32,
    pub rental_rate: i32,
    pub length: i32,
    pub replacement_cost: f64,
    pub rating: i32,
    pub last_update: Option<Timestamp>,
    pub special_features: String,
    pub fulltext: String,
}

/// DTO for creating a new film.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilm {
    pub title: String,
    pub description: String,
    pub release_year: Timestamp,
    pub language_id: Option<DbId>,
    /// Defaults to 0 if omitted.
    pub rental_duration: Option<i32>,
    /// Defaults to 0 if omitted.
    pub rental_rate: Option<i32>,
    pub length: i32,
    /// Defaults to 0 if omitted.
    pub replacement_cost: Option<f64>,
    pub rating: i32,
    pub special_features: String,
    pub fulltext: String,
}

/// DTO for updating an existing film. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFilm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_year: Option<Timestamp>,
    pub language_id: Option<DbId>,
    pub rental_duration: Option<i32>,
    pub rental_rate: Option<i32>,
    pub length: Option<i32>,
    pub replacement_cost: Option<f64>,
    pub rating: Option<i32>,
    pub special_features: Option<String>,
    pub fulltext: Option<String>,
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}", self.title)
    }
}
