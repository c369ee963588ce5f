//! Film-to-category join table.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::OptId;
use crate::schema::table::{ColumnDef, ColumnType, ForeignKeyDef, OnDelete, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "film_category",
    columns: &[
        ColumnDef::primary_key("id"),
        ColumnDef::optional("film_id", ColumnType::Integer),
        ColumnDef::optional("category_id", ColumnType::Integer),
        ColumnDef::optional("last_update", ColumnType::Timestamp),
    ],
    foreign_keys: &[
        ForeignKeyDef::new("film_id", "film", "id").on_delete(OnDelete::Cascade),
        ForeignKeyDef::new("category_id", "category", "id").on_delete(OnDelete::Cascade),
    ],
    touch_column: Some("last_update"),
};

/// A row from the `film_category` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmCategory {
    pub id: DbId,
    pub film_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub last_update: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilmCategory {
    pub film_id: Option<DbId>,
    pub category_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFilmCategory {
    pub film_id: Option<DbId>,
    pub category_id: Option<DbId>,
}

impl fmt::Display for FilmCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Film: {}, Category: {}",
            OptId(self.film_id),
            OptId(self.category_id)
        )
    }
}
