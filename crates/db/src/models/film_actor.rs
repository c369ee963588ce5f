//! Film-to-actor join table.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::OptId;
use crate::schema::table::{ColumnDef, ColumnType, ForeignKeyDef, OnDelete, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "film_actor",
    columns: &[
        ColumnDef::primary_key("id"),
        ColumnDef::optional("actor_id", ColumnType::Integer),
        ColumnDef::optional("film_id", ColumnType::Integer),
        ColumnDef::optional("last_update", ColumnType::Timestamp),
    ],
    foreign_keys: &[
        ForeignKeyDef::new("actor_id", "actor", "actor_id").on_delete(OnDelete::Cascade),
        ForeignKeyDef::new("film_id", "film", "id").on_delete(OnDelete::Cascade),
    ],
    touch_column: Some("last_update"),
};

/// A row from the `film_actor` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmActor {
    pub id: DbId,
    pub actor_id: Option<DbId>,
    pub film_id: Option<DbId>,
    pub last_update: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilmActor {
    pub actor_id: Option<DbId>,
    pub film_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFilmActor {
    pub actor_id: Option<DbId>,
    pub film_id: Option<DbId>,
}

impl fmt::Display for FilmActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Actor: {}, Film: {}",
            OptId(self.actor_id),
            OptId(self.film_id)
        )
    }
}
