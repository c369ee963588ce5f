//! Inventory model: one physical copy of a film held by a store.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::OptId;
use crate::schema::table::{ColumnDef, ColumnType, ForeignKeyDef, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "inventory",
    columns: &[
        ColumnDef::primary_key("inventory_id"),
        ColumnDef::optional("film_id", ColumnType::Integer),
        ColumnDef::optional("store_id", ColumnType::Integer),
        ColumnDef::optional("last_update", ColumnType::Timestamp),
    ],
    foreign_keys: &[
        ForeignKeyDef::new("film_id", "film", "id"),
        ForeignKeyDef::new("store_id", "store", "store_id"),
    ],
    touch_column: Some("last_update"),
};

/// A row from the `inventory` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inventory {
    pub inventory_id: DbId,
    pub film_id: Option<DbId>,
    pub store_id: Option<DbId>,
    pub last_update: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventory {
    pub film_id: Option<DbId>,
    pub store_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInventory {
    pub film_id: Option<DbId>,
    pub store_id: Option<DbId>,
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Film: {}, Store: {}",
            OptId(self.film_id),
            OptId(self.store_id)
        )
    }
}
