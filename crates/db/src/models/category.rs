//! Film category model and DTOs.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::table::{ColumnDef, ColumnType, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "category",
    columns: &[
        ColumnDef::primary_key("id"),
        ColumnDef::required("name", ColumnType::Varchar(50)),
        ColumnDef::optional("last_update", ColumnType::Timestamp),
    ],
    foreign_keys: &[],
    touch_column: Some("last_update"),
};

/// A row from the `category` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub last_update: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
