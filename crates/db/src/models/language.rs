//! Language entity model and DTOs.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::table::{ColumnDef, ColumnType, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "language",
    columns: &[
        ColumnDef::primary_key("language_id"),
        ColumnDef::required("name", ColumnType::Varchar(50)),
        ColumnDef::optional("last_update", ColumnType::Timestamp),
    ],
    foreign_keys: &[],
    touch_column: Some("last_update"),
};

/// A row from the `language` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Language {
    pub language_id: DbId,
    pub name: String,
    pub last_update: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLanguage {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLanguage {
    pub name: Option<String>,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Language: {}", self.name)
    }
}
