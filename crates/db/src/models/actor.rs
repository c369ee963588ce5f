//! Actor entity model and DTOs.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::table::{ColumnDef, ColumnType, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "actor",
    columns: &[
        ColumnDef::primary_key("actor_id"),
        ColumnDef::required("first_name", ColumnType::Varchar(50)),
        ColumnDef::required("last_name", ColumnType::Varchar(50)),
        ColumnDef::optional("last_update", ColumnType::Timestamp),
    ],
    foreign_keys: &[],
    touch_column: Some("last_update"),
};

/// A row from the `actor` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub actor_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub last_update: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateActor {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateActor {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
