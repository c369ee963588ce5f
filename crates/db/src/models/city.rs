//! City entity model and DTOs.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::table::{ColumnDef, ColumnType, ForeignKeyDef, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "city",
    columns: &[
        ColumnDef::primary_key("city_id"),
        ColumnDef::required("city", ColumnType::Varchar(50)),
        ColumnDef::optional("country_id", ColumnType::Integer),
        ColumnDef::optional("last_update", ColumnType::Timestamp),
    ],
    foreign_keys: &[ForeignKeyDef::new("country_id", "country", "country_id")],
    touch_column: Some("last_update"),
};

/// A row from the `city` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub city_id: DbId,
    pub city: String,
    pub country_id: Option<DbId>,
    pub last_update: Option<Timestamp>,
}

/// DTO for creating a new city.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCity {
    pub city: String,
    pub country_id: Option<DbId>,
}

/// DTO for updating an existing city. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCity {
    pub city: Option<String>,
    pub country_id: Option<DbId>,
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City: {}", self.city)
    }
}
