//! Country entity model and DTOs. Root of the geography hierarchy.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::table::{ColumnDef, ColumnType, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "country",
    columns: &[
        ColumnDef::primary_key("country_id"),
        ColumnDef::required("country", ColumnType::Varchar(50)),
        ColumnDef::optional("last_update", ColumnType::Timestamp),
    ],
    foreign_keys: &[],
    touch_column: Some("last_update"),
};

/// A row from the `country` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Country {
    pub country_id: DbId,
    pub country: String,
    pub last_update: Option<Timestamp>,
}

/// DTO for creating a new country.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCountry {
    pub country: String,
}

/// DTO for updating an existing country. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCountry {
    pub country: Option<String>,
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Country: {}", self.country)
    }
}
