//! Address entity model and DTOs.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::table::{ColumnDef, ColumnType, ForeignKeyDef, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "address",
    columns: &[
        ColumnDef::primary_key("address_id"),
        ColumnDef::required("address", ColumnType::Varchar(100)),
        ColumnDef::required("address2", ColumnType::Varchar(100)),
        ColumnDef::required("district", ColumnType::Varchar(50)),
        ColumnDef::optional("city_id", ColumnType::Integer),
        ColumnDef::required("postal_code", ColumnType::Varchar(50)),
        ColumnDef::required("phone", ColumnType::Varchar(50)),
        ColumnDef::optional("last_update", ColumnType::Timestamp),
    ],
    foreign_keys: &[ForeignKeyDef::new("city_id", "city", "city_id")],
    touch_column: Some("last_update"),
};

/// A row from the `address` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Address {
    pub address_id: DbId,
    pub address: String,
    pub address2: String,
    pub district: String,
    pub city_id: Option<DbId>,
    pub postal_code: String,
    pub phone: String,
    pub last_update: Option<Timestamp>,
}

/// DTO for creating a new address.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAddress {
    pub address: String,
    pub address2: String,
    pub district: String,
    pub city_id: Option<DbId>,
    pub postal_code: String,
    pub phone: String,
}

/// DTO for updating an existing address. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAddress {
    pub address: Option<String>,
    pub address2: Option<String>,
    pub district: Option<String>,
    pub city_id: Option<DbId>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address: {} {}", self.address, self.postal_code)
    }
}
