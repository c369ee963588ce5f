//! Staff entity model and DTOs.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::table::{ColumnDef, ColumnType, ForeignKeyDef, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "staff",
    columns: &[
        ColumnDef::primary_key("staff_id"),
        ColumnDef::required("first_name", ColumnType::Varchar(50)),
        ColumnDef::required("last_name", ColumnType::Varchar(50)),
        ColumnDef::optional("address_id", ColumnType::Integer),
        ColumnDef::optional("store_id", ColumnType::Integer),
        ColumnDef::optional("active", ColumnType::Boolean).with_default("TRUE"),
        ColumnDef::required("username", ColumnType::Varchar(50)),
        ColumnDef::required("password", ColumnType::Varchar(50)),
        ColumnDef::optional("last_update", ColumnType::Timestamp),
        ColumnDef::required("picture", ColumnType::Varchar(50)),
    ],
    foreign_keys: &[
        ForeignKeyDef::new("address_id", "address", "address_id"),
        ForeignKeyDef::new("store_id", "store", "store_id"),
    ],
    touch_column: Some("last_update"),
};

/// A row from the `staff` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Staff {
    pub staff_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub address_id: Option<DbId>,
    pub store_id: Option<DbId>,
    pub active: Option<bool>,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub last_update: Option<Timestamp>,
    /// Path to the staff member's picture.
    pub picture: String,
}

/// DTO for creating a staff member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStaff {
    pub first_name: String,
    pub last_name: String,
    pub address_id: Option<DbId>,
    pub store_id: Option<DbId>,
    /// Defaults to `true` if omitted.
    pub active: Option<bool>,
    pub username: String,
    pub password: String,
    pub picture: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStaff {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address_id: Option<DbId>,
    pub store_id: Option<DbId>,
    pub active: Option<bool>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub picture: Option<String>,
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Staff: {} {}", self.first_name, self.last_name)
    }
}
