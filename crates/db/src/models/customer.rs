//! Customer entity model and DTOs.
//!
//! The last-modified column is named `lastupdate` here, unlike every other
//! table.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::table::{ColumnDef, ColumnType, ForeignKeyDef, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "customer",
    columns: &[
        ColumnDef::primary_key("customer_id"),
        ColumnDef::optional("store_id", ColumnType::Integer),
        ColumnDef::required("first_name", ColumnType::Varchar(50)),
        ColumnDef::required("last_name", ColumnType::Varchar(50)),
        ColumnDef::required("email", ColumnType::Varchar(50)),
        ColumnDef::optional("address_id", ColumnType::Integer),
        ColumnDef::required("is_active", ColumnType::Boolean).with_default("TRUE"),
        ColumnDef::required("create_date", ColumnType::Timestamp),
        ColumnDef::optional("lastupdate", ColumnType::Timestamp),
        ColumnDef::optional("rental_id", ColumnType::Integer),
    ],
    foreign_keys: &[
        ForeignKeyDef::new("store_id", "store", "store_id"),
        ForeignKeyDef::new("address_id", "address", "address_id"),
        // rental.customer_id points back here
        ForeignKeyDef::new("rental_id", "rental", "rental_id").deferred(),
    ],
    touch_column: Some("lastupdate"),
};

/// A row from the `customer` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub customer_id: DbId,
    pub store_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address_id: Option<DbId>,
    pub is_active: bool,
    pub create_date: Timestamp,
    pub lastupdate: Option<Timestamp>,
    pub rental_id: Option<DbId>,
}

/// DTO for creating a customer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomer {
    pub store_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address_id: Option<DbId>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
    pub create_date: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCustomer {
    pub store_id: Option<DbId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address_id: Option<DbId>,
    pub is_active: Option<bool>,
    pub create_date: Option<Timestamp>,
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer: {} {}", self.first_name, self.last_name)
    }
}
