//! Rental entity model and DTOs.
//!
//! The staff reference column is spelled `stuff_id` in the stored schema.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::table::{ColumnDef, ColumnType, ForeignKeyDef, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "rental",
    columns: &[
        ColumnDef::primary_key("rental_id"),
        ColumnDef::required("rental_date", ColumnType::Timestamp),
        ColumnDef::optional("inventory_id", ColumnType::Integer),
        ColumnDef::optional("customer_id", ColumnType::Integer),
        ColumnDef::required("return_date", ColumnType::Timestamp),
        ColumnDef::optional("stuff_id", ColumnType::Integer),
        ColumnDef::optional("last_update", ColumnType::Timestamp),
    ],
    foreign_keys: &[
        ForeignKeyDef::new("inventory_id", "inventory", "inventory_id"),
        ForeignKeyDef::new("customer_id", "customer", "customer_id"),
        ForeignKeyDef::new("stuff_id", "staff", "staff_id"),
    ],
    touch_column: Some("last_update"),
};

/// A row from the `rental` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rental {
    pub rental_id: DbId,
    pub rental_date: Timestamp,
    pub inventory_id: Option<DbId>,
    pub customer_id: Option<DbId>,
    pub return_date: Timestamp,
    pub stuff_id: Option<DbId>,
    pub last_update: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRental {
    pub rental_date: Timestamp,
    pub inventory_id: Option<DbId>,
    pub customer_id: Option<DbId>,
    pub return_date: Timestamp,
    pub stuff_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRental {
    pub rental_date: Option<Timestamp>,
    pub inventory_id: Option<DbId>,
    pub customer_id: Option<DbId>,
    pub return_date: Option<Timestamp>,
    pub stuff_id: Option<DbId>,
}

impl fmt::Display for Rental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rental: {}, Rental Date: {}",
            self.rental_id, self.rental_date
        )
    }
}
