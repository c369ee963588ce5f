//! Store entity model and DTOs.
//!
//! `store.manager_staff_id` and `staff.store_id` reference each other. The
//! manager link is the deferred side: a store is inserted without a manager,
//! its staff are inserted next, and the manager is assigned afterwards with
//! [`crate::repositories::StoreRepo::set_manager`].

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::OptId;
use crate::schema::table::{ColumnDef, ColumnType, ForeignKeyDef, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "store",
    columns: &[
        ColumnDef::primary_key("store_id"),
        ColumnDef::optional("manager_staff_id", ColumnType::Integer),
        ColumnDef::optional("address_id", ColumnType::Integer),
        ColumnDef::optional("last_update", ColumnType::Timestamp),
    ],
    foreign_keys: &[
        ForeignKeyDef::new("manager_staff_id", "staff", "staff_id").deferred(),
        ForeignKeyDef::new("address_id", "address", "address_id"),
    ],
    touch_column: Some("last_update"),
};

/// A row from the `store` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Store {
    pub store_id: DbId,
    pub manager_staff_id: Option<DbId>,
    pub address_id: Option<DbId>,
    pub last_update: Option<Timestamp>,
}

/// DTO for creating a new store. `manager_staff_id` is usually `None` until
/// the manager's staff row exists.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStore {
    pub manager_staff_id: Option<DbId>,
    pub address_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStore {
    pub manager_staff_id: Option<DbId>,
    pub address_id: Option<DbId>,
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Store: {} {}",
            self.store_id,
            OptId(self.manager_staff_id)
        )
    }
}
