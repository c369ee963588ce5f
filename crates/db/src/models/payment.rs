//! Payment entity model and DTOs. Payments carry no last-update column.

use std::fmt;

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::table::{ColumnDef, ColumnType, ForeignKeyDef, TableDef};

pub const TABLE: TableDef = TableDef {
    name: "payment",
    columns: &[
        ColumnDef::primary_key("payment_id"),
        ColumnDef::optional("customer_id", ColumnType::Integer),
        ColumnDef::optional("stuff_id", ColumnType::Integer),
        ColumnDef::optional("rental_id", ColumnType::Integer),
        ColumnDef::required("amount", ColumnType::DoublePrecision),
        ColumnDef::required("payment_date", ColumnType::Timestamp),
    ],
    foreign_keys: &[
        ForeignKeyDef::new("customer_id", "customer", "customer_id"),
        ForeignKeyDef::new("stuff_id", "staff", "staff_id"),
        ForeignKeyDef::new("rental_id", "rental", "rental_id"),
    ],
    touch_column: None,
};

/// A row from the `payment` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub payment_id: DbId,
    pub customer_id: Option<DbId>,
    pub stuff_id: Option<DbId>,
    pub rental_id: Option<DbId>,
    pub amount: f64,
    pub payment_date: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePayment {
    pub customer_id: Option<DbId>,
    pub stuff_id: Option<DbId>,
    pub rental_id: Option<DbId>,
    pub amount: f64,
    pub payment_date: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePayment {
    pub customer_id: Option<DbId>,
    pub stuff_id: Option<DbId>,
    pub rental_id: Option<DbId>,
    pub amount: Option<f64>,
    pub payment_date: Option<Timestamp>,
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payment: {} {}", self.amount, self.payment_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_amount_and_date() {
        let payment = Payment {
            payment_id: 1,
            customer_id: None,
            stuff_id: None,
            rental_id: None,
            amount: 4.99,
            payment_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        };
        assert_eq!(payment.to_string(), "Payment: 4.99 2024-01-01 10:00:00");
    }
}
