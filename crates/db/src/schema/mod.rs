//! Schema bootstrap.
//!
//! [`initialize_schema`] creates every declared table, the cycle back-edge
//! constraints, foreign-key indexes and last-update triggers. It runs in a
//! single transaction and is safe to call on an already-initialized
//! database.

pub mod catalog;
pub mod ddl;
pub mod introspect;
pub mod table;

use sqlx::PgConnection;

use crate::error::SchemaError;
use crate::schema::table::TableDef;
use crate::DbPool;

/// Outcome of a bootstrap run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    /// Tables created by this run, in creation order.
    pub created: Vec<&'static str>,
    /// Tables that already existed with a matching structure.
    pub existing: Vec<&'static str>,
}

impl SchemaReport {
    /// `true` when the run found every table already in place.
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }
}

/// Ensure every table in [`catalog::TABLES`] exists.
///
/// Existing tables are checked against their declarations first; any
/// difference fails with [`SchemaError::Conflict`] before DDL is issued.
/// A failure at any later point rolls the whole run back.
pub async fn initialize_schema(pool: &DbPool) -> Result<SchemaReport, SchemaError> {
    initialize_tables(pool, catalog::TABLES).await
}

/// [`initialize_schema`] over an explicit table set.
pub async fn initialize_tables(
    pool: &DbPool,
    tables: &[&'static TableDef],
) -> Result<SchemaReport, SchemaError> {
    let order = catalog::creation_order(tables)?;

    let mut tx = pool.begin().await?;
    let existing = introspect::existing_tables(&mut tx, &order).await?;
    check_conflicts(&mut tx, &order, &existing).await?;

    let mut report = SchemaReport::default();
    for table in &order {
        sqlx::query(&ddl::create_table(table)).execute(&mut *tx).await?;
        if existing.contains(table.name) {
            report.existing.push(table.name);
        } else {
            tracing::info!(table = table.name, "Created table");
            report.created.push(table.name);
        }
    }

    for table in &order {
        add_deferred_foreign_keys(&mut tx, table).await?;
        for fk in table.foreign_keys {
            sqlx::query(&ddl::create_index(table, fk)).execute(&mut *tx).await?;
        }
        add_touch_trigger(&mut tx, table).await?;
    }

    tx.commit().await?;

    tracing::info!(
        created = report.created.len(),
        existing = report.existing.len(),
        "Schema initialized"
    );
    Ok(report)
}

async fn check_conflicts(
    conn: &mut PgConnection,
    order: &[&'static TableDef],
    existing: &std::collections::HashSet<String>,
) -> Result<(), SchemaError> {
    for table in order.iter().filter(|t| existing.contains(t.name)) {
        let observed = introspect::observe_table(&mut *conn, table.name).await?;
        let mismatches = introspect::diff_table(table, &observed);
        if !mismatches.is_empty() {
            tracing::error!(
                table = table.name,
                mismatches = mismatches.len(),
                "Existing table does not match its declaration"
            );
            return Err(SchemaError::Conflict {
                table: table.name.to_string(),
                mismatches,
            });
        }
    }
    Ok(())
}

async fn add_deferred_foreign_keys(
    conn: &mut PgConnection,
    table: &TableDef,
) -> Result<(), SchemaError> {
    for fk in table.deferred_foreign_keys() {
        let name = table.foreign_key_name(fk);
        if introspect::constraint_exists(&mut *conn, table.name, &name).await? {
            continue;
        }
        sqlx::query(&ddl::add_deferred_foreign_key(table, fk))
            .execute(&mut *conn)
            .await?;
        tracing::debug!(table = table.name, constraint = %name, "Added deferred foreign key");
    }
    Ok(())
}

async fn add_touch_trigger(conn: &mut PgConnection, table: &TableDef) -> Result<(), SchemaError> {
    let (Some(function), Some(trigger)) = (ddl::touch_function(table), ddl::touch_trigger(table))
    else {
        return Ok(());
    };

    sqlx::query(&function).execute(&mut *conn).await?;
    let name = table.touch_trigger_name();
    if !introspect::trigger_exists(&mut *conn, table.name, &name).await? {
        sqlx::query(&trigger).execute(&mut *conn).await?;
        tracing::debug!(table = table.name, trigger = %name, "Added last-update trigger");
    }
    Ok(())
}
