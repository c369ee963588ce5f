//! DDL rendering for declared tables.
//!
//! Every statement is either idempotent on its own (`IF NOT EXISTS`,
//! `CREATE OR REPLACE`) or issued only after the bootstrap has checked that
//! the object is absent.

use crate::schema::table::{ColumnDef, ForeignKeyDef, TableDef};

/// Quote an identifier. Declared names are lowercase ASCII.
fn ident(name: &str) -> String {
    format!("\"{name}\"")
}

fn column_sql(column: &ColumnDef) -> String {
    let mut sql = format!("{} {}", ident(column.name), column.ty.sql());
    if column.is_primary_key() {
        sql.push_str(" PRIMARY KEY");
    } else if !column.nullable {
        sql.push_str(" NOT NULL");
    }
    if let Some(default) = column.default {
        sql.push_str(" DEFAULT ");
        sql.push_str(default);
    }
    sql
}

fn references_sql(fk: &ForeignKeyDef) -> String {
    format!(
        "FOREIGN KEY ({}) REFERENCES {} ({}) ON DELETE {} ON UPDATE CASCADE",
        ident(fk.column),
        ident(fk.references_table),
        ident(fk.references_column),
        fk.on_delete.sql()
    )
}

/// `CREATE TABLE IF NOT EXISTS` with columns and inline foreign keys.
pub fn create_table(table: &TableDef) -> String {
    let mut parts: Vec<String> = table.columns.iter().map(column_sql).collect();
    parts.extend(table.inline_foreign_keys().map(|fk| {
        format!(
            "CONSTRAINT {} {}",
            ident(&table.foreign_key_name(fk)),
            references_sql(fk)
        )
    }));

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        ident(table.name),
        parts.join(",\n    ")
    )
}

/// Add a cycle back-edge once both tables exist.
///
/// The constraint is `DEFERRABLE INITIALLY IMMEDIATE`: checked per statement
/// by default, but a transaction may `SET CONSTRAINTS ALL DEFERRED` to insert
/// both sides of the cycle before either row exists.
pub fn add_deferred_foreign_key(table: &TableDef, fk: &ForeignKeyDef) -> String {
    format!(
        "ALTER TABLE {} ADD CONSTRAINT {} {} DEFERRABLE INITIALLY IMMEDIATE",
        ident(table.name),
        ident(&table.foreign_key_name(fk)),
        references_sql(fk)
    )
}

pub fn create_index(table: &TableDef, fk: &ForeignKeyDef) -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
        ident(&table.index_name(fk)),
        ident(table.name),
        ident(fk.column)
    )
}

/// Trigger function that stamps the table's last-update column.
///
/// Returns `None` for tables without one.
pub fn touch_function(table: &TableDef) -> Option<String> {
    let column = table.touch_column?;
    Some(format!(
        "CREATE OR REPLACE FUNCTION {}() RETURNS trigger AS $$\n\
         BEGIN\n    NEW.{} := LOCALTIMESTAMP;\n    RETURN NEW;\nEND;\n\
         $$ LANGUAGE plpgsql",
        ident(&table.touch_function_name()),
        ident(column)
    ))
}

pub fn touch_trigger(table: &TableDef) -> Option<String> {
    table.touch_column?;
    Some(format!(
        "CREATE TRIGGER {} BEFORE UPDATE ON {} FOR EACH ROW EXECUTE FUNCTION {}()",
        ident(&table.touch_trigger_name()),
        ident(table.name),
        ident(&table.touch_function_name())
    ))
}
