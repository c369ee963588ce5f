//! Reading the live catalog and comparing it with the declarations.

use std::collections::HashSet;
use std::fmt;

use sqlx::PgConnection;

use crate::schema::table::{ColumnDef, ColumnType, ForeignKeyDef, TableDef};

/// A column as reported by `information_schema.columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedColumn {
    pub name: String,
    pub data_type: String,
    pub max_length: Option<i32>,
    pub nullable: bool,
    /// Default expression as deparsed by the server.
    pub default: Option<String>,
}

/// A single-table foreign key as reported by `pg_constraint`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedForeignKey {
    /// Comma-separated for composite keys.
    pub column: String,
    pub references_table: String,
    pub references_column: String,
    /// `ON DELETE` action in SQL form, e.g. `SET NULL`.
    pub on_delete: String,
    pub deferrable: bool,
}

/// Everything the conflict check needs to know about an existing table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservedTable {
    pub columns: Vec<ObservedColumn>,
    /// Comma-separated primary key columns, if the table has one.
    pub primary_key: Option<String>,
    pub foreign_keys: Vec<ObservedForeignKey>,
}

/// One way an existing table differs from its declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMismatch {
    Missing {
        column: String,
    },
    Unexpected {
        column: String,
    },
    Type {
        column: String,
        expected: String,
        found: String,
    },
    Nullability {
        column: String,
        expected_nullable: bool,
    },
    Default {
        column: String,
        expected: Option<String>,
        found: Option<String>,
    },
    PrimaryKey {
        expected: String,
        found: Option<String>,
    },
    MissingForeignKey {
        column: String,
        expected: String,
    },
    ForeignKey {
        column: String,
        expected: String,
        found: String,
    },
    UnexpectedForeignKey {
        column: String,
        found: String,
    },
}

impl fmt::Display for TableMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableMismatch::Missing { column } => write!(f, "column {column} is missing"),
            TableMismatch::Unexpected { column } => {
                write!(f, "column {column} is not declared")
            }
            TableMismatch::Type {
                column,
                expected,
                found,
            } => write!(f, "column {column} is {found}, expected {expected}"),
            TableMismatch::Nullability {
                column,
                expected_nullable,
            } => {
                let expected = if *expected_nullable { "NULL" } else { "NOT NULL" };
                write!(f, "column {column} should be {expected}")
            }
            TableMismatch::Default {
                column,
                expected,
                found,
            } => write!(
                f,
                "column {column} defaults to {}, expected {}",
                found.as_deref().unwrap_or("nothing"),
                expected.as_deref().unwrap_or("nothing")
            ),
            TableMismatch::PrimaryKey { expected, found } => match found {
                Some(found) => write!(f, "primary key is ({found}), expected ({expected})"),
                None => write!(f, "primary key ({expected}) is missing"),
            },
            TableMismatch::MissingForeignKey { column, expected } => {
                write!(f, "foreign key on {column} is missing, expected {expected}")
            }
            TableMismatch::ForeignKey {
                column,
                expected,
                found,
            } => write!(f, "foreign key on {column} is {found}, expected {expected}"),
            TableMismatch::UnexpectedForeignKey { column, found } => {
                write!(f, "foreign key on {column} ({found}) is not declared")
            }
        }
    }
}

fn describe_type(data_type: &str, max_length: Option<i32>) -> String {
    match max_length {
        Some(len) => format!("{data_type}({len})"),
        None => data_type.to_string(),
    }
}

/// Strip casts and quoting from a deparsed default: `'0'::double precision`
/// and `0` compare equal, as do `true` and `TRUE`.
fn normalize_default(expr: &str) -> String {
    let value = expr.split("::").next().unwrap_or(expr);
    value.trim().trim_matches('\'').to_ascii_lowercase()
}

const SEQUENCE_DEFAULT: &str = "nextval(...)";

fn expected_default(column: &ColumnDef) -> Option<String> {
    if column.ty == ColumnType::Serial {
        return Some(SEQUENCE_DEFAULT.to_string());
    }
    column.default.map(str::to_string)
}

fn default_matches(column: &ColumnDef, found: Option<&str>) -> bool {
    match (column.ty, column.default, found) {
        (ColumnType::Serial, _, Some(found)) => found.starts_with("nextval("),
        (ColumnType::Serial, _, None) => false,
        (_, Some(expected), Some(found)) => normalize_default(expected) == normalize_default(found),
        (_, None, None) => true,
        _ => false,
    }
}

fn describe_declared_key(fk: &ForeignKeyDef) -> String {
    describe_key(
        fk.references_table,
        fk.references_column,
        fk.on_delete.sql(),
        fk.deferred,
    )
}

fn describe_observed_key(fk: &ObservedForeignKey) -> String {
    describe_key(
        &fk.references_table,
        &fk.references_column,
        &fk.on_delete,
        fk.deferrable,
    )
}

fn describe_key(table: &str, column: &str, on_delete: &str, deferrable: bool) -> String {
    let mut desc = format!("REFERENCES {table} ({column}) ON DELETE {on_delete}");
    if deferrable {
        desc.push_str(" DEFERRABLE");
    }
    desc
}

fn diff_columns(declared: &TableDef, observed: &[ObservedColumn], out: &mut Vec<TableMismatch>) {
    for column in declared.columns {
        let Some(found) = observed.iter().find(|o| o.name == column.name) else {
            out.push(TableMismatch::Missing {
                column: column.name.to_string(),
            });
            continue;
        };

        let expected_type = describe_type(column.ty.catalog_name(), column.ty.max_length());
        let found_type = describe_type(&found.data_type, found.max_length);
        if expected_type != found_type {
            out.push(TableMismatch::Type {
                column: column.name.to_string(),
                expected: expected_type,
                found: found_type,
            });
        }

        if column.nullable != found.nullable {
            out.push(TableMismatch::Nullability {
                column: column.name.to_string(),
                expected_nullable: column.nullable,
            });
        }

        if !default_matches(column, found.default.as_deref()) {
            out.push(TableMismatch::Default {
                column: column.name.to_string(),
                expected: expected_default(column),
                found: found.default.clone(),
            });
        }
    }

    for found in observed {
        if declared.column(&found.name).is_none() {
            out.push(TableMismatch::Unexpected {
                column: found.name.clone(),
            });
        }
    }
}

fn diff_keys(declared: &TableDef, observed: &ObservedTable, out: &mut Vec<TableMismatch>) {
    if let Some(pk) = declared.primary_key() {
        if observed.primary_key.as_deref() != Some(pk.name) {
            out.push(TableMismatch::PrimaryKey {
                expected: pk.name.to_string(),
                found: observed.primary_key.clone(),
            });
        }
    }

    for fk in declared.foreign_keys {
        let expected = describe_declared_key(fk);
        match observed.foreign_keys.iter().find(|o| o.column == fk.column) {
            Some(found) => {
                let found = describe_observed_key(found);
                if found != expected {
                    out.push(TableMismatch::ForeignKey {
                        column: fk.column.to_string(),
                        expected,
                        found,
                    });
                }
            }
            // Deferred keys are added by the bootstrap when absent.
            None if fk.deferred => {}
            None => out.push(TableMismatch::MissingForeignKey {
                column: fk.column.to_string(),
                expected,
            }),
        }
    }

    for found in &observed.foreign_keys {
        if !declared.foreign_keys.iter().any(|fk| fk.column == found.column) {
            out.push(TableMismatch::UnexpectedForeignKey {
                column: found.column.clone(),
                found: describe_observed_key(found),
            });
        }
    }
}

/// Compare a declared table with what the database holds for it: columns
/// with their types, nullability and defaults, the primary key, and every
/// foreign key with its target, delete rule and deferrability.
///
/// Returns an empty list when the structures are compatible.
pub fn diff_table(declared: &TableDef, observed: &ObservedTable) -> Vec<TableMismatch> {
    let mut mismatches = Vec::new();
    diff_columns(declared, &observed.columns, &mut mismatches);
    diff_keys(declared, observed, &mut mismatches);
    mismatches
}

/// Read columns, primary key and foreign keys of `table`.
pub async fn observe_table(
    conn: &mut PgConnection,
    table: &str,
) -> Result<ObservedTable, sqlx::Error> {
    let columns = table_columns(&mut *conn, table).await?;
    let (primary_key, foreign_keys) = table_keys(&mut *conn, table).await?;
    Ok(ObservedTable {
        columns,
        primary_key,
        foreign_keys,
    })
}

/// Names among `tables` that already exist in the current schema.
pub async fn existing_tables(
    conn: &mut PgConnection,
    tables: &[&TableDef],
) -> Result<HashSet<String>, sqlx::Error> {
    let names: Vec<String> = tables.iter().map(|t| t.name.to_string()).collect();
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name::text
         FROM information_schema.tables
         WHERE table_schema = current_schema()
           AND table_name::text = ANY($1)",
    )
    .bind(names)
    .fetch_all(conn)
    .await?;

    Ok(rows.into_iter().map(|(name,)| name).collect())
}

pub async fn table_columns(
    conn: &mut PgConnection,
    table: &str,
) -> Result<Vec<ObservedColumn>, sqlx::Error> {
    let rows: Vec<(String, String, Option<i32>, String, Option<String>)> = sqlx::query_as(
        "SELECT column_name::text,
                data_type::text,
                character_maximum_length::int4,
                is_nullable::text,
                column_default::text
         FROM information_schema.columns
         WHERE table_schema = current_schema()
           AND table_name::text = $1
         ORDER BY ordinal_position",
    )
    .bind(table)
    .fetch_all(conn)
    .await?;

    Ok(rows
        .into_iter()
        .map(
            |(name, data_type, max_length, is_nullable, default)| ObservedColumn {
                name,
                data_type,
                max_length,
                nullable: is_nullable == "YES",
                default,
            },
        )
        .collect())
}

/// `pg_constraint.confdeltype` in SQL form.
fn delete_action(code: &str) -> String {
    match code {
        "a" => "NO ACTION",
        "r" => "RESTRICT",
        "c" => "CASCADE",
        "n" => "SET NULL",
        "d" => "SET DEFAULT",
        other => other,
    }
    .to_string()
}

/// Primary key and foreign keys of `table`, from `pg_constraint`.
async fn table_keys(
    conn: &mut PgConnection,
    table: &str,
) -> Result<(Option<String>, Vec<ObservedForeignKey>), sqlx::Error> {
    let rows: Vec<(String, String, Option<String>, Option<String>, String, bool)> =
        sqlx::query_as(
            "SELECT c.contype::text,
                    (SELECT string_agg(a.attname::text, ',' ORDER BY k.ord)
                     FROM unnest(c.conkey) WITH ORDINALITY AS k(attnum, ord)
                     JOIN pg_attribute a
                         ON a.attrelid = c.conrelid AND a.attnum = k.attnum),
                    cf.relname::text,
                    (SELECT string_agg(a.attname::text, ',' ORDER BY k.ord)
                     FROM unnest(c.confkey) WITH ORDINALITY AS k(attnum, ord)
                     JOIN pg_attribute a
                         ON a.attrelid = c.confrelid AND a.attnum = k.attnum),
                    c.confdeltype::text,
                    c.condeferrable
             FROM pg_constraint c
             LEFT JOIN pg_class cf ON cf.oid = c.confrelid
             WHERE c.conrelid = to_regclass($1)
               AND c.contype IN ('p', 'f')
             ORDER BY c.conname",
        )
        .bind(table)
        .fetch_all(conn)
        .await?;

    let mut primary_key = None;
    let mut foreign_keys = Vec::new();
    for (kind, columns, references_table, references_column, on_delete, deferrable) in rows {
        if kind == "p" {
            primary_key = Some(columns);
        } else {
            foreign_keys.push(ObservedForeignKey {
                column: columns,
                references_table: references_table.unwrap_or_default(),
                references_column: references_column.unwrap_or_default(),
                on_delete: delete_action(&on_delete),
                deferrable,
            });
        }
    }
    Ok((primary_key, foreign_keys))
}

pub async fn constraint_exists(
    conn: &mut PgConnection,
    table: &str,
    constraint: &str,
) -> Result<bool, sqlx::Error> {
    let (exists,): (bool,) = sqlx::query_as(
        "SELECT EXISTS (
            SELECT 1 FROM pg_constraint
            WHERE conname = $1 AND conrelid = to_regclass($2)
        )",
    )
    .bind(constraint)
    .bind(table)
    .fetch_one(conn)
    .await?;
    Ok(exists)
}

pub async fn trigger_exists(
    conn: &mut PgConnection,
    table: &str,
    trigger: &str,
) -> Result<bool, sqlx::Error> {
    let (exists,): (bool,) = sqlx::query_as(
        "SELECT EXISTS (
            SELECT 1 FROM pg_trigger
            WHERE tgname = $1 AND tgrelid = to_regclass($2)
        )",
    )
    .bind(trigger)
    .bind(table)
    .fetch_one(conn)
    .await?;
    Ok(exists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{country, film};

    fn observed(name: &str, data_type: &str, max_length: Option<i32>, nullable: bool) -> ObservedColumn {
        ObservedColumn {
            name: name.to_string(),
            data_type: data_type.to_string(),
            max_length,
            nullable,
            default: None,
        }
    }

    fn matching_country() -> ObservedTable {
        let mut pk = observed("country_id", "integer", None, false);
        pk.default = Some("nextval('country_country_id_seq'::regclass)".into());
        ObservedTable {
            columns: vec![
                pk,
                observed("country", "character varying", Some(50), false),
                observed("last_update", "timestamp without time zone", None, true),
            ],
            primary_key: Some("country_id".into()),
            foreign_keys: Vec::new(),
        }
    }

    fn matching_film() -> ObservedTable {
        let columns = film::TABLE
            .columns
            .iter()
            .map(|c| ObservedColumn {
                name: c.name.to_string(),
                data_type: c.ty.catalog_name().to_string(),
                max_length: c.ty.max_length(),
                nullable: c.nullable,
                default: match (c.ty, c.default) {
                    (ColumnType::Serial, _) => Some("nextval('film_id_seq'::regclass)".into()),
                    (ColumnType::DoublePrecision, Some(_)) => {
                        Some("'0'::double precision".into())
                    }
                    (_, default) => default.map(str::to_string),
                },
            })
            .collect();
        ObservedTable {
            columns,
            primary_key: Some("id".into()),
            foreign_keys: vec![ObservedForeignKey {
                column: "language_id".into(),
                references_table: "language".into(),
                references_column: "language_id".into(),
                on_delete: "RESTRICT".into(),
                deferrable: false,
            }],
        }
    }

    #[test]
    fn identical_structure_has_no_mismatches() {
        assert!(diff_table(&country::TABLE, &matching_country()).is_empty());
        assert!(diff_table(&film::TABLE, &matching_film()).is_empty());
    }

    #[test]
    fn varchar_length_change_is_a_type_mismatch() {
        let mut table = matching_country();
        table.columns[1].max_length = Some(80);
        assert_eq!(
            diff_table(&country::TABLE, &table),
            vec![TableMismatch::Type {
                column: "country".into(),
                expected: "character varying(50)".into(),
                found: "character varying(80)".into(),
            }]
        );
    }

    #[test]
    fn nullability_change_is_reported() {
        let mut table = matching_country();
        table.columns[1].nullable = true;
        assert_eq!(
            diff_table(&country::TABLE, &table),
            vec![TableMismatch::Nullability {
                column: "country".into(),
                expected_nullable: false,
            }]
        );
    }

    #[test]
    fn missing_and_unexpected_columns_are_reported() {
        let mut table = matching_country();
        table.columns.remove(2);
        table.columns.push(observed("name", "text", None, true));
        let mismatches = diff_table(&country::TABLE, &table);
        assert_eq!(
            mismatches,
            vec![
                TableMismatch::Missing {
                    column: "last_update".into()
                },
                TableMismatch::Unexpected {
                    column: "name".into()
                },
            ]
        );
        assert_eq!(mismatches[0].to_string(), "column last_update is missing");
    }

    #[test]
    fn defaults_compare_without_casts() {
        assert_eq!(normalize_default("'0'::double precision"), "0");
        assert_eq!(normalize_default("true"), normalize_default("TRUE"));
    }

    #[test]
    fn missing_default_is_reported() {
        let mut table = matching_film();
        let idx = table
            .columns
            .iter()
            .position(|c| c.name == "rental_rate")
            .unwrap();
        table.columns[idx].default = None;
        assert_eq!(
            diff_table(&film::TABLE, &table),
            vec![TableMismatch::Default {
                column: "rental_rate".into(),
                expected: Some("0".into()),
                found: None,
            }]
        );
    }

    #[test]
    fn plain_integer_key_is_not_serial() {
        let mut table = matching_country();
        table.columns[0].default = None;
        let mismatches = diff_table(&country::TABLE, &table);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(
            mismatches[0].to_string(),
            "column country_id defaults to nothing, expected nextval(...)"
        );
    }

    #[test]
    fn missing_primary_key_is_reported() {
        let mut table = matching_country();
        table.primary_key = None;
        assert_eq!(
            diff_table(&country::TABLE, &table),
            vec![TableMismatch::PrimaryKey {
                expected: "country_id".into(),
                found: None,
            }]
        );
    }

    #[test]
    fn missing_foreign_key_is_reported() {
        let mut table = matching_film();
        table.foreign_keys.clear();
        assert_eq!(
            diff_table(&film::TABLE, &table),
            vec![TableMismatch::MissingForeignKey {
                column: "language_id".into(),
                expected: "REFERENCES language (language_id) ON DELETE RESTRICT".into(),
            }]
        );
    }

    #[test]
    fn different_delete_rule_is_reported() {
        let mut table = matching_film();
        table.foreign_keys[0].on_delete = "CASCADE".into();
        let mismatches = diff_table(&film::TABLE, &table);
        assert_eq!(
            mismatches[0].to_string(),
            "foreign key on language_id is REFERENCES language (language_id) ON DELETE CASCADE, \
             expected REFERENCES language (language_id) ON DELETE RESTRICT"
        );
    }

    #[test]
    fn undeclared_foreign_key_is_reported() {
        let mut table = matching_country();
        table.foreign_keys.push(ObservedForeignKey {
            column: "country".into(),
            references_table: "city".into(),
            references_column: "city_id".into(),
            on_delete: "NO ACTION".into(),
            deferrable: false,
        });
        assert_matches::assert_matches!(
            diff_table(&country::TABLE, &table).as_slice(),
            [TableMismatch::UnexpectedForeignKey { column, .. }] if column == "country"
        );
    }
}
