//! Errors raised by schema bootstrap, plus SQLSTATE helpers for repository
//! callers.

use crate::schema::introspect::TableMismatch;

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL SQLSTATE for `not_null_violation`.
pub const NOT_NULL_VIOLATION: &str = "23502";

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The database could not be reached.
    #[error("Cannot reach database: {0}")]
    Connection(#[source] sqlx::Error),

    /// A declared table already exists with a different structure.
    #[error(
        "Table {table} exists with an incompatible structure: {}",
        join_mismatches(.mismatches)
    )]
    Conflict {
        table: String,
        mismatches: Vec<TableMismatch>,
    },

    /// The non-deferred foreign keys of these tables form a cycle.
    #[error("Foreign keys form a cycle between tables: {}", .0.join(", "))]
    DependencyCycle(Vec<String>),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

fn join_mismatches(mismatches: &[TableMismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// SQLSTATEs the server answers with when it refuses a session
/// (classes 08 and 28, `3D000` unknown database, `57P03` starting up).
fn is_connection_refusal(code: &str) -> bool {
    code.starts_with("08") || code.starts_with("28") || code == "3D000" || code == "57P03"
}

impl From<sqlx::Error> for SchemaError {
    fn from(err: sqlx::Error) -> Self {
        let refused = match &err {
            sqlx::Error::Database(db_err) => db_err
                .code()
                .is_some_and(|code| is_connection_refusal(&code)),
            _ => false,
        };
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => SchemaError::Connection(err),
            _ if refused => SchemaError::Connection(err),
            other => SchemaError::Database(other),
        }
    }
}

fn has_code(err: &sqlx::Error, code: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(code),
        _ => false,
    }
}

/// Whether `err` is a referential-integrity failure.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    has_code(err, FOREIGN_KEY_VIOLATION)
}

/// Whether `err` is a missing value for a `NOT NULL` column.
pub fn is_not_null_violation(err: &sqlx::Error) -> bool {
    has_code(err, NOT_NULL_VIOLATION)
}
