//! Declarative table metadata.
//!
//! Each entity module in [`crate::models`] exposes a `TABLE` constant built
//! from these types. The schema bootstrap renders DDL from them and compares
//! them against what the database already holds.

/// Column types used by the rental schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Auto-incrementing integer primary key.
    Serial,
    Integer,
    Varchar(u32),
    /// `TIMESTAMP` without time zone.
    Timestamp,
    DoublePrecision,
    Boolean,
}

impl ColumnType {
    /// Type as written in a `CREATE TABLE` statement.
    pub fn sql(self) -> String {
        match self {
            ColumnType::Serial => "SERIAL".to_string(),
            ColumnType::Integer => "INTEGER".to_string(),
            ColumnType::Varchar(len) => format!("VARCHAR({len})"),
            ColumnType::Timestamp => "TIMESTAMP".to_string(),
            ColumnType::DoublePrecision => "DOUBLE PRECISION".to_string(),
            ColumnType::Boolean => "BOOLEAN".to_string(),
        }
    }

    /// Type as reported by `information_schema.columns.data_type`.
    pub fn catalog_name(self) -> &'static str {
        match self {
            ColumnType::Serial | ColumnType::Integer => "integer",
            ColumnType::Varchar(_) => "character varying",
            ColumnType::Timestamp => "timestamp without time zone",
            ColumnType::DoublePrecision => "double precision",
            ColumnType::Boolean => "boolean",
        }
    }

    /// Declared character length, if any.
    pub fn max_length(self) -> Option<i32> {
        match self {
            ColumnType::Varchar(len) => i32::try_from(len).ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    /// SQL literal used as the server-side default.
    pub default: Option<&'static str>,
}

impl ColumnDef {
    pub const fn primary_key(name: &'static str) -> Self {
        Self {
            name,
            ty: ColumnType::Serial,
            nullable: false,
            default: None,
        }
    }

    pub const fn required(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            default: None,
        }
    }

    pub const fn optional(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            nullable: true,
            default: None,
        }
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    pub fn is_primary_key(&self) -> bool {
        self.ty == ColumnType::Serial
    }
}

/// `ON DELETE` behaviour of a foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    Restrict,
    Cascade,
    SetNull,
}

impl OnDelete {
    pub fn sql(self) -> &'static str {
        match self {
            OnDelete::Restrict => "RESTRICT",
            OnDelete::Cascade => "CASCADE",
            OnDelete::SetNull => "SET NULL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeyDef {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
    pub on_delete: OnDelete,
    /// Added after every table exists, as a `DEFERRABLE` constraint.
    ///
    /// Set on the back-edge of each reference cycle (store/staff,
    /// customer/rental) so creation order only follows the other edges.
    pub deferred: bool,
}

impl ForeignKeyDef {
    pub const fn new(
        column: &'static str,
        references_table: &'static str,
        references_column: &'static str,
    ) -> Self {
        Self {
            column,
            references_table,
            references_column,
            on_delete: OnDelete::Restrict,
            deferred: false,
        }
    }

    pub const fn on_delete(self, on_delete: OnDelete) -> Self {
        Self { on_delete, ..self }
    }

    /// Mark as a cycle back-edge. Implies `ON DELETE SET NULL`.
    pub const fn deferred(self) -> Self {
        Self {
            deferred: true,
            on_delete: OnDelete::SetNull,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableDef {
    pub name: &'static str,
    /// Columns in creation (ordinal) order.
    pub columns: &'static [ColumnDef],
    pub foreign_keys: &'static [ForeignKeyDef],
    /// Column refreshed by trigger on every `UPDATE`.
    pub touch_column: Option<&'static str>,
}

impl TableDef {
    pub fn column(&self, name: &str) -> Option<&'static ColumnDef> {
        let columns: &'static [ColumnDef] = self.columns;
        columns.iter().find(|c| c.name == name)
    }

    pub fn primary_key(&self) -> Option<&'static ColumnDef> {
        let columns: &'static [ColumnDef] = self.columns;
        columns.iter().find(|c| c.is_primary_key())
    }

    /// Foreign keys that can be declared inline in `CREATE TABLE`.
    pub fn inline_foreign_keys(&self) -> impl Iterator<Item = &'static ForeignKeyDef> {
        let keys: &'static [ForeignKeyDef] = self.foreign_keys;
        keys.iter().filter(|fk| !fk.deferred)
    }

    pub fn deferred_foreign_keys(&self) -> impl Iterator<Item = &'static ForeignKeyDef> {
        let keys: &'static [ForeignKeyDef] = self.foreign_keys;
        keys.iter().filter(|fk| fk.deferred)
    }

    pub fn foreign_key_name(&self, fk: &ForeignKeyDef) -> String {
        format!("fk_{}_{}", self.name, fk.column)
    }

    pub fn index_name(&self, fk: &ForeignKeyDef) -> String {
        format!("idx_{}_{}", self.name, fk.column)
    }

    pub fn touch_function_name(&self) -> String {
        format!("touch_{}", self.name)
    }

    pub fn touch_trigger_name(&self) -> String {
        format!("trg_{}_touch", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: TableDef = TableDef {
        name: "sample",
        columns: &[
            ColumnDef::primary_key("sample_id"),
            ColumnDef::required("label", ColumnType::Varchar(50)),
            ColumnDef::required("count", ColumnType::Integer).with_default("0"),
            ColumnDef::optional("parent_id", ColumnType::Integer),
        ],
        foreign_keys: &[
            ForeignKeyDef::new("parent_id", "parent", "parent_id"),
            ForeignKeyDef::new("owner_id", "owner", "owner_id").deferred(),
        ],
        touch_column: None,
    };

    #[test]
    fn varchar_reports_length_and_catalog_name() {
        let ty = ColumnType::Varchar(50);
        assert_eq!(ty.sql(), "VARCHAR(50)");
        assert_eq!(ty.catalog_name(), "character varying");
        assert_eq!(ty.max_length(), Some(50));
        assert_eq!(ColumnType::Integer.max_length(), None);
    }

    #[test]
    fn serial_is_reported_as_integer() {
        assert_eq!(ColumnType::Serial.catalog_name(), "integer");
    }

    #[test]
    fn with_default_keeps_other_attributes() {
        let col = SAMPLE.column("count").unwrap();
        assert_eq!(col.default, Some("0"));
        assert!(!col.nullable);
        assert_eq!(col.ty, ColumnType::Integer);
    }

    #[test]
    fn primary_key_is_the_serial_column() {
        assert_eq!(SAMPLE.primary_key().unwrap().name, "sample_id");
    }

    #[test]
    fn deferred_keys_are_split_out_and_set_null() {
        let inline: Vec<_> = SAMPLE.inline_foreign_keys().map(|fk| fk.column).collect();
        let deferred: Vec<_> = SAMPLE.deferred_foreign_keys().collect();
        assert_eq!(inline, vec!["parent_id"]);
        assert_eq!(deferred.len(), 1);
        assert_eq!(deferred[0].on_delete, OnDelete::SetNull);
    }

    #[test]
    fn object_names_follow_table_and_column() {
        let fk = &SAMPLE.foreign_keys[0];
        assert_eq!(SAMPLE.foreign_key_name(fk), "fk_sample_parent_id");
        assert_eq!(SAMPLE.index_name(fk), "idx_sample_parent_id");
        assert_eq!(SAMPLE.touch_trigger_name(), "trg_sample_touch");
    }
}
