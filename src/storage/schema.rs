//! Database connection management and table introspection

use crate::core::{Scalar, Table};
use anyhow::{Context, Result};
use rusqlite::{types::ValueRef, Connection};
use std::path::Path;

/// SQLite store holding one table per exported record category.
///
/// Table shapes are not fixed: columns follow whatever the exported records
/// carry, and are declared without a type so each cell keeps the storage
/// class it was written with.
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open (or create) the store at `path`, creating parent directories.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("opening database {}", path.display()))?;
        Ok(Self { conn })
    }

    pub fn new_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Names of every table in the store, sorted.
    pub fn table_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }

    pub fn has_table(&self, name: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            [name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Load a whole table in stored row order, or `None` if it does not exist.
    pub fn load_table(&self, name: &str) -> Result<Option<Table>> {
        if !self.has_table(name)? {
            return Ok(None);
        }

        let mut stmt = self
            .conn
            .prepare(&format!("SELECT * FROM {} ORDER BY rowid", quote_ident(name)))?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let rows = stmt
            .query_map([], |row| {
                (0..width)
                    .map(|i| row.get_ref(i).map(scalar_from_sql))
                    .collect::<rusqlite::Result<Vec<_>>>()
            })?
            .collect::<rusqlite::Result<Vec<_>>>()
            .with_context(|| format!("reading table {name}"))?;

        let mut table = Table::new(name, columns);
        table.rows = rows;
        Ok(Some(table))
    }
}

/// Quote an SQL identifier. Column names come straight from API field names
/// and may contain spaces or punctuation.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub(crate) fn scalar_from_sql(value: ValueRef<'_>) -> Option<Scalar> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(Scalar::Int(i)),
        ValueRef::Real(f) => Some(Scalar::Float(f)),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(Scalar::Text(String::from_utf8_lossy(bytes).into_owned()))
        }
    }
}
