//! Merge-and-dedupe export into the store

use super::schema::{quote_ident, StatsDatabase};
use crate::core::{Scalar, Table};
use anyhow::{Context, Result};
use rusqlite::{
    params_from_iter,
    types::{ToSql, ToSqlOutput},
};
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

/// Outcome of one table export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub table: String,
    /// Rows already in the store before this export.
    pub existing: usize,
    /// Rows this export actually added after de-duplication.
    pub added: usize,
    /// Rows in the table afterwards.
    pub total: usize,
}

/// Persist a table, merging with whatever the store already holds.
///
/// Implementations are authoritative for idempotency: exporting the same
/// table twice leaves the stored row set unchanged.
pub trait Exporter {
    fn export(&mut self, table: &Table) -> Result<ExportSummary>;
}

impl ToSql for Scalar {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Scalar::Text(s) => ToSqlOutput::from(s.as_str()),
            Scalar::Int(i) => ToSqlOutput::from(*i),
            Scalar::Float(f) => ToSqlOutput::from(*f),
            Scalar::Bool(b) => ToSqlOutput::from(*b),
        })
    }
}

/// Hashable identity of a cell as it will be stored. Booleans are stored as
/// integers, so they compare equal to the integers they reload as.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CellKey {
    Null,
    Int(i64),
    Float(u64),
    Text(String),
}

impl From<&Option<Scalar>> for CellKey {
    fn from(cell: &Option<Scalar>) -> Self {
        match cell {
            None => CellKey::Null,
            Some(Scalar::Int(i)) => CellKey::Int(*i),
            Some(Scalar::Bool(b)) => CellKey::Int(i64::from(*b)),
            Some(Scalar::Float(f)) => CellKey::Float(f.to_bits()),
            Some(Scalar::Text(s)) => CellKey::Text(s.clone()),
        }
    }
}

/// Union `incoming` into `existing`: existing columns first, new columns
/// appended in their incoming order, rows concatenated, exact duplicates
/// dropped with the first occurrence kept.
pub fn merge_tables(existing: Option<Table>, incoming: &Table) -> Table {
    let mut merged = existing.unwrap_or_else(|| Table::new(incoming.name.as_str(), Vec::new()));

    for column in &incoming.columns {
        if !merged.columns.contains(column) {
            merged.columns.push(column.clone());
        }
    }
    let width = merged.columns.len();
    for row in &mut merged.rows {
        row.resize(width, None);
    }

    let positions: Vec<usize> = incoming
        .columns
        .iter()
        .filter_map(|c| merged.column_index(c))
        .collect();
    for row in &incoming.rows {
        let mut aligned = vec![None; width];
        for (cell, &pos) in row.iter().zip(&positions) {
            aligned[pos] = cell.clone();
        }
        merged.rows.push(aligned);
    }

    let mut seen: HashSet<Vec<CellKey>> = HashSet::with_capacity(merged.rows.len());
    merged
        .rows
        .retain(|row| seen.insert(row.iter().map(CellKey::from).collect()));
    merged
}

impl StatsDatabase {
    /// Replace the stored contents of `table.name` with `table`, atomically.
    pub(crate) fn write_table(&mut self, table: &Table) -> Result<()> {
        let name = quote_ident(&table.name);
        let tx = self.conn.transaction()?;

        tx.execute(&format!("DROP TABLE IF EXISTS {name}"), [])?;
        let columns: Vec<String> = table.columns.iter().map(|c| quote_ident(c)).collect();
        tx.execute(
            &format!("CREATE TABLE {name} ({})", columns.join(", ")),
            [],
        )?;

        {
            let placeholders = vec!["?"; columns.len()].join(", ");
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO {name} ({}) VALUES ({placeholders})",
                columns.join(", ")
            ))?;
            for row in &table.rows {
                stmt.execute(params_from_iter(row.iter()))?;
            }
        }

        tx.commit()?;
        Ok(())
    }
}

impl Exporter for StatsDatabase {
    fn export(&mut self, table: &Table) -> Result<ExportSummary> {
        let existing = self.load_table(&table.name)?;
        let existing_rows = existing.as_ref().map_or(0, Table::len);

        let merged = merge_tables(existing, table);
        if merged.columns.is_empty() {
            return Ok(ExportSummary {
                table: table.name.clone(),
                existing: 0,
                added: 0,
                total: 0,
            });
        }

        self.write_table(&merged)
            .with_context(|| format!("writing table {}", table.name))?;

        let summary = ExportSummary {
            table: table.name.clone(),
            existing: existing_rows,
            added: merged.len().saturating_sub(existing_rows),
            total: merged.len(),
        };
        info!(
            table = %summary.table,
            added = summary.added,
            total = summary.total,
            "exported"
        );
        Ok(summary)
    }
}
