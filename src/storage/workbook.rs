//! Spreadsheet export of stored tables

use super::schema::StatsDatabase;
use crate::core::{Scalar, Table};
use anyhow::{bail, Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;
use tracing::info;

/// Excel caps worksheet names at 31 characters.
const MAX_SHEET_NAME: usize = 31;
/// Worksheet grid limits, header row included.
const MAX_SHEET_ROWS: usize = 1_048_576;
const MAX_SHEET_COLS: usize = 16_384;

/// Write each named table (or every stored table when `tables` is empty)
/// to its own worksheet. Returns the names of the sheets written.
pub fn export_workbook(db: &StatsDatabase, path: &Path, tables: &[String]) -> Result<Vec<String>> {
    let names = if tables.is_empty() {
        db.table_names()?
    } else {
        tables.to_vec()
    };

    let mut workbook = Workbook::new();
    let mut written = Vec::with_capacity(names.len());
    for name in &names {
        let Some(table) = db.load_table(name)? else {
            bail!("no table named {name:?} in the store");
        };
        check_fits(name, table.len(), table.columns.len())?;
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name(name))?;
        write_table(sheet, &table)?;
        info!(table = %name, rows = table.len(), "worksheet written");
        written.push(name.clone());
    }

    if written.is_empty() {
        bail!("the store has no tables to export");
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;
    Ok(written)
}

fn sheet_name(table: &str) -> String {
    table
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(MAX_SHEET_NAME)
        .collect()
}

/// Fail before writing anything when a table cannot fit on one worksheet.
fn check_fits(table: &str, rows: usize, columns: usize) -> Result<()> {
    if rows >= MAX_SHEET_ROWS {
        bail!(
            "table {table:?} has {rows} rows; too large for one worksheet (max {})",
            MAX_SHEET_ROWS - 1
        );
    }
    if columns > MAX_SHEET_COLS {
        bail!("table {table:?} has {columns} columns; too wide for one worksheet (max {MAX_SHEET_COLS})");
    }
    Ok(())
}

/// Header row, then one row per record. Numbers stay numeric.
fn write_table(worksheet: &mut Worksheet, table: &Table) -> Result<()> {
    for (col_idx, column) in table.columns.iter().enumerate() {
        let col = u16::try_from(col_idx).context("column index out of range")?;
        worksheet
            .write_string(0, col, column)
            .with_context(|| format!("write header {column}"))?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let xl_row = u32::try_from(row_idx + 1).context("row index out of range")?;
        for (col_idx, cell) in row.iter().enumerate() {
            let col = u16::try_from(col_idx).context("column index out of range")?;
            let written = match cell {
                None => continue,
                Some(Scalar::Text(s)) => worksheet.write_string(xl_row, col, s),
                Some(Scalar::Int(i)) => worksheet.write_number(xl_row, col, *i as f64),
                Some(Scalar::Float(f)) => worksheet.write_number(xl_row, col, *f),
                Some(Scalar::Bool(b)) => worksheet.write_boolean(xl_row, col, *b),
            };
            written.with_context(|| format!("write cell ({xl_row},{col})"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_name_strips_and_truncates() {
        assert_eq!(sheet_name("Player Stats"), "Player Stats");
        assert_eq!(sheet_name("a/b:c"), "abc");
        assert_eq!(sheet_name(&"x".repeat(40)).len(), MAX_SHEET_NAME);
    }

    #[test]
    fn test_check_fits_limits() {
        assert!(check_fits("Shifts", 1_048_575, 12).is_ok());
        let err = check_fits("Shifts", 1_048_576, 12).unwrap_err();
        assert!(err.to_string().contains("too large for one worksheet"));
        assert!(check_fits("Stats", 10, 16_385).is_err());
    }
}
