//! Column normalization: rename fields and put the key columns first.

use super::record::{FlatRecord, Scalar};
use super::rename::RenameMap;
use serde::Serialize;

/// A named, column-ordered set of rows ready for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<Scalar>>>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Value at `row` for `column`, if both exist and the cell is set.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Scalar> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_ref()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Move `first` columns (those present) to the front, keeping the rest in order.
pub fn update_cols(columns: &[String], first: &[&str]) -> Vec<String> {
    let mut ordered: Vec<String> = first
        .iter()
        .filter(|f| columns.iter().any(|c| c.as_str() == **f))
        .map(|f| f.to_string())
        .collect();
    for column in columns {
        if !ordered.contains(column) {
            ordered.push(column.clone());
        }
    }
    ordered
}

/// Rename every record's fields and lay them out as a table.
///
/// Columns are the union of all record keys in first-encountered order,
/// then reordered by [`update_cols`]. A record missing a column gets `None`.
pub fn normalize(
    name: &str,
    records: &[FlatRecord],
    renames: &RenameMap,
    first: &[&str],
) -> Table {
    let renamed: Vec<FlatRecord> = records.iter().map(|r| renames.rename_record(r)).collect();

    let mut columns: Vec<String> = Vec::new();
    for record in &renamed {
        for key in record.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.to_string());
            }
        }
    }
    let columns = update_cols(&columns, first);

    let rows = renamed
        .iter()
        .map(|record| columns.iter().map(|c| record.get(c).cloned()).collect())
        .collect();

    Table {
        name: name.to_string(),
        columns,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_update_cols_moves_present_columns() {
        let columns = cols(&["wins", "Team", "losses", "Season"]);
        assert_eq!(
            update_cols(&columns, &["Season", "Team"]),
            cols(&["Season", "Team", "wins", "losses"])
        );
    }

    #[test]
    fn test_update_cols_skips_absent() {
        let columns = cols(&["wins", "Season"]);
        assert_eq!(
            update_cols(&columns, &["Season", "Team", "Game Type"]),
            cols(&["Season", "wins"])
        );
    }

    #[test]
    fn test_normalize_renames_and_aligns_rows() {
        let renames = RenameMap::standard();
        let a: FlatRecord = [("wins", Scalar::Int(40)), ("Team", "Boston Bruins".into())]
            .into_iter()
            .collect();
        let mut b = FlatRecord::new();
        b.insert("Team", "Buffalo Sabres");
        b.insert("losses", 30i64);
        b.insert("Season", 20192020i64);

        let table = normalize("Stats", &[a, b], &renames, &["Season", "Team"]);
        assert_eq!(table.name, "Stats");
        assert_eq!(table.columns, cols(&["Season", "Team", "Wins", "Losses"]));
        assert_eq!(table.rows[0][0], None);
        assert_eq!(table.cell(0, "Wins"), Some(&Scalar::Int(40)));
        assert_eq!(table.cell(1, "Losses"), Some(&Scalar::Int(30)));
        assert_eq!(table.cell(1, "Wins"), None);
    }

    #[test]
    fn test_normalize_empty() {
        let table = normalize("Events", &[], &RenameMap::standard(), &["Season"]);
        assert!(table.columns.is_empty());
        assert!(table.is_empty());
    }
}
