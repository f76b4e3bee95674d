//! Storage layer for scraped NHL stats
//!
//! Tables are stored in SQLite, organized into logical components:
//! - `schema`: Database connection and table introspection
//! - `export`: Merge-and-dedupe export of normalized tables
//! - `registry`: Player id registry from the stored roster
//! - `queries`: Read-only dashboard queries
//! - `workbook`: Spreadsheet export

pub mod export;
pub mod queries;
pub mod registry;
pub mod schema;
pub mod workbook;


pub use export::{merge_tables, ExportSummary, Exporter};
pub use queries::{
    min_max_scale, running_average, GameLogQuery, GameLogRow, ProfileRow, SeasonPoint, StatProfile,
    Venue,
};
pub use registry::ROSTER_TABLE;
pub use schema::StatsDatabase;
pub use workbook::export_workbook;
