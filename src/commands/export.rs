//! Workbook export command

use super::common::CommandContext;
use crate::{cli::CommonArgs, error::Result, storage::export_workbook};
use std::path::Path;

/// Write stored tables (all when `tables` is empty) to an .xlsx workbook.
pub fn handle_export_xlsx(common: &CommonArgs, out: &Path, tables: &[String]) -> Result<()> {
    let ctx = CommandContext::new(&common.overrides())?;
    let written = export_workbook(&ctx.db, out, tables)?;
    println!(
        "Wrote {} sheet(s) to {}: {}",
        written.len(),
        out.display(),
        written.join(", ")
    );
    Ok(())
}
