//! Player id registry backed by the `Roster` table

use super::schema::StatsDatabase;
use crate::{cli::types::PlayerId, core::Scalar, nhl::PlayerRegistry};
use anyhow::{bail, Result};

/// Table written by the roster scrape and read back for player stats.
pub const ROSTER_TABLE: &str = "Roster";

fn player_id(cell: Option<&Scalar>) -> Option<PlayerId> {
    match cell? {
        Scalar::Int(id) => u64::try_from(*id).ok().map(PlayerId::new),
        Scalar::Text(text) => text.trim().parse().ok(),
        Scalar::Float(_) | Scalar::Bool(_) => None,
    }
}

impl StatsDatabase {
    /// Build the id <-> name registry from the `Roster` table.
    ///
    /// A missing table yields an empty registry. Rows without a usable id or
    /// name are ignored.
    pub fn load_player_registry(&self) -> Result<PlayerRegistry> {
        let Some(table) = self.load_table(ROSTER_TABLE)? else {
            return Ok(PlayerRegistry::new());
        };
        if table.column_index("ID").is_none() || table.column_index("Player").is_none() {
            bail!("{ROSTER_TABLE} table must have ID and Player columns");
        }

        let pairs = (0..table.len()).filter_map(|row| {
            let id = player_id(table.cell(row, "ID"))?;
            let name = table.cell(row, "Player")?.as_str()?;
            Some((id, name.to_string()))
        });
        Ok(PlayerRegistry::from_pairs(pairs))
    }
}
