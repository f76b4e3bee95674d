//! Shared plumbing for the scrape commands: store setup, interruption, and
//! the guaranteed export of whatever a run gathered.

use std::future::Future;

use crate::{
    config::{Overrides, Settings},
    core::{normalize, FlatRecord, RenameMap, Table},
    error::{NhlError, Result},
    storage::{ExportSummary, Exporter, StatsDatabase},
};
use tracing::{error, info, warn};

pub use crate::storage::queries::{STATS_TABLE, TEAMS_TABLE};

pub const RANKS_TABLE: &str = "Ranks";
pub const PLAYER_STATS_TABLE: &str = "Player Stats";
pub const EVENTS_TABLE: &str = "Events";
pub const PLAYERS_TABLE: &str = "Players";
pub const SHIFTS_TABLE: &str = "Shifts";

pub const TEAM_SEASON_FIRST: &[&str] = &["Season", "Team"];
pub const PLAYER_STATS_FIRST: &[&str] = &["Season", "Player", "Stat Type"];
pub const GAME_PLAYER_FIRST: &[&str] = &["Season", "Game Type", "Game Number", "Player", "Team"];
pub const GAME_TEAM_FIRST: &[&str] = &["Season", "Game Type", "Game Number", "Team"];
pub const ROSTER_FIRST: &[&str] = &["ID", "Player"];

/// Resources every command needs: resolved settings and the open store.
pub struct CommandContext {
    pub settings: Settings,
    pub db: StatsDatabase,
    pub renames: RenameMap,
}

impl CommandContext {
    pub fn new(overrides: &Overrides) -> Result<Self> {
        let settings = Settings::resolve(overrides);
        let db = StatsDatabase::open(&settings.db_path)?;
        info!(db = %settings.db_path.display(), "store opened");
        Ok(Self::with_db(settings, db))
    }

    pub fn with_db(settings: Settings, db: StatsDatabase) -> Self {
        Self {
            settings,
            db,
            renames: RenameMap::standard(),
        }
    }

    /// Normalize `records` and export them as `name`. Empty input is skipped.
    pub fn export_records(
        &mut self,
        name: &str,
        records: &[FlatRecord],
        first: &[&str],
    ) -> Result<Option<ExportSummary>> {
        if records.is_empty() {
            info!(table = name, "nothing to export");
            return Ok(None);
        }
        let table: Table = normalize(name, records, &self.renames, first);
        Ok(Some(self.db.export(&table)?))
    }
}

/// Drive `scrape` to completion, or stop it at Ctrl-C.
///
/// Dropping the scrape future releases its borrow of the caller's buffers,
/// which still hold everything gathered so far.
pub async fn run_until_interrupted<F>(scrape: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    tokio::select! {
        result = scrape => result,
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                warn!(error = %e, "could not listen for Ctrl-C");
            }
            warn!("interrupted; exporting what was gathered");
            Err(NhlError::Interrupted)
        }
    }
}

/// Combine a scrape outcome with the export that always follows it.
///
/// A scrape error wins: it is what the user needs to act on. The export
/// outcome is still logged either way.
pub fn finish(
    scraped: Result<()>,
    exported: Result<Vec<ExportSummary>>,
) -> Result<Vec<ExportSummary>> {
    match (scraped, exported) {
        (Ok(()), exported) => exported,
        (Err(scrape_err), Ok(summaries)) => {
            let rows: usize = summaries.iter().map(|s| s.added).sum();
            warn!(added = rows, "partial results exported before failure");
            Err(scrape_err)
        }
        (Err(scrape_err), Err(export_err)) => {
            error!(error = %export_err, "export of partial results failed");
            Err(scrape_err)
        }
    }
}

/// Print one line per exported table.
pub fn report(summaries: &[ExportSummary]) {
    for s in summaries {
        println!(
            "{}: {} new rows ({} total)",
            s.table, s.added, s.total
        );
    }
}
