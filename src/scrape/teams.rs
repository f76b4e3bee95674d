//! Team season stats loop.

use super::{Scraper, TeamTables};
use crate::{
    cli::types::SeasonId,
    error::Result,
    nhl::{extract::team_season_stats as extract_team, Endpoint, ExtractContext, JsonSource, Team},
};
use tracing::{debug, info, warn};

/// For each season and each team, append the team's stats and ranks to `out`.
///
/// A team whose request fails, or that has no stats for a season, is
/// skipped.
pub async fn team_season_stats<S: JsonSource>(
    scraper: &Scraper<'_, S>,
    seasons: &[SeasonId],
    teams: &[Team],
    out: &mut TeamTables,
) -> Result<()> {
    for &season in seasons {
        info!(%season, teams = teams.len(), "team season stats");
        for team in teams {
            let endpoint = Endpoint::TeamStats {
                team: team.id,
                season,
            };
            let doc = match scraper.fetch(&endpoint).await {
                Ok(doc) => doc,
                Err(err) if err.is_skippable() => {
                    warn!(%season, team = team.name, error = %err, "skipping team");
                    continue;
                }
                Err(err) => return Err(err),
            };

            let ctx = ExtractContext::season(season).with_team(team.name);
            match extract_team(&doc, &ctx) {
                Some(records) => {
                    out.stats.push(records.stats);
                    out.ranks.push(records.ranks);
                }
                None => debug!(%season, team = team.name, "no stats"),
            }
        }
    }
    Ok(())
}
