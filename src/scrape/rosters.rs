//! Roster loop feeding the player id registry.

use super::Scraper;
use crate::{
    cli::types::{PlayerId, SeasonId, TeamId},
    core::{FlatRecord, Scalar},
    error::Result,
    nhl::{
        extract::{player_id_by_name, roster_entries, roster_names},
        Endpoint, JsonSource, Team,
    },
};
use std::collections::HashSet;
use tracing::{info, warn};

fn roster_key(record: &FlatRecord) -> Option<(i64, String)> {
    match (record.get("ID"), record.get("Player")) {
        (Some(Scalar::Int(id)), Some(Scalar::Text(name))) => Some((*id, name.clone())),
        _ => None,
    }
}

/// For each season and team, append `{ID, Player}` records to `out`,
/// skipping pairs already present.
pub async fn player_ids<S: JsonSource>(
    scraper: &Scraper<'_, S>,
    seasons: &[SeasonId],
    teams: &[Team],
    out: &mut Vec<FlatRecord>,
) -> Result<()> {
    let mut seen: HashSet<(i64, String)> = out.iter().filter_map(roster_key).collect();

    for &season in seasons {
        info!(%season, teams = teams.len(), "rosters");
        for team in teams {
            let endpoint = Endpoint::TeamRoster {
                team: team.id,
                season,
            };
            let doc = match scraper.fetch(&endpoint).await {
                Ok(doc) => doc,
                Err(err) if err.is_skippable() => {
                    warn!(%season, team = team.name, error = %err, "skipping roster");
                    continue;
                }
                Err(err) => return Err(err),
            };

            for entry in roster_entries(&doc) {
                if let Some(key) = roster_key(&entry) {
                    if !seen.insert(key) {
                        continue;
                    }
                }
                out.push(entry);
            }
        }
    }
    Ok(())
}

/// Every player name on one team's roster for a season, in roster order.
pub async fn team_roster_names<S: JsonSource>(
    scraper: &Scraper<'_, S>,
    team: TeamId,
    season: SeasonId,
) -> Result<Vec<String>> {
    let doc = scraper
        .fetch(&Endpoint::ExpandedRoster { team, season })
        .await?;
    Ok(roster_names(&doc))
}

/// Look a player up by exact full name on one team's roster for a season.
pub async fn find_player_id<S: JsonSource>(
    scraper: &Scraper<'_, S>,
    team: TeamId,
    season: SeasonId,
    name: &str,
) -> Result<Option<PlayerId>> {
    let doc = scraper
        .fetch(&Endpoint::ExpandedRoster { team, season })
        .await?;
    let id = player_id_by_name(&doc, name);
    if id.is_none() {
        info!(%season, %team, name, "no such player on roster");
    }
    Ok(id)
}
