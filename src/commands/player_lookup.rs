//! Roster lookup command: player names, or one player's id

use crate::{
    cli::{
        types::{SeasonId, TeamId},
        CommonArgs,
    },
    config::Settings,
    error::Result,
    nhl::{team_name, JsonSource, NhlClient},
    scrape::{find_player_id, team_roster_names, Scraper},
};

/// Output lines for a roster lookup: the id of `name` when given,
/// otherwise every name on the roster.
pub async fn lookup_lines<S: JsonSource>(
    source: &S,
    settings: &Settings,
    team: TeamId,
    season: SeasonId,
    name: Option<&str>,
) -> Result<Vec<String>> {
    let scraper = Scraper::new(source, settings.pacing.clone());
    let label = team_name(team).map_or_else(|| format!("team {team}"), str::to_string);

    match name {
        Some(name) => Ok(vec![
            match find_player_id(&scraper, team, season, name).await? {
                Some(id) => format!("{name}: {id}"),
                None => format!("No player named {name:?} on the {label} roster in {season}"),
            },
        ]),
        None => {
            let names = team_roster_names(&scraper, team, season).await?;
            if names.is_empty() {
                Ok(vec![format!("No roster for {label} in {season}")])
            } else {
                Ok(names)
            }
        }
    }
}

/// Handle the player-lookup command
pub async fn handle_player_lookup(
    common: &CommonArgs,
    team: TeamId,
    season: SeasonId,
    name: Option<&str>,
) -> Result<()> {
    let settings = Settings::resolve(&common.overrides());
    // tarpaulin::skip - live HTTP client
    let client = NhlClient::new()?;
    for line in lookup_lines(&client, &settings, team, season, name).await? {
        println!("{line}");
    }
    Ok(())
}
