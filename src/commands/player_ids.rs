//! Roster command feeding the player id registry

use super::common::{finish, report, run_until_interrupted, CommandContext, ROSTER_FIRST};
use crate::{
    cli::{CommonArgs, SeasonRangeArgs},
    error::Result,
    nhl::{active_teams, all_teams, JsonSource, NhlClient, Team},
    scrape::{player_ids, season_range, Scraper},
    storage::{ExportSummary, ROSTER_TABLE},
};

/// Scrape `teams`' rosters for every season in range into `Roster`.
pub async fn scrape_player_ids<S: JsonSource>(
    source: &S,
    ctx: &mut CommandContext,
    range: &SeasonRangeArgs,
    teams: &[Team],
) -> Result<Vec<ExportSummary>> {
    let seasons = season_range(range.start, range.end)?;
    let scraper = Scraper::new(source, ctx.settings.pacing.clone());

    let mut out = Vec::new();
    let scraped = run_until_interrupted(player_ids(&scraper, &seasons, teams, &mut out)).await;

    let exported = ctx
        .export_records(ROSTER_TABLE, &out, ROSTER_FIRST)
        .map(|summary| summary.into_iter().collect());
    finish(scraped, exported)
}

/// Handle the player-ids command
pub async fn handle_player_ids(
    common: &CommonArgs,
    range: &SeasonRangeArgs,
    active_only: bool,
) -> Result<()> {
    let mut ctx = CommandContext::new(&common.overrides())?;
    let teams = if active_only {
        active_teams()
    } else {
        all_teams()
    };
    // tarpaulin::skip - live HTTP client
    let client = NhlClient::new()?;
    let summaries = scrape_player_ids(&client, &mut ctx, range, &teams).await?;
    report(&summaries);
    Ok(())
}
