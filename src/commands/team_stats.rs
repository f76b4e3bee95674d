//! Team season stats command

use super::common::{
    finish, report, run_until_interrupted, CommandContext, RANKS_TABLE, STATS_TABLE,
    TEAM_SEASON_FIRST,
};
use crate::{
    cli::{CommonArgs, SeasonRangeArgs},
    error::Result,
    nhl::{all_teams, JsonSource, NhlClient, Team},
    scrape::{season_range, team_season_stats, Scraper, TeamTables},
    storage::ExportSummary,
};

/// Scrape `teams` for every season in range into `Stats` and `Ranks`.
pub async fn scrape_team_stats<S: JsonSource>(
    source: &S,
    ctx: &mut CommandContext,
    range: &SeasonRangeArgs,
    teams: &[Team],
) -> Result<Vec<ExportSummary>> {
    let seasons = season_range(range.start, range.end)?;
    let scraper = Scraper::new(source, ctx.settings.pacing.clone());

    let mut out = TeamTables::default();
    let scraped = run_until_interrupted(team_season_stats(&scraper, &seasons, teams, &mut out)).await;

    let exported = export_team_tables(ctx, &out);
    finish(scraped, exported)
}

fn export_team_tables(ctx: &mut CommandContext, out: &TeamTables) -> Result<Vec<ExportSummary>> {
    let mut summaries = Vec::new();
    summaries.extend(ctx.export_records(STATS_TABLE, &out.stats, TEAM_SEASON_FIRST)?);
    summaries.extend(ctx.export_records(RANKS_TABLE, &out.ranks, TEAM_SEASON_FIRST)?);
    Ok(summaries)
}

/// Handle the team-stats command
pub async fn handle_team_stats(common: &CommonArgs, range: &SeasonRangeArgs) -> Result<()> {
    let mut ctx = CommandContext::new(&common.overrides())?;
    // tarpaulin::skip - live HTTP client
    let client = NhlClient::new()?;
    let summaries = scrape_team_stats(&client, &mut ctx, range, &all_teams()).await?;
    report(&summaries);
    Ok(())
}
