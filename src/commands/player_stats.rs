//! Player season stats command

use super::common::{
    finish, report, run_until_interrupted, CommandContext, PLAYER_STATS_FIRST, PLAYER_STATS_TABLE,
};
use crate::{
    cli::{CommonArgs, SeasonRangeArgs},
    error::Result,
    nhl::{JsonSource, NhlClient},
    scrape::{player_stats, season_range, Scraper},
    storage::{ExportSummary, ROSTER_TABLE},
};
use tracing::warn;

/// Scrape every player in the stored roster for every season in range into
/// `Player Stats`.
pub async fn scrape_player_stats<S: JsonSource>(
    source: &S,
    ctx: &mut CommandContext,
    range: &SeasonRangeArgs,
) -> Result<Vec<ExportSummary>> {
    let seasons = season_range(range.start, range.end)?;
    let registry = ctx.db.load_player_registry()?;
    if registry.is_empty() {
        warn!(table = ROSTER_TABLE, "no players registered; run player-ids first");
        return Ok(Vec::new());
    }

    let scraper = Scraper::new(source, ctx.settings.pacing.clone());
    let mut out = Vec::new();
    let scraped =
        run_until_interrupted(player_stats(&scraper, &seasons, &registry, &mut out)).await;

    let exported = ctx
        .export_records(PLAYER_STATS_TABLE, &out, PLAYER_STATS_FIRST)
        .map(|summary| summary.into_iter().collect());
    finish(scraped, exported)
}

/// Handle the player-stats command
pub async fn handle_player_stats(common: &CommonArgs, range: &SeasonRangeArgs) -> Result<()> {
    let mut ctx = CommandContext::new(&common.overrides())?;
    // tarpaulin::skip - live HTTP client
    let client = NhlClient::new()?;
    let summaries = scrape_player_stats(&client, &mut ctx, range).await?;
    report(&summaries);
    Ok(())
}
