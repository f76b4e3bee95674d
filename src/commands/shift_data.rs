//! Shift chart command

use super::{
    common::{finish, report, run_until_interrupted, CommandContext, SHIFTS_TABLE},
    game_stats::game_scope,
};
use crate::{
    cli::{types::GameType, CommonArgs, SeasonRangeArgs},
    error::Result,
    nhl::{JsonSource, NhlClient},
    scrape::{season_range, shift_data, Scraper},
    storage::ExportSummary,
};

/// Scrape every game's shift chart in range into `Shifts`.
pub async fn scrape_shift_data<S: JsonSource>(
    source: &S,
    ctx: &mut CommandContext,
    range: &SeasonRangeArgs,
    game_types: &[GameType],
) -> Result<Vec<ExportSummary>> {
    let seasons = season_range(range.start, range.end)?;
    let scope = game_scope(ctx, game_types);
    let scraper = Scraper::new(source, ctx.settings.pacing.clone());

    let mut out = Vec::new();
    let scraped = run_until_interrupted(shift_data(&scraper, &seasons, &scope, &mut out)).await;

    // Shift records already come in display order.
    let exported = ctx
        .export_records(SHIFTS_TABLE, &out, &[])
        .map(|summary| summary.into_iter().collect());
    finish(scraped, exported)
}

/// Handle the shift-data command
pub async fn handle_shift_data(
    common: &CommonArgs,
    range: &SeasonRangeArgs,
    game_types: &[GameType],
) -> Result<()> {
    let mut ctx = CommandContext::new(&common.overrides())?;
    // tarpaulin::skip - live HTTP client
    let client = NhlClient::new()?;
    let summaries = scrape_shift_data(&client, &mut ctx, range, game_types).await?;
    report(&summaries);
    Ok(())
}
