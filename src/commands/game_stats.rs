//! Game stats command

use super::common::{
    finish, report, run_until_interrupted, CommandContext, EVENTS_TABLE, GAME_PLAYER_FIRST,
    GAME_TEAM_FIRST, PLAYERS_TABLE, TEAMS_TABLE,
};
use crate::{
    cli::{types::GameType, CommonArgs, SeasonRangeArgs},
    error::Result,
    nhl::{GameRecords, JsonSource, NhlClient},
    scrape::{game_stats, season_range, GameScope, Scraper},
    storage::ExportSummary,
};

/// The game loop scope for a run: the requested game types (regular season
/// when none) up to the configured game-number bound.
pub fn game_scope(ctx: &CommandContext, game_types: &[GameType]) -> GameScope {
    let mut scope = GameScope {
        max_games: ctx.settings.max_games,
        ..GameScope::default()
    };
    if !game_types.is_empty() {
        scope.game_types = game_types.to_vec();
    }
    scope
}

/// Scrape every game in range into `Events`, `Teams` and `Players`.
pub async fn scrape_game_stats<S: JsonSource>(
    source: &S,
    ctx: &mut CommandContext,
    range: &SeasonRangeArgs,
    game_types: &[GameType],
) -> Result<Vec<ExportSummary>> {
    let seasons = season_range(range.start, range.end)?;
    let scope = game_scope(ctx, game_types);
    let scraper = Scraper::new(source, ctx.settings.pacing.clone());

    let mut out = GameRecords::default();
    let scraped = run_until_interrupted(game_stats(&scraper, &seasons, &scope, &mut out)).await;

    let exported = export_game_tables(ctx, &out);
    finish(scraped, exported)
}

fn export_game_tables(ctx: &mut CommandContext, out: &GameRecords) -> Result<Vec<ExportSummary>> {
    let mut summaries = Vec::new();
    summaries.extend(ctx.export_records(EVENTS_TABLE, &out.events, GAME_PLAYER_FIRST)?);
    summaries.extend(ctx.export_records(TEAMS_TABLE, &out.teams, GAME_TEAM_FIRST)?);
    summaries.extend(ctx.export_records(PLAYERS_TABLE, &out.players, GAME_PLAYER_FIRST)?);
    Ok(summaries)
}

/// Handle the game-stats command
pub async fn handle_game_stats(
    common: &CommonArgs,
    range: &SeasonRangeArgs,
    game_types: &[GameType],
) -> Result<()> {
    let mut ctx = CommandContext::new(&common.overrides())?;
    // tarpaulin::skip - live HTTP client
    let client = NhlClient::new()?;
    let summaries = scrape_game_stats(&client, &mut ctx, range, game_types).await?;
    report(&summaries);
    Ok(())
}
