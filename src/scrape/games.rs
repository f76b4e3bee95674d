//! Game feed loop.

use super::{GameScope, Scraper};
use crate::{
    cli::types::SeasonId,
    error::{NhlError, Result},
    nhl::{extract::game_records, Endpoint, GameRecords, JsonSource},
};
use tracing::info;

/// For each season and game type, walk game numbers from 1 and append each
/// game's events, team box scores and player box scores to `out`.
///
/// The first game with no data ends the loop for that season and game type.
pub async fn game_stats<S: JsonSource>(
    scraper: &Scraper<'_, S>,
    seasons: &[SeasonId],
    scope: &GameScope,
    out: &mut GameRecords,
) -> Result<()> {
    for &season in seasons {
        info!(%season, "game stats");
        for &game_type in &scope.game_types {
            for game in scope.games(season, game_type) {
                info!(%season, %game_type, game = %game.number, "game");

                let doc = match scraper.fetch(&Endpoint::GameFeed(game)).await {
                    Ok(doc) => doc,
                    Err(NhlError::NotFound { .. }) => {
                        info!(%season, %game_type, game = %game.number, "no more games");
                        break;
                    }
                    Err(err) => return Err(err),
                };

                match game_records(&doc, game)? {
                    Some(records) if !records.is_empty() => out.extend(records),
                    _ => {
                        info!(%season, %game_type, game = %game.number, "no more games");
                        break;
                    }
                }
            }
        }
    }
    Ok(())
}
