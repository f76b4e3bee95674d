//! Shift chart loop.

use super::{GameScope, Scraper};
use crate::{
    cli::types::SeasonId,
    core::FlatRecord,
    error::{NhlError, Result},
    nhl::{extract::shift_records, Endpoint, JsonSource},
};
use tracing::info;

/// For each season and game type, walk game numbers from 1 and append every
/// shift of each game to `out`. Stops at the first game without shifts.
pub async fn shift_data<S: JsonSource>(
    scraper: &Scraper<'_, S>,
    seasons: &[SeasonId],
    scope: &GameScope,
    out: &mut Vec<FlatRecord>,
) -> Result<()> {
    for &season in seasons {
        info!(%season, "shift data");
        for &game_type in &scope.game_types {
            for game in scope.games(season, game_type) {
                info!(%season, %game_type, game = %game.number, "shifts");

                let doc = match scraper.fetch(&Endpoint::ShiftChart(game)).await {
                    Ok(doc) => doc,
                    Err(NhlError::NotFound { .. }) => break,
                    Err(err) => return Err(err),
                };

                let shifts = shift_records(&doc, game);
                if shifts.is_empty() {
                    info!(%season, %game_type, game = %game.number, "no more games");
                    break;
                }
                out.extend(shifts);
            }
        }
    }
    Ok(())
}
