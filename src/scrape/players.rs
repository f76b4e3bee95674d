//! Player season stats loop.

use super::Scraper;
use crate::{
    cli::types::SeasonId,
    core::FlatRecord,
    error::Result,
    nhl::{
        extract::player_stats as extract_player, Endpoint, ExtractContext, JsonSource,
        PlayerRegistry, PlayerStatKind,
    },
};
use tracing::{debug, info, warn};

/// For each season, each registered player and each stat selector, append
/// the player's records to `out`.
///
/// A lookup miss or a missing resource skips only that (player, selector)
/// pair.
pub async fn player_stats<S: JsonSource>(
    scraper: &Scraper<'_, S>,
    seasons: &[SeasonId],
    registry: &PlayerRegistry,
    out: &mut Vec<FlatRecord>,
) -> Result<()> {
    for &season in seasons {
        info!(%season, players = registry.len(), "player season stats");
        for player in registry.ids() {
            info!(%season, %player, "player");
            let ctx = ExtractContext::season(season).with_player(player);

            for kind in PlayerStatKind::ALL {
                let endpoint = Endpoint::PlayerStats {
                    player,
                    kind,
                    season,
                };
                let records = match scraper.fetch(&endpoint).await {
                    Ok(doc) => extract_player(&doc, kind, &ctx, Some(registry)),
                    Err(err) => Err(err),
                };
                match records {
                    Ok(records) if records.is_empty() => {
                        debug!(%season, %player, %kind, "no stats")
                    }
                    Ok(records) => out.extend(records),
                    Err(err) if err.is_skippable() => {
                        warn!(%season, %player, %kind, error = %err, "skipping player stats")
                    }
                    Err(err) => return Err(err),
                }
            }
        }
    }
    Ok(())
}
