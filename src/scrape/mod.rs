//! Season and game iteration driver
//!
//! Every loop here awaits one request at a time, pauses after each success,
//! and accumulates into buffers owned by the caller. Whatever was gathered
//! before an error or an interrupt stays in those buffers for export.

pub mod games;
pub mod players;
pub mod rosters;
pub mod shifts;
pub mod teams;

#[cfg(test)]
pub(crate) mod fake;

use crate::{
    cli::types::{GameId, GameNumber, GameType, SeasonBound, SeasonId},
    core::{retry_async, FlatRecord, RetryPolicy},
    error::{NhlError, Result},
    nhl::{Endpoint, JsonSource},
};
use serde_json::Value;
use std::time::Duration;

pub use games::game_stats;
pub use players::player_stats;
pub use rosters::{find_player_id, player_ids, team_roster_names};
pub use shifts::shift_data;
pub use teams::team_season_stats;

/// Default pause after every successful request.
pub const DEFAULT_DELAY_MS: u64 = 1_000;

/// Safeguard upper bound for the game-number loop.
pub const DEFAULT_MAX_GAMES: u16 = 1271;

/// Expand an inclusive season range.
///
/// Both bounds must have the same shape. Full season identifiers are
/// truncated to their start year before expanding. `start > end` yields an
/// empty list.
pub fn season_list(start: SeasonBound, end: SeasonBound) -> Result<Vec<SeasonId>> {
    if start.is_full_season() != end.is_full_season() {
        return Err(NhlError::MixedSeasonBounds {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok((start.start_year()..=end.start_year())
        .map(SeasonId::new)
        .collect())
}

/// `season_list(start, end)` with an omitted end meaning just `start`.
pub fn season_range(start: SeasonBound, end: Option<SeasonBound>) -> Result<Vec<SeasonId>> {
    season_list(start, end.unwrap_or(start))
}

/// Request pacing: the fixed inter-request pause plus the retry policy for
/// transient failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pacing {
    pub delay: Duration,
    pub retry: RetryPolicy,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            retry: RetryPolicy::default(),
        }
    }
}

impl Pacing {
    /// No pause and no retries.
    pub fn none() -> Self {
        Self {
            delay: Duration::ZERO,
            retry: RetryPolicy::none(),
        }
    }
}

/// Which games the game loops walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameScope {
    pub game_types: Vec<GameType>,
    pub max_games: u16,
}

impl Default for GameScope {
    fn default() -> Self {
        Self {
            game_types: vec![GameType::RegularSeason],
            max_games: DEFAULT_MAX_GAMES,
        }
    }
}

impl GameScope {
    /// Game ids `0001..=max_games` for one season and game type.
    pub fn games(&self, season: SeasonId, game_type: GameType) -> impl Iterator<Item = GameId> {
        (1..=self.max_games).map(move |n| GameId::new(season, game_type, GameNumber::new(n)))
    }
}

/// Team season stats split into raw values and ranks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamTables {
    pub stats: Vec<FlatRecord>,
    pub ranks: Vec<FlatRecord>,
}

impl TeamTables {
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty() && self.ranks.is_empty()
    }
}

/// Paced, retrying access to a [`JsonSource`].
pub struct Scraper<'a, S: JsonSource> {
    source: &'a S,
    pacing: Pacing,
}

impl<'a, S: JsonSource> Scraper<'a, S> {
    pub fn new(source: &'a S, pacing: Pacing) -> Self {
        Self { source, pacing }
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Fetch one endpoint, waiting out transient failures per the retry
    /// policy, then pause for the configured delay.
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<Value> {
        let op_name = format!("{endpoint:?}");
        let doc = retry_async(&self.pacing.retry, &op_name, || self.source.fetch(endpoint)).await?;
        if !self.pacing.delay.is_zero() {
            tokio::time::sleep(self.pacing.delay).await;
        }
        Ok(doc)
    }
}
