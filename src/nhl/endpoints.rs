//! The documented NHL endpoints the scraper reads.

use crate::cli::types::{GameId, PlayerId, SeasonId, TeamId};
use std::fmt;

/// Base path for the NHL stats API (teams, people, game feeds).
pub const STATS_API_BASE: &str = "https://statsapi.web.nhl.com/api/v1";

/// Base path for the NHL REST stats API (shift charts).
pub const SHIFTS_API_BASE: &str = "https://api.nhle.com/stats/rest/en";

/// Base URLs, overridable so tests can point at a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBases {
    pub stats: String,
    pub shifts: String,
}

impl Default for ApiBases {
    fn default() -> Self {
        Self {
            stats: STATS_API_BASE.to_string(),
            shifts: SHIFTS_API_BASE.to_string(),
        }
    }
}

impl ApiBases {
    /// Serve both APIs from one origin (`{base}/api/v1`, `{base}/stats/rest/en`).
    pub fn from_origin(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            stats: format!("{origin}/api/v1"),
            shifts: format!("{origin}/stats/rest/en"),
        }
    }
}

/// The `stats=` selector of the people endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStatKind {
    HomeAndAway,
    GoalsByGameSituation,
    StatsSingleSeason,
}

impl PlayerStatKind {
    /// Every variant, in the order the driver requests them.
    pub const ALL: [PlayerStatKind; 3] = [
        PlayerStatKind::HomeAndAway,
        PlayerStatKind::GoalsByGameSituation,
        PlayerStatKind::StatsSingleSeason,
    ];

    pub fn as_query(&self) -> &'static str {
        match self {
            PlayerStatKind::HomeAndAway => "homeAndAway",
            PlayerStatKind::GoalsByGameSituation => "goalsByGameSituation",
            PlayerStatKind::StatsSingleSeason => "statsSingleSeason",
        }
    }
}

impl fmt::Display for PlayerStatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `/teams/{id}?expand=team.stats&season={season}`
    TeamStats { team: TeamId, season: SeasonId },
    /// `/people/{id}/stats?stats={kind}&season={season}`
    PlayerStats {
        player: PlayerId,
        kind: PlayerStatKind,
        season: SeasonId,
    },
    /// `/teams/{id}?expand=team.roster&season={season}`
    ExpandedRoster { team: TeamId, season: SeasonId },
    /// `/teams/{id}/roster?season={season}`
    TeamRoster { team: TeamId, season: SeasonId },
    /// `/game/{id}/feed/live`
    GameFeed(GameId),
    /// `/shiftcharts?cayenneExp=gameId={id}`
    ShiftChart(GameId),
}

impl Endpoint {
    pub fn url(&self, bases: &ApiBases) -> String {
        let stats = bases.stats.trim_end_matches('/');
        match self {
            Endpoint::TeamStats { team, season } => {
                format!("{stats}/teams/{team}?expand=team.stats&season={season}")
            }
            Endpoint::PlayerStats {
                player,
                kind,
                season,
            } => format!("{stats}/people/{player}/stats?stats={kind}&season={season}"),
            Endpoint::ExpandedRoster { team, season } => {
                format!("{stats}/teams/{team}?expand=team.roster&season={season}")
            }
            Endpoint::TeamRoster { team, season } => {
                format!("{stats}/teams/{team}/roster?season={season}")
            }
            Endpoint::GameFeed(game) => format!("{stats}/game/{game}/feed/live"),
            Endpoint::ShiftChart(game) => format!(
                "{}/shiftcharts?cayenneExp=gameId={game}",
                bases.shifts.trim_end_matches('/')
            ),
        }
    }
}
