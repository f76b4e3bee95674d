//! CLI argument definitions and parsing.

pub mod types;

use crate::{config::Overrides, storage::Venue};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{GameType, SeasonBound, SeasonId, TeamId};

/// Store and pacing flags shared by every command.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// SQLite store path (or set `NHL_STATS_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Pause after every request, in milliseconds (or set `NHL_STATS_DELAY_MS`).
    #[clap(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Highest game number to try per season and game type (or set `NHL_STATS_MAX_GAMES`).
    #[clap(long, global = true)]
    pub max_games: Option<u16>,

    /// Debug-level logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            db: self.db.clone(),
            delay_ms: self.delay_ms,
            max_games: self.max_games,
        }
    }
}

/// Inclusive season range: `2019`, `2015 2019`, or `20152016 20182019`.
#[derive(Debug, Clone, Args)]
pub struct SeasonRangeArgs {
    /// First season, as a start year or a full season id.
    pub start: SeasonBound,

    /// Last season (inclusive); defaults to START. Must use the same shape as START.
    pub end: Option<SeasonBound>,
}

#[derive(Debug, Subcommand)]
pub enum QueryCmd {
    /// A team's games in one season with a stat and its running average.
    GameLog {
        /// Season as a start year or full id.
        #[clap(long, short)]
        season: SeasonId,

        /// Team display name, e.g. "Boston Bruins".
        #[clap(long, short)]
        team: String,

        /// Column of the Teams table, e.g. "Shots".
        #[clap(long)]
        stat: String,

        /// Only games against this team.
        #[clap(long)]
        opponent: Option<String>,

        /// Home games, away games, or both.
        #[clap(long, value_enum, default_value_t = Venue::All)]
        venue: Venue,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// One stat across seasons for one or more teams.
    TeamSeasons {
        /// Column of the Stats table, e.g. "Wins".
        #[clap(long)]
        stat: String,

        /// Team display name (repeatable); all teams when omitted.
        #[clap(long = "team", short = 't')]
        teams: Vec<String>,

        /// Season (repeatable); all seasons when omitted.
        #[clap(long = "season", short = 's')]
        seasons: Vec<SeasonId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Several stats of one team across seasons, optionally min-max scaled.
    TeamProfile {
        /// Team display name, e.g. "Boston Bruins".
        #[clap(long, short)]
        team: String,

        /// Column of the Stats table (repeatable, at least one).
        #[clap(long = "stat", required = true)]
        stats: Vec<String>,

        /// Season (repeatable); all seasons when omitted.
        #[clap(long = "season", short = 's')]
        seasons: Vec<SeasonId>,

        /// Also report each stat scaled to 0..1 across the seasons shown.
        #[clap(long)]
        scale: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scrape team season stats and ranks into the Stats and Ranks tables.
    TeamStats {
        #[clap(flatten)]
        seasons: SeasonRangeArgs,
    },

    /// Scrape home/away, situational and full-season stats for every player
    /// in the Roster table into the Player Stats table.
    PlayerStats {
        #[clap(flatten)]
        seasons: SeasonRangeArgs,
    },

    /// Scrape every game's events and box scores into the Events, Teams and
    /// Players tables.
    GameStats {
        #[clap(flatten)]
        seasons: SeasonRangeArgs,

        /// Game types to walk (repeatable); regular season when omitted.
        #[clap(long = "game-type", short = 'g', value_enum)]
        game_types: Vec<GameType>,
    },

    /// Scrape every game's shift chart into the Shifts table.
    ShiftData {
        #[clap(flatten)]
        seasons: SeasonRangeArgs,

        /// Game types to walk (repeatable); regular season when omitted.
        #[clap(long = "game-type", short = 'g', value_enum)]
        game_types: Vec<GameType>,
    },

    /// Scrape team rosters into the Roster table (player ids and names).
    PlayerIds {
        #[clap(flatten)]
        seasons: SeasonRangeArgs,

        /// Only current franchises instead of every known one.
        #[clap(long)]
        active_only: bool,
    },

    /// Look up a team's roster for one season: every name, or one player's id.
    PlayerLookup {
        /// Franchise id, e.g. 15 for Washington.
        #[clap(long, short)]
        team: TeamId,

        /// Season as a start year or full id.
        #[clap(long, short)]
        season: SeasonId,

        /// Exact full name to resolve to a player id.
        #[clap(long)]
        name: Option<String>,
    },

    /// Write stored tables to an .xlsx workbook, one sheet per table.
    ExportXlsx {
        /// Output workbook path.
        #[clap(long, short)]
        out: PathBuf,

        /// Table to include (repeatable); every table when omitted.
        #[clap(long = "table")]
        tables: Vec<String>,
    },

    /// Read-only queries over the store.
    Query {
        #[clap(subcommand)]
        cmd: QueryCmd,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nhl-stats", about = "Scrape NHL stats into a local store", version)]
pub struct NhlStats {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        NhlStats::command().debug_assert();
    }

    #[test]
    fn test_parse_season_range() {
        let app = NhlStats::try_parse_from(["nhl-stats", "team-stats", "2015", "2019"]).unwrap();
        match app.command {
            Commands::TeamStats { seasons } => {
                assert_eq!(seasons.start, SeasonBound::Year(2015));
                assert_eq!(seasons.end, Some(SeasonBound::Year(2019)));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_game_types_and_globals() {
        let app = NhlStats::try_parse_from([
            "nhl-stats",
            "game-stats",
            "20192020",
            "--game-type",
            "playoffs",
            "-g",
            "regular-season",
            "--delay-ms",
            "0",
            "--db",
            "x.db",
        ])
        .unwrap();
        assert_eq!(app.common.delay_ms, Some(0));
        assert_eq!(app.common.db, Some(PathBuf::from("x.db")));
        match app.command {
            Commands::GameStats {
                seasons,
                game_types,
            } => {
                assert_eq!(seasons.start, SeasonBound::Season(SeasonId::new(2019)));
                assert!(seasons.end.is_none());
                assert_eq!(game_types, vec![GameType::Playoffs, GameType::RegularSeason]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_season() {
        assert!(NhlStats::try_parse_from(["nhl-stats", "team-stats", "201"]).is_err());
        assert!(NhlStats::try_parse_from(["nhl-stats", "team-stats", "20192021"]).is_err());
    }

    #[test]
    fn test_parse_player_lookup() {
        let app = NhlStats::try_parse_from([
            "nhl-stats",
            "player-lookup",
            "-t",
            "15",
            "-s",
            "2019",
            "--name",
            "Alex Ovechkin",
        ])
        .unwrap();
        match app.command {
            Commands::PlayerLookup { team, season, name } => {
                assert_eq!(team, TeamId::new(15));
                assert_eq!(season, SeasonId::new(2019));
                assert_eq!(name.as_deref(), Some("Alex Ovechkin"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_team_profile() {
        let app = NhlStats::try_parse_from([
            "nhl-stats",
            "query",
            "team-profile",
            "-t",
            "Boston Bruins",
            "--stat",
            "Wins",
            "--stat",
            "GAA",
            "--scale",
        ])
        .unwrap();
        match app.command {
            Commands::Query {
                cmd:
                    QueryCmd::TeamProfile {
                        stats,
                        seasons,
                        scale,
                        ..
                    },
            } => {
                assert_eq!(stats, vec!["Wins", "GAA"]);
                assert!(seasons.is_empty());
                assert!(scale);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(
            NhlStats::try_parse_from(["nhl-stats", "query", "team-profile", "-t", "Boston Bruins"])
                .is_err()
        );
    }

    #[test]
    fn test_parse_query() {
        let app = NhlStats::try_parse_from([
            "nhl-stats",
            "query",
            "game-log",
            "--season",
            "2019",
            "--team",
            "Boston Bruins",
            "--stat",
            "Shots",
            "--venue",
            "home",
            "--json",
        ])
        .unwrap();
        match app.command {
            Commands::Query {
                cmd:
                    QueryCmd::GameLog {
                        season,
                        venue,
                        json,
                        ..
                    },
            } => {
                assert_eq!(season, SeasonId::new(2019));
                assert_eq!(venue, Venue::Home);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
