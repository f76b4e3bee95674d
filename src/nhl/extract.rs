//! Record extraction: walk NHL API documents into flat records.
//!
//! Each [`StatKind`] is a fixed set of field-path extractions. Optional
//! fields that are absent are left out of the record. A missing top-level
//! section (no splits, no play-by-play, no shift data) yields no records.
//! A present section with an unexpected shape is reported as
//! [`NhlError::UnexpectedShape`].
//!
//! The scrape loops call the typed functions directly. [`extract`] is the
//! library entry point for callers that hold a document and a [`StatKind`]
//! and want records without picking the function themselves.

use super::endpoints::PlayerStatKind;
use super::registry::PlayerRegistry;
use crate::{
    cli::types::{GameId, PlayerId, SeasonId},
    core::{
        path::{lookup, lookup_str},
        FlatRecord, Scalar,
    },
    error::{NhlError, Result},
    path,
};
use serde_json::Value;
use std::fmt;


/// The fixed extraction variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    TeamSeason,
    TeamRank,
    PlayerHomeAway,
    PlayerSituational,
    PlayerSingleSeason,
    GameEvent,
    GameTeamBox,
    GamePlayerBox,
    Shift,
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatKind::TeamSeason => "team-season",
            StatKind::TeamRank => "team-rank",
            StatKind::PlayerHomeAway => "player-home-away",
            StatKind::PlayerSituational => "player-situational",
            StatKind::PlayerSingleSeason => "player-single-season",
            StatKind::GameEvent => "game-event",
            StatKind::GameTeamBox => "game-team-box",
            StatKind::GamePlayerBox => "game-player-box",
            StatKind::Shift => "shift",
        };
        write!(f, "{}", s)
    }
}

impl From<PlayerStatKind> for StatKind {
    fn from(kind: PlayerStatKind) -> Self {
        match kind {
            PlayerStatKind::HomeAndAway => StatKind::PlayerHomeAway,
            PlayerStatKind::GoalsByGameSituation => StatKind::PlayerSituational,
            PlayerStatKind::StatsSingleSeason => StatKind::PlayerSingleSeason,
        }
    }
}

/// Caller-supplied context attached to every record of a call.
#[derive(Debug, Clone, Default)]
pub struct ExtractContext {
    /// The season used in the request.
    pub season: Option<SeasonId>,
    /// Team display name.
    pub team: Option<String>,
    pub game: Option<GameId>,
    pub player: Option<PlayerId>,
}

impl ExtractContext {
    pub fn season(season: SeasonId) -> Self {
        Self {
            season: Some(season),
            ..Self::default()
        }
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_game(mut self, game: GameId) -> Self {
        self.game = Some(game);
        self
    }

    pub fn with_player(mut self, player: PlayerId) -> Self {
        self.player = Some(player);
        self
    }
}

/// Raw values and league ranks for one team-season.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSeasonRecords {
    pub stats: FlatRecord,
    pub ranks: FlatRecord,
}

/// Everything one game feed produces, partitioned by table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameRecords {
    pub events: Vec<FlatRecord>,
    pub teams: Vec<FlatRecord>,
    pub players: Vec<FlatRecord>,
}

impl GameRecords {
    pub fn extend(&mut self, other: GameRecords) {
        self.events.extend(other.events);
        self.teams.extend(other.teams);
        self.players.extend(other.players);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.teams.is_empty() && self.players.is_empty()
    }
}

/// Dispatch on `kind`, always returning a sequence of records.
pub fn extract(
    doc: &Value,
    kind: StatKind,
    ctx: &ExtractContext,
    registry: Option<&PlayerRegistry>,
) -> Result<Vec<FlatRecord>> {
    match kind {
        StatKind::TeamSeason | StatKind::TeamRank => {
            let index = if kind == StatKind::TeamSeason { 0 } else { 1 };
            Ok(team_split(doc, index, ctx).into_iter().collect())
        }
        StatKind::PlayerHomeAway => player_stats(doc, PlayerStatKind::HomeAndAway, ctx, registry),
        StatKind::PlayerSituational => {
            player_stats(doc, PlayerStatKind::GoalsByGameSituation, ctx, registry)
        }
        StatKind::PlayerSingleSeason => {
            player_stats(doc, PlayerStatKind::StatsSingleSeason, ctx, registry)
        }
        StatKind::GameEvent | StatKind::GameTeamBox | StatKind::GamePlayerBox => {
            let game = resolve_game(doc, ctx, kind)?;
            let Some(records) = game_records(doc, game)? else {
                return Ok(Vec::new());
            };
            Ok(match kind {
                StatKind::GameEvent => records.events,
                StatKind::GameTeamBox => records.teams,
                _ => records.players,
            })
        }
        StatKind::Shift => {
            let game = resolve_game(doc, ctx, kind)?;
            Ok(shift_records(doc, game))
        }
    }
}

fn resolve_game(doc: &Value, ctx: &ExtractContext, kind: StatKind) -> Result<GameId> {
    if let Some(game) = ctx.game {
        return Ok(game);
    }
    lookup(doc, &path!["gamePk"])
        .and_then(Value::as_u64)
        .and_then(|pk| pk.to_string().parse::<GameId>().ok())
        .ok_or_else(|| NhlError::shape(kind.to_string(), "no game id in context or payload"))
}

// ---------------------------------------------------------------------------
// Team season stats

fn team_split(doc: &Value, index: usize, ctx: &ExtractContext) -> Option<FlatRecord> {
    let stat = lookup(
        doc,
        &path!["teams", 0, "teamStats", 0, "splits", index, "stat"],
    )?
    .as_object()?;

    let mut record = FlatRecord::new();
    record.merge_object(stat);
    if let Some(season) = ctx.season {
        record.insert("Season", season.code());
    }
    if let Some(team) = &ctx.team {
        record.insert("Team", team.as_str());
    }
    Some(record)
}

/// Both team splits: raw values (split 0) and ranks (split 1).
///
/// `Season` always comes from the request context, never from the payload.
/// Returns `None` when the team has no stats for the season.
pub fn team_season_stats(doc: &Value, ctx: &ExtractContext) -> Option<TeamSeasonRecords> {
    Some(TeamSeasonRecords {
        stats: team_split(doc, 0, ctx)?,
        ranks: team_split(doc, 1, ctx)?,
    })
}

// ---------------------------------------------------------------------------
// Player season stats

fn player_split(doc: &Value, index: usize, stat_type: &str, ctx: &ExtractContext) -> Option<FlatRecord> {
    let split = lookup(doc, &path!["stats", 0, "splits", index])?;
    let stat = split.get("stat")?.as_object()?;

    let mut record = FlatRecord::new();
    record.merge_object(stat);

    let season = split
        .get("season")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<SeasonId>().ok())
        .or(ctx.season);
    if let Some(season) = season {
        record.insert("Season", season.code());
    }
    record.insert("Stat Type", stat_type);
    Some(record)
}

/// Player stats for one `stats=` selector.
///
/// Home/away yields two records (`Home`, `Away`); the other selectors one.
/// Each record carries the player's display name from `registry`. An
/// unknown player id is a [`NhlError::PlayerNotFound`].
pub fn player_stats(
    doc: &Value,
    kind: PlayerStatKind,
    ctx: &ExtractContext,
    registry: Option<&PlayerRegistry>,
) -> Result<Vec<FlatRecord>> {
    let player_name = match ctx.player {
        Some(id) => Some(
            registry
                .and_then(|r| r.name(id))
                .ok_or(NhlError::PlayerNotFound { id: id.as_u64() })?,
        ),
        None => None,
    };

    let mut records = match kind {
        PlayerStatKind::HomeAndAway => {
            match (
                player_split(doc, 0, "Home", ctx),
                player_split(doc, 1, "Away", ctx),
            ) {
                (Some(home), Some(away)) => vec![home, away],
                _ => Vec::new(),
            }
        }
        PlayerStatKind::GoalsByGameSituation => {
            player_split(doc, 0, "Situation", ctx).into_iter().collect()
        }
        PlayerStatKind::StatsSingleSeason => {
            player_split(doc, 0, "Full Season", ctx).into_iter().collect()
        }
    };

    if let Some(name) = player_name {
        for record in &mut records {
            record.insert("Player", name);
        }
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Game feed

fn game_context(game: GameId) -> FlatRecord {
    let mut shared = FlatRecord::new();
    shared.insert("Season", game.season.code());
    shared.insert("Game Type", game.game_type.label());
    shared.insert("Game Number", game.number.as_u16());
    shared
}

fn required_str<'v>(doc: &'v Value, path: &[crate::core::Seg<'_>], what: &str) -> Result<&'v str> {
    lookup_str(doc, path).ok_or_else(|| NhlError::shape("game feed", format!("missing {what}")))
}

/// Events, per-team box scores and per-player box scores for one game.
///
/// Returns `Ok(None)` when the feed has no play-by-play section (the game
/// does not exist or has not been played).
pub fn game_records(doc: &Value, game: GameId) -> Result<Option<GameRecords>> {
    let Some(all_plays) = lookup(doc, &path!["liveData", "plays", "allPlays"]).and_then(Value::as_array)
    else {
        return Ok(None);
    };

    let mut shared = game_context(game);
    shared.insert(
        "Home",
        required_str(doc, &path!["gameData", "teams", "home", "name"], "home team")?,
    );
    shared.insert(
        "Away",
        required_str(doc, &path!["gameData", "teams", "away", "name"], "away team")?,
    );
    shared.insert_json("Game Time", lookup(doc, &path!["gameData", "datetime", "dateTime"]));

    let mut records = GameRecords {
        events: play_records(all_plays, &shared),
        ..GameRecords::default()
    };

    let teams = lookup(doc, &path!["liveData", "boxscore", "teams"])
        .and_then(Value::as_object)
        .ok_or_else(|| NhlError::shape("game feed", "missing boxscore teams"))?;

    for (side, team) in teams {
        let team_name = lookup_str(team, &path!["team", "name"])
            .ok_or_else(|| NhlError::shape("game feed", format!("missing {side} team name")))?;

        let mut team_record = shared.clone();
        team_record.insert("Team", team_name);
        if let Some(skater) =
            lookup(team, &path!["teamStats", "teamSkaterStats"]).and_then(Value::as_object)
        {
            team_record.merge_object(skater);
        }
        records.teams.push(team_record);

        let Some(players) = team.get("players").and_then(Value::as_object) else {
            continue;
        };
        for entry in players.values() {
            // Goalies and scratches carry no skater stats.
            let Some(skater) = lookup(entry, &path!["stats", "skaterStats"]).and_then(Value::as_object)
            else {
                continue;
            };
            let Some(name) = lookup_str(entry, &path!["person", "fullName"]) else {
                continue;
            };
            let mut player_record = shared.clone();
            player_record.insert("Team", team_name);
            player_record.insert("Player", name);
            player_record.merge_object(skater);
            records.players.push(player_record);
        }
    }

    Ok(Some(records))
}

fn play_records(all_plays: &[Value], shared: &FlatRecord) -> Vec<FlatRecord> {
    let mut events = Vec::new();
    for play in all_plays {
        let Some(players) = play.get("players").and_then(Value::as_array) else {
            continue;
        };
        for player in players {
            let mut event = shared.clone();
            event.insert_json("Team", lookup(play, &path!["team", "name"]));
            event.insert_json("Player", lookup(player, &path!["player", "fullName"]));
            event.insert_json("Event", lookup(play, &path!["result", "event"]));
            event.insert_json("Outcome", player.get("playerType"));
            event.insert_json("Period", lookup(play, &path!["about", "period"]));
            event.insert_json("Period Time", lookup(play, &path!["about", "periodTime"]));
            event.insert_json("Strength", lookup(play, &path!["result", "strength", "name"]));
            event.insert_json("GWG", lookup(play, &path!["result", "gameWinningGoal"]));
            event.insert_json("Empty Net", lookup(play, &path!["result", "emptyNet"]));

            let x = lookup(play, &path!["coordinates", "x"]).and_then(Scalar::from_json);
            let y = lookup(play, &path!["coordinates", "y"]).and_then(Scalar::from_json);
            if let (Some(x), Some(y)) = (x, y) {
                event.insert("x", x);
                event.insert("y", y);
            }
            events.push(event);
        }
    }
    events
}

// ---------------------------------------------------------------------------
// Shift charts

/// One record per shift in the chart's `data` array.
pub fn shift_records(doc: &Value, game: GameId) -> Vec<FlatRecord> {
    let Some(shifts) = doc.get("data").and_then(Value::as_array) else {
        return Vec::new();
    };

    let shared = game_context(game);
    shifts
        .iter()
        .map(|shift| {
            let mut record = shared.clone();
            if let (Some(first), Some(last)) = (
                shift.get("firstName").and_then(Value::as_str),
                shift.get("lastName").and_then(Value::as_str),
            ) {
                record.insert("Player Name", format!("{first} {last}"));
            }
            record.insert_json("Period", shift.get("period"));
            record.insert_json("Shift Number", shift.get("shiftNumber"));
            record.insert_json("Shift Start Time", shift.get("startTime"));
            record.insert_json("Shift End Time", shift.get("endTime"));
            record.insert_json("Shift Duration", shift.get("duration"));
            record.insert_json("Team", shift.get("teamName"));
            record
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Rosters

/// `{ID, Player}` records from a `/teams/{id}/roster` document.
pub fn roster_entries(doc: &Value) -> Vec<FlatRecord> {
    let Some(roster) = doc.get("roster").and_then(Value::as_array) else {
        return Vec::new();
    };
    roster
        .iter()
        .filter_map(|entry| {
            let person = entry.get("person")?;
            let id = person.get("id")?.as_i64()?;
            let name = person.get("fullName")?.as_str()?;
            let mut record = FlatRecord::new();
            record.insert("ID", id);
            record.insert("Player", name);
            Some(record)
        })
        .collect()
}

/// Player names from an `expand=team.roster` document.
pub fn roster_names(doc: &Value) -> Vec<String> {
    lookup(doc, &path!["teams", 0, "roster", "roster"])
        .and_then(Value::as_array)
        .map(|roster| {
            roster
                .iter()
                .filter_map(|entry| lookup_str(entry, &path!["person", "fullName"]))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Find a player's id by exact full name in an `expand=team.roster` document.
pub fn player_id_by_name(doc: &Value, name: &str) -> Option<PlayerId> {
    lookup(doc, &path!["teams", 0, "roster", "roster"])?
        .as_array()?
        .iter()
        .find(|entry| lookup_str(entry, &path!["person", "fullName"]) == Some(name))
        .and_then(|entry| lookup(entry, &path!["person", "id"]))
        .and_then(Value::as_u64)
        .map(PlayerId::new)
}
