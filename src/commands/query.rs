//! Read-only query commands

use super::common::CommandContext;
use crate::{
    cli::{CommonArgs, QueryCmd},
    error::Result,
    storage::{GameLogQuery, GameLogRow, SeasonPoint, StatProfile},
};

fn fmt_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Text lines for a game log, one game per line.
pub fn game_log_lines(stat: &str, rows: &[GameLogRow]) -> Vec<String> {
    rows.iter()
        .map(|r| {
            format!(
                "#{:<5} {} @ {}  {}  {}: {}  avg: {}",
                fmt_opt(&r.game_number),
                fmt_opt(&r.away),
                fmt_opt(&r.home),
                fmt_opt(&r.game_time),
                stat,
                fmt_opt(&r.value),
                fmt_opt(&r.running_average),
            )
        })
        .collect()
}

/// Text lines for a season series, one (season, team) per line.
pub fn season_lines(stat: &str, points: &[SeasonPoint]) -> Vec<String> {
    points
        .iter()
        .map(|p| format!("{}  {:<25} {}: {}", p.season, p.team, stat, fmt_opt(&p.value)))
        .collect()
}

/// Text lines for a stat profile, one season per line. Scaled values
/// follow the raw ones in parentheses.
pub fn profile_lines(profile: &StatProfile) -> Vec<String> {
    profile
        .rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = profile
                .stats
                .iter()
                .enumerate()
                .map(|(i, stat)| {
                    let raw = fmt_opt(&row.values[i]);
                    match row.scaled.as_ref().and_then(|scaled| scaled[i]) {
                        Some(s) => format!("{stat}: {raw} ({s:.2})"),
                        None => format!("{stat}: {raw}"),
                    }
                })
                .collect();
            format!("{}  {}", row.season, cells.join("  "))
        })
        .collect()
}

/// Handle the query subcommands
pub fn handle_query(common: &CommonArgs, cmd: &QueryCmd) -> Result<()> {
    let ctx = CommandContext::new(&common.overrides())?;

    match cmd {
        QueryCmd::GameLog {
            season,
            team,
            stat,
            opponent,
            venue,
            json,
        } => {
            let rows = ctx.db.team_game_log(&GameLogQuery {
                season: *season,
                team: team.clone(),
                opponent: opponent.clone(),
                venue: *venue,
                stat: stat.clone(),
            })?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("No games found for {team} in {season}");
            } else {
                for line in game_log_lines(stat, &rows) {
                    println!("{line}");
                }
            }
        }
        QueryCmd::TeamSeasons {
            stat,
            teams,
            seasons,
            json,
        } => {
            let points = ctx.db.team_season_series(stat, teams, seasons)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else if points.is_empty() {
                println!("No stored seasons match");
            } else {
                for line in season_lines(stat, &points) {
                    println!("{line}");
                }
            }
        }
        QueryCmd::TeamProfile {
            team,
            stats,
            seasons,
            scale,
            json,
        } => {
            let profile = ctx.db.team_stat_profile(team, stats, seasons, *scale)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else if profile.rows.is_empty() {
                println!("No stored seasons for {team}");
            } else {
                for line in profile_lines(&profile) {
                    println!("{line}");
                }
            }
        }
    }
    Ok(())
}
