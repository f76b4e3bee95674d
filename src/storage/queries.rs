//! Read-only dashboard queries over the stored tables

use super::schema::{quote_ident, StatsDatabase};
use crate::cli::types::SeasonId;
use anyhow::{bail, Result};
use rusqlite::{
    params_from_iter,
    types::{Value as SqlValue, ValueRef},
};
use serde::Serialize;

/// Per-game team box scores.
pub const TEAMS_TABLE: &str = "Teams";
/// Team full-season stats.
pub const STATS_TABLE: &str = "Stats";

/// Which of a team's games to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Venue {
    #[default]
    All,
    Home,
    Away,
}

/// Filter for [`StatsDatabase::team_game_log`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLogQuery {
    pub season: SeasonId,
    pub team: String,
    /// Only games against this team.
    pub opponent: Option<String>,
    pub venue: Venue,
    /// Column of the `Teams` table to report.
    pub stat: String,
}

/// One game of a team's season, with the stat's running average so far.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameLogRow {
    pub game_number: Option<i64>,
    pub home: Option<String>,
    pub away: Option<String>,
    pub game_time: Option<String>,
    pub value: Option<f64>,
    pub running_average: Option<f64>,
}

/// One (season, team) point of a stat's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonPoint {
    pub season: i64,
    pub team: String,
    pub value: Option<f64>,
}

/// Several stats of one team across seasons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatProfile {
    pub team: String,
    pub stats: Vec<String>,
    pub rows: Vec<ProfileRow>,
}

/// One season of a [`StatProfile`]. `values` and `scaled` line up with
/// [`StatProfile::stats`]; `scaled` is present only when scaling was asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRow {
    pub season: i64,
    pub values: Vec<Option<f64>>,
    pub scaled: Option<Vec<Option<f64>>>,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn as_f64(value: ValueRef<'_>) -> Option<f64> {
    match value {
        ValueRef::Integer(i) => Some(i as f64),
        ValueRef::Real(f) => Some(f),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes).ok()?.trim().parse().ok(),
        ValueRef::Null | ValueRef::Blob(_) => None,
    }
}

fn as_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

fn as_i64(value: ValueRef<'_>) -> Option<i64> {
    match value {
        ValueRef::Integer(i) => Some(i),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes).ok()?.trim().parse().ok(),
        _ => None,
    }
}

/// Expanding mean over the values seen so far, skipping gaps, rounded to
/// two decimals.
pub fn running_average(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut sum = 0.0;
    let mut count = 0u32;
    values
        .iter()
        .map(|value| {
            if let Some(v) = value {
                sum += v;
                count += 1;
            }
            (count > 0).then(|| round2(sum / f64::from(count)))
        })
        .collect()
}

/// Min-max scale to `0..=1`, skipping gaps. A stat that never changes
/// scales to 0.
pub fn min_max_scale(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let present = values.iter().flatten();
    let min = present.clone().copied().fold(f64::INFINITY, f64::min);
    let max = present.copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    values
        .iter()
        .map(|value| {
            value.map(|v| {
                if range > 0.0 {
                    (v - min) / range
                } else {
                    0.0
                }
            })
        })
        .collect()
}

impl StatsDatabase {
    fn table_columns(&self, table: &str) -> Result<Vec<String>> {
        let stmt = self
            .conn
            .prepare(&format!("SELECT * FROM {} LIMIT 0", quote_ident(table)))?;
        Ok(stmt.column_names().into_iter().map(String::from).collect())
    }

    fn require_columns(&self, table: &str, required: &[&str]) -> Result<()> {
        if !self.has_table(table)? {
            bail!("no {table} table in the store; run the matching scrape first");
        }
        let columns = self.table_columns(table)?;
        for column in required {
            if !columns.iter().any(|c| c == column) {
                bail!("{table} has no column {column:?}");
            }
        }
        Ok(())
    }

    /// A team's games in one season, in game order, with one stat and its
    /// running average.
    pub fn team_game_log(&self, query: &GameLogQuery) -> Result<Vec<GameLogRow>> {
        self.require_columns(
            TEAMS_TABLE,
            &["Season", "Game Type", "Game Number", "Team", "Home", "Away", query.stat.as_str()],
        )?;

        let mut sql = format!(
            "SELECT \"Game Number\", \"Home\", \"Away\", {time}, {stat} FROM {table}
             WHERE \"Season\" = ?1 AND \"Team\" = ?2",
            time = if self.table_columns(TEAMS_TABLE)?.iter().any(|c| c == "Game Time") {
                "\"Game Time\""
            } else {
                "NULL"
            },
            stat = quote_ident(&query.stat),
            table = quote_ident(TEAMS_TABLE),
        );
        match query.venue {
            Venue::All => {}
            Venue::Home => sql.push_str(" AND \"Home\" = ?2"),
            Venue::Away => sql.push_str(" AND \"Away\" = ?2"),
        }
        let mut params = vec![
            SqlValue::Integer(i64::from(query.season.code())),
            SqlValue::Text(query.team.clone()),
        ];
        if let Some(opponent) = &query.opponent {
            sql.push_str(" AND (\"Home\" = ?3 OR \"Away\" = ?3)");
            params.push(SqlValue::Text(opponent.clone()));
        }
        sql.push_str(" ORDER BY \"Game Type\", \"Game Number\"");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                Ok(GameLogRow {
                    game_number: as_i64(row.get_ref(0)?),
                    home: as_text(row.get_ref(1)?),
                    away: as_text(row.get_ref(2)?),
                    game_time: as_text(row.get_ref(3)?),
                    value: as_f64(row.get_ref(4)?),
                    running_average: None,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let values: Vec<Option<f64>> = rows.iter().map(|r| r.value).collect();
        for (row, avg) in rows.iter_mut().zip(running_average(&values)) {
            row.running_average = avg;
        }
        Ok(rows)
    }

    /// One stat across seasons for a set of teams, ordered by season then
    /// team. Empty `teams` or `seasons` means no filter on that axis.
    pub fn team_season_series(
        &self,
        stat: &str,
        teams: &[String],
        seasons: &[SeasonId],
    ) -> Result<Vec<SeasonPoint>> {
        self.require_columns(STATS_TABLE, &["Season", "Team", stat])?;

        let mut sql = format!(
            "SELECT \"Season\", \"Team\", {} FROM {} WHERE 1 = 1",
            quote_ident(stat),
            quote_ident(STATS_TABLE)
        );
        let mut params: Vec<SqlValue> = Vec::new();
        if !seasons.is_empty() {
            sql.push_str(&format!(
                " AND \"Season\" IN ({})",
                vec!["?"; seasons.len()].join(", ")
            ));
            params.extend(seasons.iter().map(|s| SqlValue::Integer(i64::from(s.code()))));
        }
        if !teams.is_empty() {
            sql.push_str(&format!(
                " AND \"Team\" IN ({})",
                vec!["?"; teams.len()].join(", ")
            ));
            params.extend(teams.iter().cloned().map(SqlValue::Text));
        }
        sql.push_str(" ORDER BY \"Season\", \"Team\"");

        let mut stmt = self.conn.prepare(&sql)?;
        let points = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                Ok((
                    as_i64(row.get_ref(0)?),
                    as_text(row.get_ref(1)?),
                    as_f64(row.get_ref(2)?),
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?
            .into_iter()
            .filter_map(|(season, team, value)| {
                Some(SeasonPoint {
                    season: season?,
                    team: team?,
                    value,
                })
            })
            .collect();
        Ok(points)
    }

    /// Several stats of one team, one row per stored season in season
    /// order. With `scale`, each stat is also min-max scaled across the
    /// returned seasons so stats of different magnitude compare on one axis.
    pub fn team_stat_profile(
        &self,
        team: &str,
        stats: &[String],
        seasons: &[SeasonId],
        scale: bool,
    ) -> Result<StatProfile> {
        if stats.is_empty() {
            bail!("at least one stat is required");
        }
        let mut required = vec!["Season", "Team"];
        required.extend(stats.iter().map(String::as_str));
        self.require_columns(STATS_TABLE, &required)?;

        let selected: Vec<String> = stats.iter().map(|s| quote_ident(s)).collect();
        let mut sql = format!(
            "SELECT \"Season\", {} FROM {} WHERE \"Team\" = ?",
            selected.join(", "),
            quote_ident(STATS_TABLE)
        );
        let mut params = vec![SqlValue::Text(team.to_string())];
        if !seasons.is_empty() {
            sql.push_str(&format!(
                " AND \"Season\" IN ({})",
                vec!["?"; seasons.len()].join(", ")
            ));
            params.extend(seasons.iter().map(|s| SqlValue::Integer(i64::from(s.code()))));
        }
        sql.push_str(" ORDER BY \"Season\"");

        let width = stats.len();
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows: Vec<ProfileRow> = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                let season = as_i64(row.get_ref(0)?);
                let values = (1..=width)
                    .map(|i| row.get_ref(i).map(as_f64))
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok((season, values))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?
            .into_iter()
            .filter_map(|(season, values)| {
                Some(ProfileRow {
                    season: season?,
                    values,
                    scaled: None,
                })
            })
            .collect();

        if scale {
            let columns: Vec<Vec<Option<f64>>> = (0..width)
                .map(|i| min_max_scale(&rows.iter().map(|r| r.values[i]).collect::<Vec<_>>()))
                .collect();
            for (r, row) in rows.iter_mut().enumerate() {
                row.scaled = Some(columns.iter().map(|column| column[r]).collect());
            }
        }

        Ok(StatProfile {
            team: team.to_string(),
            stats: stats.to_vec(),
            rows,
        })
    }
}
