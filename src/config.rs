//! Run configuration: CLI flags, then environment, then defaults.

use crate::{
    core::RetryPolicy,
    scrape::{Pacing, DEFAULT_DELAY_MS, DEFAULT_MAX_GAMES},
};
use dirs::data_dir;
use std::path::PathBuf;
use std::time::Duration;

pub const DB_PATH_ENV_VAR: &str = "NHL_STATS_DB";
pub const DELAY_MS_ENV_VAR: &str = "NHL_STATS_DELAY_MS";
pub const MAX_GAMES_ENV_VAR: &str = "NHL_STATS_MAX_GAMES";
pub const RETRY_MAX_ATTEMPTS_ENV_VAR: &str = "NHL_STATS_RETRY_MAX_ATTEMPTS";
pub const RETRY_BASE_DELAY_MS_ENV_VAR: &str = "NHL_STATS_RETRY_BASE_DELAY_MS";
pub const RETRY_MAX_DELAY_MS_ENV_VAR: &str = "NHL_STATS_RETRY_MAX_DELAY_MS";
pub const RETRY_MAX_ELAPSED_MS_ENV_VAR: &str = "NHL_STATS_RETRY_MAX_ELAPSED_MS";

const DB_FILE_NAME: &str = "nhl_stats.db";

/// Values given on the command line; `None` falls through to the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub db: Option<PathBuf>,
    pub delay_ms: Option<u64>,
    pub max_games: Option<u16>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub pacing: Pacing,
    pub max_games: u16,
}

impl Settings {
    /// Resolve against the process environment.
    pub fn resolve(overrides: &Overrides) -> Self {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve against an arbitrary variable lookup.
    pub fn resolve_with(overrides: &Overrides, env: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str| env(key).and_then(|v| v.trim().parse::<u64>().ok());

        let db_path = overrides
            .db
            .clone()
            .or_else(|| env(DB_PATH_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(default_db_path);

        let delay_ms = overrides
            .delay_ms
            .or_else(|| parsed(DELAY_MS_ENV_VAR))
            .unwrap_or(DEFAULT_DELAY_MS);

        let max_games = overrides
            .max_games
            .or_else(|| parsed(MAX_GAMES_ENV_VAR).and_then(|v| u16::try_from(v).ok()))
            .unwrap_or(DEFAULT_MAX_GAMES);

        let defaults = RetryPolicy::default();
        let retry = RetryPolicy {
            max_attempts: parsed(RETRY_MAX_ATTEMPTS_ENV_VAR)
                .and_then(|v| u32::try_from(v).ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.max_attempts),
            base_delay_ms: parsed(RETRY_BASE_DELAY_MS_ENV_VAR).unwrap_or(defaults.base_delay_ms),
            max_delay_ms: parsed(RETRY_MAX_DELAY_MS_ENV_VAR).unwrap_or(defaults.max_delay_ms),
            max_elapsed_ms: parsed(RETRY_MAX_ELAPSED_MS_ENV_VAR)
                .unwrap_or(defaults.max_elapsed_ms),
        };

        Self {
            db_path,
            pacing: Pacing {
                delay: Duration::from_millis(delay_ms),
                retry,
            },
            max_games,
        }
    }
}

/// `<data dir>/nhl-stats/nhl_stats.db`, or the working directory when the
/// platform has no data dir.
pub fn default_db_path() -> PathBuf {
    data_dir()
        .map(|dir| dir.join("nhl-stats").join(DB_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DB_FILE_NAME))
}
