//! NHL Stats Scraper Library
//!
//! Fetches team, player, game and shift data from the public NHL stats API,
//! flattens each JSON document into records, normalizes column names and
//! order, and merges the result into a local SQLite store without
//! duplicating rows.
//!
//! ## Features
//!
//! - **Team Season Stats**: raw values and league ranks per team and season
//! - **Player Season Stats**: home/away, situational and full-season splits
//! - **Game Stats**: play-by-play events plus team and player box scores
//! - **Shift Charts**: every player shift of every game
//! - **Idempotent Export**: re-running a scrape never duplicates rows
//! - **Workbook Export**: stored tables written to an .xlsx file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nhl_stats::{
//!     commands::{common::CommandContext, team_stats::scrape_team_stats},
//!     cli::SeasonRangeArgs,
//!     config::Overrides,
//!     nhl::{all_teams, NhlClient},
//!     SeasonBound,
//! };
//!
//! # async fn example() -> nhl_stats::Result<()> {
//! let mut ctx = CommandContext::new(&Overrides::default())?;
//! let range = SeasonRangeArgs {
//!     start: SeasonBound::Year(2015),
//!     end: Some(SeasonBound::Year(2019)),
//! };
//! let client = NhlClient::new()?;
//! scrape_team_stats(&client, &mut ctx, &range, &all_teams()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NHL_STATS_DB=~/hockey/nhl_stats.db
//! export NHL_STATS_DELAY_MS=500
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod nhl;
pub mod scrape;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GameId, GameNumber, GameType, PlayerId, SeasonBound, SeasonId, TeamId};
pub use core::{FlatRecord, Scalar, Table};
pub use error::{NhlError, Result};
pub use scrape::season_list;
pub use storage::{ExportSummary, Exporter, StatsDatabase};
