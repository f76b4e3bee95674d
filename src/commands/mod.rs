//! Command implementations for the nhl-stats CLI

pub mod common;
pub mod export;
pub mod game_stats;
pub mod player_ids;
pub mod player_lookup;
pub mod player_stats;
pub mod query;
pub mod shift_data;
pub mod team_stats;
