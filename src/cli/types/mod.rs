//! Type-safe wrappers and enums for NHL API identifiers.

pub mod game;
pub mod ids;
pub mod season;

pub use game::{GameId, GameNumber, GameType};
pub use ids::{PlayerId, TeamId};
pub use season::{SeasonBound, SeasonId};
