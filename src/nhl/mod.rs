//! NHL API surface: endpoints, the fetch client, and record extraction.

pub mod endpoints;
pub mod extract;
pub mod http;
pub mod registry;
pub mod teams;

pub use endpoints::{ApiBases, Endpoint, PlayerStatKind};
pub use extract::{extract, ExtractContext, GameRecords, StatKind, TeamSeasonRecords};
pub use http::{JsonSource, NhlClient};
pub use registry::PlayerRegistry;
pub use teams::{active_teams, all_teams, team_name, Team};
