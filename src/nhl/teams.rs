//! Franchise ids used by the NHL stats API.

use crate::cli::types::TeamId;

/// Franchises that have played in recent seasons.
pub const ACTIVE_TEAMS: &[(u16, &str)] = &[
    (1, "New Jersey Devils"),
    (2, "New York Islanders"),
    (3, "New York Rangers"),
    (4, "Philadelphia Flyers"),
    (5, "Pittsburgh Penguins"),
    (6, "Boston Bruins"),
    (7, "Buffalo Sabres"),
    (8, "Montréal Canadiens"),
    (9, "Ottawa Senators"),
    (10, "Toronto Maple Leafs"),
    (12, "Carolina Hurricanes"),
    (13, "Florida Panthers"),
    (14, "Tampa Bay Lightning"),
    (15, "Washington Capitals"),
    (16, "Chicago Blackhawks"),
    (17, "Detroit Red Wings"),
    (18, "Nashville Predators"),
    (19, "St. Louis Blues"),
    (20, "Calgary Flames"),
    (21, "Colorado Avalanche"),
    (22, "Edmonton Oilers"),
    (23, "Vancouver Canucks"),
    (24, "Anaheim Ducks"),
    (25, "Dallas Stars"),
    (26, "Los Angeles Kings"),
    (28, "San Jose Sharks"),
    (29, "Columbus Blue Jackets"),
    (30, "Minnesota Wild"),
    (52, "Winnipeg Jets"),
    (53, "Arizona Coyotes"),
    (54, "Vegas Golden Knights"),
    (55, "Seattle Kraken"),
];

/// Relocated or renamed franchises, still addressable for older seasons.
pub const FORMER_TEAMS: &[(u16, &str)] = &[
    (11, "Atlanta Thrashers"),
    (27, "Phoenix Coyotes"),
    (31, "Minnesota North Stars"),
    (32, "Quebec Nordiques"),
    (33, "Winnipeg Jets (1979)"),
    (34, "Hartford Whalers"),
];

/// A franchise id and display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: &'static str,
}

fn to_teams<'a>(pairs: &'a [(u16, &'static str)]) -> impl Iterator<Item = Team> + 'a {
    pairs.iter().map(|(id, name)| Team {
        id: TeamId::new(*id),
        name: *name,
    })
}

/// Franchises of recent seasons.
pub fn active_teams() -> Vec<Team> {
    to_teams(ACTIVE_TEAMS).collect()
}

/// Every known franchise, sorted by id. Teams missing from a season simply
/// return no data for it.
pub fn all_teams() -> Vec<Team> {
    let mut teams: Vec<Team> = to_teams(ACTIVE_TEAMS).chain(to_teams(FORMER_TEAMS)).collect();
    teams.sort_by_key(|t| t.id);
    teams
}

pub fn team_name(id: TeamId) -> Option<&'static str> {
    ACTIVE_TEAMS
        .iter()
        .chain(FORMER_TEAMS)
        .find(|(team_id, _)| *team_id == id.as_u16())
        .map(|(_, name)| *name)
}
