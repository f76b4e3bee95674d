//! Static map from API field names to display column names.

use super::record::FlatRecord;
use std::collections::HashMap;

/// API field name -> display name. Keys not listed pass through unchanged.
pub const FIELD_RENAMES: &[(&str, &str)] = &[
    ("gamesPlayed", "Games Played"),
    ("wins", "Wins"),
    ("losses", "Losses"),
    ("ot", "OTL"),
    ("pts", "Points"),
    ("ptPctg", "Points %"),
    ("goalsPerGame", "Goals Per Game"),
    ("goalsAgainstPerGame", "GA Per Game"),
    ("evGGARatio", "EV GA Ratio"),
    ("powerPlayPercentage", "Powerplay %"),
    ("powerPlayGoals", "Powerplay Goals"),
    ("powerPlayAssists", "Powerplay Assists"),
    ("powerPlayGoalsAgainst", "Powerplay GA"),
    ("powerPlayOpportunities", "Powerplays"),
    ("penaltyKillPercentage", "PK %"),
    ("shotsPerGame", "Shots Per Game"),
    ("shotsAllowed", "Shots Allowed"),
    ("winScoreFirst", "Win % Score First"),
    ("winOppScoreFirst", "Win % Opp Score First"),
    ("winLeadFirstPer", "Win % Lead First"),
    ("winLeadSecondPer", "Win % Lead Second"),
    ("winOutshootOpp", "Win % Outshoot Opp"),
    ("winOutshotByOpp", "Win % Outshot By Opp"),
    ("faceOffsTaken", "Faceoffs"),
    ("faceOffsWon", "Faceoffs Won"),
    ("faceOffsLost", "Faceoffs Lost"),
    ("faceOffWinPercentage", "Faceoff Win %"),
    ("shootingPctg", "Shooting %"),
    ("savePctg", "Save %"),
    ("timeOnIce", "TOI"),
    ("assists", "Assists"),
    ("goals", "Goals"),
    ("pim", "PIM"),
    ("shots", "Shots"),
    ("games", "Games"),
    ("hits", "Hits"),
    ("powerPlayPoints", "Powerplay Points"),
    ("powerPlayTimeOnIce", "Powerplay TOI"),
    ("evenTimeOnIce", "Even Strength TOI"),
    ("penaltyMinutes", "PIMs"),
    ("faceOffPct", "Faceoff %"),
    ("shotPct", "Shot %"),
    ("gameWinningGoals", "GWG"),
    ("overTimeGoals", "OT Goals"),
    ("shortHandedGoals", "Shorthanded Goals"),
    ("shortHandedAssists", "Shorthanded Assists"),
    ("shortHandedPoints", "Shorthanded Points"),
    ("shortHandedTimeOnIce", "SH TOI"),
    ("blocked", "Blocked Shots"),
    ("plusMinus", "Plus Minus"),
    ("points", "Points"),
    ("shifts", "Shifts"),
    ("timeOnIcePerGame", "TOI per Game"),
    ("evenTimeOnIcePerGame", "ES TOI per Game"),
    ("shortHandedTimeOnIcePerGame", "SH TOI per Game"),
    ("powerPlayTimeOnIcePerGame", "Powerplay TOI per Game"),
    ("fullName", "Player Name"),
    ("takeaways", "Takeaways"),
    ("giveaways", "Giveaways"),
    ("link", "API Link"),
    ("shootsCatches", "Shoots (R/L)"),
    ("jerseyNumber", "Jersey Number"),
    ("faceOffWins", "Faceoff Win"),
    ("faceOffTaken", "Faceoff Taken"),
    ("name", "Position"),
    ("firstName", "First Name"),
    ("lastName", "Last Name"),
    ("primaryNumber", "Number"),
    ("birthDate", "Birth Date"),
    ("currentAge", "Age"),
    ("birthCity", "Birth City"),
    ("birthStateProvince", "Birth State/Province"),
    ("birthCountry", "Birth Country"),
    ("nationality", "Nationality"),
    ("height", "Height"),
    ("weight", "Weight"),
    ("active", "Currently Active"),
    ("alternateCaptain", "Alternate Captain"),
    ("captain", "Captain"),
    ("rookie", "Rookie"),
    ("shutouts", "Shutouts"),
    ("ties", "Ties"),
    ("saves", "Saves"),
    ("goalsInFirstPeriod", "First Period Goals"),
    ("goalsInSecondPeriod", "Second Period Goals"),
    ("goalsInThirdPeriod", "Third Period Goals"),
    ("goalsInOvertime", "Overtime Goals"),
    ("goalsTrailingByOne", "Goals Trailing by One"),
    ("goalsTrailingByTwo", "Goals Trailing by Two"),
    ("goalsTrailingByThreePlus", "Goals Trailing by Three +"),
    ("goalsLeadingByOne", "Goals Leading by One"),
    ("goalsLeadingByTwo", "Goals Leading by Two"),
    ("goalsLeadingByThreePlus", "Goals Leading by Three +"),
    ("goalsWhenTied", "Goals When Tied"),
    ("powerPlaySaves", "Power Play Saves"),
    ("shortHandedSaves", "Short Handed Saves"),
    ("evenSaves", "Even Saves"),
    ("powerPlayShots", "Power Play Shots"),
    ("shortHandedShots", "Short Handed Shots"),
    ("evenShots", "Even Shots"),
    ("savePercentage", "Save %"),
    ("goalAgainstAverage", "GAA"),
    ("gamesStarted", "Games Started"),
    ("shotsAgainst", "Shots Against"),
    ("goalsAgainst", "Goals Against"),
    ("powerPlaySavePercentage", "PP Save %"),
    ("evenStrengthSavePercentage", "ES Save %"),
    ("shortHandedSavePercentage", "SH Save %"),
];

/// Lookup over [`FIELD_RENAMES`]. Build once and pass it where it is needed.
#[derive(Debug, Clone)]
pub struct RenameMap {
    map: HashMap<&'static str, &'static str>,
}

impl RenameMap {
    pub fn standard() -> Self {
        Self::from_pairs(FIELD_RENAMES)
    }

    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        Self {
            map: pairs.iter().copied().collect(),
        }
    }

    /// Display name for `key`, or `key` itself when unmapped.
    pub fn rename<'a>(&self, key: &'a str) -> &'a str {
        match self.map.get(key) {
            Some(display) => *display,
            None => key,
        }
    }

    /// Rename every field of a record. When two API names land on the same
    /// display name, the first one seen keeps its value.
    pub fn rename_record(&self, record: &FlatRecord) -> FlatRecord {
        let mut out = FlatRecord::new();
        for (key, value) in record.iter() {
            let renamed = self.rename(key);
            if !out.contains_key(renamed) {
                out.insert(renamed, value.clone());
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for RenameMap {
    fn default() -> Self {
        Self::standard()
    }
}
