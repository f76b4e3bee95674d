//! Game identifiers: game type, game number and the composed game id.

use super::season::SeasonId;
use crate::error::{NhlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Game type, encoded by the API as a two-digit code inside the game id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum GameType {
    /// `01`
    Preseason,
    /// `02`
    RegularSeason,
    /// `03`
    Playoffs,
    /// `04`
    AllStar,
}

impl GameType {
    pub fn code(&self) -> &'static str {
        match self {
            GameType::Preseason => "01",
            GameType::RegularSeason => "02",
            GameType::Playoffs => "03",
            GameType::AllStar => "04",
        }
    }

    /// Display label written into the `Game Type` column.
    pub fn label(&self) -> &'static str {
        match self {
            GameType::Preseason => "Preseason",
            GameType::RegularSeason => "Regular Season",
            GameType::Playoffs => "Playoffs",
            GameType::AllStar => "All Star",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "01" => Ok(GameType::Preseason),
            "02" => Ok(GameType::RegularSeason),
            "03" => Ok(GameType::Playoffs),
            "04" => Ok(GameType::AllStar),
            _ => Err(NhlError::InvalidGameType {
                value: code.to_string(),
            }),
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Game number within a season and game type. Displayed zero-padded (`0001`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameNumber(pub u16);

impl GameNumber {
    pub fn new(number: u16) -> Self {
        Self(number)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for GameNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Full game identifier, e.g. `2019020001`.
///
/// ```rust
/// use nhl_stats::{GameId, GameNumber, GameType, SeasonId};
///
/// let id = GameId::new(SeasonId::new(2019), GameType::RegularSeason, GameNumber::new(1));
/// assert_eq!(id.to_string(), "2019020001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId {
    pub season: SeasonId,
    pub game_type: GameType,
    pub number: GameNumber,
}

impl GameId {
    pub fn new(season: SeasonId, game_type: GameType, number: GameNumber) -> Self {
        Self {
            season,
            game_type,
            number,
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.season.start_year(),
            self.game_type.code(),
            self.number
        )
    }
}

impl FromStr for GameId {
    type Err = NhlError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() != 10 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(NhlError::InvalidGameType {
                value: s.to_string(),
            });
        }
        let season = SeasonId::new(s[..4].parse()?);
        let game_type = GameType::from_code(&s[4..6])?;
        let number = GameNumber::new(s[6..].parse()?);
        Ok(Self::new(season, game_type, number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_number_padding() {
        assert_eq!(GameNumber::new(7).to_string(), "0007");
        assert_eq!(GameNumber::new(1271).to_string(), "1271");
    }

    #[test]
    fn test_game_id_round_trip() {
        let id: GameId = "2015030412".parse().unwrap();
        assert_eq!(id.season, SeasonId::new(2015));
        assert_eq!(id.game_type, GameType::Playoffs);
        assert_eq!(id.number, GameNumber::new(412));
        assert_eq!(id.to_string(), "2015030412");
    }

    #[test]
    fn test_game_type_codes() {
        assert_eq!(GameType::from_code("02").unwrap(), GameType::RegularSeason);
        assert_eq!(GameType::RegularSeason.label(), "Regular Season");
        assert!(GameType::from_code("05").is_err());
    }
}
