//! Season identifiers.

use crate::error::{NhlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An NHL season, identified by the year it starts in.
///
/// The API spells a season as the two years glued together (`20192020`);
/// the end year is always derived, never stored.
///
/// # Examples
///
/// ```rust
/// use nhl_stats::SeasonId;
///
/// let season: SeasonId = "20192020".parse().unwrap();
/// assert_eq!(season.start_year(), 2019);
/// assert_eq!(season.end_year(), 2020);
/// assert_eq!(season.to_string(), "20192020");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeasonId(u16);

impl SeasonId {
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }

    pub fn end_year(&self) -> u16 {
        self.0 + 1
    }

    /// The 8-digit numeric form, e.g. `20192020`.
    pub fn code(&self) -> u32 {
        u32::from(self.0) * 10_000 + u32::from(self.end_year())
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.end_year())
    }
}

impl FromStr for SeasonId {
    type Err = NhlError;

    /// Accepts either `YYYY` (the start year) or `YYYYYYYY`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<SeasonBound>()? {
            SeasonBound::Year(year) => Ok(Self(year)),
            SeasonBound::Season(season) => Ok(season),
        }
    }
}

/// One end of a season range, in whichever shape the user typed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonBound {
    /// A bare start year, `2019`.
    Year(u16),
    /// A full season identifier, `20192020`.
    Season(SeasonId),
}

impl SeasonBound {
    pub fn start_year(&self) -> u16 {
        match self {
            SeasonBound::Year(year) => *year,
            SeasonBound::Season(season) => season.start_year(),
        }
    }

    pub fn is_full_season(&self) -> bool {
        matches!(self, SeasonBound::Season(_))
    }
}

impl fmt::Display for SeasonBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonBound::Year(year) => write!(f, "{}", year),
            SeasonBound::Season(season) => write!(f, "{}", season),
        }
    }
}

impl From<u16> for SeasonBound {
    fn from(year: u16) -> Self {
        SeasonBound::Year(year)
    }
}

impl From<SeasonId> for SeasonBound {
    fn from(season: SeasonId) -> Self {
        SeasonBound::Season(season)
    }
}

impl FromStr for SeasonBound {
    type Err = NhlError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || NhlError::InvalidSeason {
            value: s.to_string(),
        };
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        match s.len() {
            4 => Ok(SeasonBound::Year(s.parse()?)),
            8 => {
                let start: u16 = s[..4].parse()?;
                let end: u16 = s[4..].parse()?;
                if start.checked_add(1) != Some(end) {
                    return Err(invalid());
                }
                Ok(SeasonBound::Season(SeasonId(start)))
            }
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_display_and_code() {
        let season = SeasonId::new(2010);
        assert_eq!(season.to_string(), "20102011");
        assert_eq!(season.code(), 20102011);
        assert_eq!(season.end_year(), 2011);
    }

    #[test]
    fn test_parse_bounds() {
        assert_eq!("2015".parse::<SeasonBound>().unwrap(), SeasonBound::Year(2015));
        assert_eq!(
            "20152016".parse::<SeasonBound>().unwrap(),
            SeasonBound::Season(SeasonId::new(2015))
        );
        assert!("20152017".parse::<SeasonBound>().is_err());
        assert!("215".parse::<SeasonBound>().is_err());
        assert!("20x5".parse::<SeasonBound>().is_err());
    }

    #[test]
    fn test_season_id_from_either_shape() {
        assert_eq!("2019".parse::<SeasonId>().unwrap(), SeasonId::new(2019));
        assert_eq!("20192020".parse::<SeasonId>().unwrap(), SeasonId::new(2019));
    }
}
