//! Time-related types for NFL seasons and weeks.

use crate::error::{NflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Last regular-season week fetched when no `--through-week` is given.
pub const DEFAULT_THROUGH_WEEK: u16 = 11;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Weeks `1..=self`, in order.
    pub fn from_first(&self) -> impl Iterator<Item = Week> {
        (1..=self.0).map(Week::new)
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse_and_display() {
        let season: Season = "2024".parse().unwrap();
        assert_eq!(season, Season::new(2024));
        assert_eq!(season.to_string(), "2024");
        assert!("twenty".parse::<Season>().is_err());
    }

    #[test]
    fn test_week_defaults() {
        assert_eq!(Season::default().as_u16(), 2025);
        assert_eq!(Week::default().as_u16(), 1);
    }

    #[test]
    fn test_week_range_from_first() {
        let weeks: Vec<u16> = Week::new(4).from_first().map(|w| w.as_u16()).collect();
        assert_eq!(weeks, vec![1, 2, 3, 4]);

        let weeks: Vec<Week> = Week::new(DEFAULT_THROUGH_WEEK).from_first().collect();
        assert_eq!(weeks.len(), 11);
        assert_eq!(weeks[0], Week::new(1));
        assert_eq!(weeks[10], Week::new(11));

        assert_eq!(Week::new(0).from_first().count(), 0);
    }
}
