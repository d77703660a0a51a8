//! League structure: conferences and divisions.

use crate::error::NflError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conference {
    AFC,
    NFC,
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Conference::AFC => "AFC",
            Conference::NFC => "NFC",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Conference {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AFC" => Ok(Conference::AFC),
            "NFC" => Ok(Conference::NFC),
            _ => Err(NflError::InvalidConference {
                value: s.to_string(),
            }),
        }
    }
}

/// Geographic division within a conference, stored as `East`, `North`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    East,
    North,
    South,
    West,
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Division::East => "East",
            Division::North => "North",
            Division::South => "South",
            Division::West => "West",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Division {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "east" => Ok(Division::East),
            "north" => Ok(Division::North),
            "south" => Ok(Division::South),
            "west" => Ok(Division::West),
            _ => Err(NflError::InvalidDivision {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conference_string_conversion() {
        assert_eq!(Conference::AFC.to_string(), "AFC");
        assert_eq!(Conference::NFC.to_string(), "NFC");
        assert_eq!("nfc".parse::<Conference>().unwrap(), Conference::NFC);
        assert!("XFL".parse::<Conference>().is_err());
    }

    #[test]
    fn test_division_string_conversion() {
        for division in [
            Division::East,
            Division::North,
            Division::South,
            Division::West,
        ] {
            let parsed: Division = division.to_string().parse().unwrap();
            assert_eq!(parsed, division);
        }
        assert_eq!("NORTH".parse::<Division>().unwrap(), Division::North);

        match "Central".parse::<Division>() {
            Err(NflError::InvalidDivision { value }) => assert_eq!(value, "Central"),
            _ => panic!("Expected InvalidDivision error"),
        }
    }
}
