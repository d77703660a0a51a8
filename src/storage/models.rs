//! Data models for the storage layer

use crate::cli::types::{
    ids::GameId,
    league::{Conference, Division},
    time::{Season, Week},
};
use serde::{Deserialize, Serialize};

/// One row of the embedded team reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamSeed {
    pub name: &'static str,
    pub abbr: &'static str,
    pub conference: Conference,
    pub division: Division,
}

/// Team as stored in `nfl_teams`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub abbr: String,
    pub conference: Option<Conference>,
    pub division: Option<Division>,
}

impl From<&TeamSeed> for Team {
    fn from(seed: &TeamSeed) -> Self {
        Self {
            name: seed.name.to_string(),
            abbr: seed.abbr.to_string(),
            conference: Some(seed.conference),
            division: Some(seed.division),
        }
    }
}

/// Game result keyed by the ESPN event id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: GameId,
    pub season: Season,
    pub week: Week,
    /// `YYYY-MM-DD`
    pub game_date: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_score: i64,
    pub away_score: i64,
    pub status: String,
}
