//! Response shapes for the ESPN NFL scoreboard endpoint.
//!
//! Only the fields the populator reads are modelled; everything else in the
//! payload is ignored. Collections default to empty when absent.

use serde::{de::Error, Deserialize, Deserializer, Serialize};


/// ESPN sends scores as strings (`"24"`), occasionally as numbers.
fn de_opt_score<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match raw {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected score string or number, got {other}"
        ))),
    }
}

/// Top-level scoreboard envelope
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScoreboardResponse {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// One game on the scoreboard
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    pub id: String,
    /// ISO-8601 kickoff, e.g. `2025-09-05T00:20Z`
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub competitions: Vec<Competition>,
    #[serde(default)]
    pub week: Option<WeekRef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeekRef {
    pub number: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Competition {
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub status: Option<CompetitionStatus>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Competitor {
    #[serde(rename = "homeAway", default)]
    pub home_away: Option<String>,
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default, deserialize_with = "de_opt_score")]
    pub score: Option<String>,
}

impl Competitor {
    pub fn is_home(&self) -> bool {
        self.home_away.as_deref() == Some("home")
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamRef {
    #[serde(default)]
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompetitionStatus {
    #[serde(rename = "type", default)]
    pub status_type: Option<StatusType>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusType {
    #[serde(default)]
    pub name: Option<String>,
}
