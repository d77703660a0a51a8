//! Fetch one scoreboard page and upsert its games.

use crate::{
    cli::types::time::{Season, Week},
    config::DatabaseUrl,
    espn::{games::extract_games, http::ScoreboardClient},
    storage::NflDatabase,
    NflError, Result,
};
use std::fmt;
use tracing::{debug, warn};

/// What happened to one season/week fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekOutcome {
    /// `games` rows were inserted or updated.
    Upserted { games: usize },
    /// The scoreboard had no games; nothing was written.
    NoGames,
    /// The scoreboard answered with a non-success status; nothing was written.
    FetchFailed { status: u16 },
    /// Request, parse or write failed; nothing was written.
    Failed { reason: String },
}

impl WeekOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(
            self,
            WeekOutcome::FetchFailed { .. } | WeekOutcome::Failed { .. }
        )
    }

    pub fn games(&self) -> usize {
        match self {
            WeekOutcome::Upserted { games } => *games,
            _ => 0,
        }
    }
}

impl fmt::Display for WeekOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekOutcome::Upserted { games } => write!(f, "Inserted/updated {} games", games),
            WeekOutcome::NoGames => write!(f, "No games found"),
            WeekOutcome::FetchFailed { status } => write!(f, "Failed to fetch games: {}", status),
            WeekOutcome::Failed { reason } => write!(f, "Error populating games: {}", reason),
        }
    }
}

/// Fetch the scoreboard for `season`/`week` and upsert every game in it.
///
/// Never fails: a non-success status is reported as
/// [`WeekOutcome::FetchFailed`] and any other error as
/// [`WeekOutcome::Failed`], so one bad week cannot stop a multi-week run.
/// Games are written in a single transaction, so a failure leaves the
/// database exactly as it was.
pub async fn populate_games(
    client: &ScoreboardClient,
    database_url: &DatabaseUrl,
    season: Season,
    week: Option<Week>,
) -> WeekOutcome {
    match fetch_and_upsert(client, database_url, season, week).await {
        Ok(0) => WeekOutcome::NoGames,
        Ok(games) => WeekOutcome::Upserted { games },
        Err(NflError::UnexpectedStatus { status, url }) => {
            warn!(
                season = season.as_u16(),
                week = week.map(|w| w.as_u16()),
                status,
                %url,
                "scoreboard request failed"
            );
            WeekOutcome::FetchFailed { status }
        }
        Err(e) => {
            warn!(
                season = season.as_u16(),
                week = week.map(|w| w.as_u16()),
                error = %e,
                "failed to populate games"
            );
            WeekOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

async fn fetch_and_upsert(
    client: &ScoreboardClient,
    database_url: &DatabaseUrl,
    season: Season,
    week: Option<Week>,
) -> Result<usize> {
    let scoreboard = client.fetch_scoreboard(season, week).await?;
    let games = extract_games(&scoreboard, season, week)?;
    debug!(
        events = scoreboard.events.len(),
        games = games.len(),
        "parsed scoreboard"
    );

    if games.is_empty() {
        return Ok(0);
    }

    let mut db = NflDatabase::open(database_url)?;
    let count = db.upsert_games(&games)?;
    db.close()?;
    Ok(count)
}
