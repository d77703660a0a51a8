//! Turn a scoreboard response into game rows.

use crate::cli::types::{
    ids::GameId,
    time::{Season, Week},
};
use crate::error::{NflError, Result};
use crate::espn::types::{Competition, Event, ScoreboardResponse};
use crate::storage::Game;


/// Status stored when ESPN omits `competitions[0].status.type.name`.
pub const DEFAULT_STATUS: &str = "scheduled";

/// Extract every game from `response`.
///
/// Events without a competition are skipped. A score that is present but not
/// an integer fails the whole response, so a batch is written completely or
/// not at all.
pub fn extract_games(
    response: &ScoreboardResponse,
    season: Season,
    week: Option<Week>,
) -> Result<Vec<Game>> {
    let mut games = Vec::with_capacity(response.events.len());
    for event in &response.events {
        if let Some(game) = extract_game(event, season, week)? {
            games.push(game);
        }
    }
    Ok(games)
}

fn extract_game(event: &Event, season: Season, week: Option<Week>) -> Result<Option<Game>> {
    let Some(competition) = event.competitions.first() else {
        return Ok(None);
    };

    let mut home_team = None;
    let mut away_team = None;
    let mut home_score = 0;
    let mut away_score = 0;

    for competitor in &competition.competitors {
        let abbr = competitor
            .team
            .as_ref()
            .and_then(|t| t.abbreviation.clone());
        let score = parse_score(competitor.score.as_deref())?;
        if competitor.is_home() {
            home_team = abbr;
            home_score = score;
        } else {
            away_team = abbr;
            away_score = score;
        }
    }

    let week = week
        .or_else(|| event.week.as_ref().and_then(|w| w.number).map(Week::new))
        .unwrap_or_default();

    Ok(Some(Game {
        game_id: GameId::new(event.id.clone()),
        season,
        week,
        game_date: game_date(event.date.as_deref()),
        home_team,
        away_team,
        home_score,
        away_score,
        status: status_name(competition),
    }))
}

/// Date portion of an ISO timestamp; `None` when absent or blank.
pub fn game_date(timestamp: Option<&str>) -> Option<String> {
    let date = timestamp?.split('T').next()?.trim();
    if date.is_empty() {
        None
    } else {
        Some(date.to_string())
    }
}

/// Integer score, 0 when absent.
pub fn parse_score(raw: Option<&str>) -> Result<i64> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(s) => s.parse::<i64>().map_err(|_| NflError::InvalidScore {
            value: s.to_string(),
        }),
    }
}

fn status_name(competition: &Competition) -> String {
    competition
        .status
        .as_ref()
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.name.clone())
        .unwrap_or_else(|| DEFAULT_STATUS.to_string())
}
