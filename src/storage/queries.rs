//! Basic database query operations

use super::{
    models::*,
    schema::NflDatabase,
    upsert::{GAME_UPSERT, TEAM_UPSERT},
};
use crate::cli::types::{
    ids::GameId,
    league::{Conference, Division},
    time::{Season, Week},
};
use crate::error::Result;
use rusqlite::{params, OptionalExtension, Row};

impl NflDatabase {
    /// Insert the given teams, skipping any abbreviation already present.
    ///
    /// Returns the number of rows actually inserted, so a repeat run over an
    /// already-seeded table reports 0.
    pub fn seed_teams(&mut self, teams: &[TeamSeed]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(&TEAM_UPSERT.insert_sql())?;
            for team in teams {
                inserted += stmt.execute(params![
                    team.name,
                    team.abbr,
                    team.conference.to_string(),
                    team.division.to_string(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    /// Upsert a batch of games in one transaction.
    ///
    /// New games are inserted in full. Existing games (same `game_id`) only
    /// get their scores, status and `updated_at` rewritten. Returns the
    /// number of games in the batch.
    pub fn upsert_games(&mut self, games: &[Game]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(&GAME_UPSERT.insert_sql())?;
            for game in games {
                stmt.execute(params![
                    game.game_id,
                    game.season.as_u16(),
                    game.week.as_u16(),
                    game.game_date,
                    game.home_team,
                    game.away_team,
                    game.home_score,
                    game.away_score,
                    game.status,
                ])?;
            }
        }
        tx.commit()?;
        Ok(games.len())
    }

    pub fn team_count(&self) -> Result<usize> {
        self.count("SELECT COUNT(*) FROM nfl_teams")
    }

    pub fn game_count(&self) -> Result<usize> {
        self.count("SELECT COUNT(*) FROM nfl_games")
    }

    fn count(&self, sql: &str) -> Result<usize> {
        let n: usize = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(n)
    }

    /// Look up a team by abbreviation
    pub fn get_team(&self, abbr: &str) -> Result<Option<Team>> {
        let row = self
            .conn
            .query_row(
                "SELECT team_name, team_abbr, conference, division
                 FROM nfl_teams WHERE team_abbr = ?",
                params![abbr],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, Option<String>>(3)?,
                    ))
                },
            )
            .optional()?;

        let Some((name, abbr, conference, division)) = row else {
            return Ok(None);
        };

        Ok(Some(Team {
            name,
            abbr,
            conference: conference
                .map(|c| c.parse::<Conference>())
                .transpose()?,
            division: division.map(|d| d.parse::<Division>()).transpose()?,
        }))
    }

    /// Look up a game by its ESPN event id
    pub fn get_game(&self, game_id: &GameId) -> Result<Option<Game>> {
        let game = self
            .conn
            .query_row(
                "SELECT game_id, season, week, game_date, home_team, away_team,
                        home_score, away_score, status
                 FROM nfl_games WHERE game_id = ?",
                params![game_id],
                row_to_game,
            )
            .optional()?;
        Ok(game)
    }

    /// All games for a season/week, ordered by date then id
    pub fn games_for_week(&self, season: Season, week: Week) -> Result<Vec<Game>> {
        let mut stmt = self.conn.prepare(
            "SELECT game_id, season, week, game_date, home_team, away_team,
                    home_score, away_score, status
             FROM nfl_games
             WHERE season = ? AND week = ?
             ORDER BY game_date, game_id",
        )?;

        let rows = stmt.query_map(params![season.as_u16(), week.as_u16()], row_to_game)?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }
}

fn row_to_game(row: &Row) -> rusqlite::Result<Game> {
    Ok(Game {
        game_id: row.get(0)?,
        season: Season::new(row.get(1)?),
        week: Week::new(row.get(2)?),
        game_date: row.get(3)?,
        home_team: row.get(4)?,
        away_team: row.get(5)?,
        home_score: row.get::<_, Option<i64>>(6)?.unwrap_or(0),
        away_score: row.get::<_, Option<i64>>(7)?.unwrap_or(0),
        status: row.get::<_, Option<String>>(8)?.unwrap_or_default(),
    })
}
