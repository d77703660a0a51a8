//! Database schema and connection management

use crate::config::{resolve_database_url, DatabaseUrl};
use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

const CREATE_TEAMS: &str = "CREATE TABLE IF NOT EXISTS nfl_teams (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    team_name VARCHAR(100) NOT NULL,
    team_abbr VARCHAR(10) NOT NULL UNIQUE,
    conference VARCHAR(10),
    division VARCHAR(20),
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_GAMES: &str = "CREATE TABLE IF NOT EXISTS nfl_games (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    game_id VARCHAR(50) UNIQUE,
    season INTEGER,
    week INTEGER,
    game_date DATE,
    home_team VARCHAR(10),
    away_team VARCHAR(10),
    home_score INTEGER,
    away_score INTEGER,
    status VARCHAR(20),
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_PLAYERS: &str = "CREATE TABLE IF NOT EXISTS nfl_players (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    player_id VARCHAR(50) UNIQUE,
    player_name VARCHAR(100) NOT NULL,
    team VARCHAR(10),
    position VARCHAR(10),
    jersey_number INTEGER,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_PLAYER_STATS: &str = "CREATE TABLE IF NOT EXISTS nfl_player_stats (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    player_id VARCHAR(50),
    game_id VARCHAR(50),
    season INTEGER,
    week INTEGER,
    passing_yards INTEGER DEFAULT 0,
    passing_tds INTEGER DEFAULT 0,
    interceptions INTEGER DEFAULT 0,
    rushing_yards INTEGER DEFAULT 0,
    rushing_tds INTEGER DEFAULT 0,
    receptions INTEGER DEFAULT 0,
    receiving_yards INTEGER DEFAULT 0,
    receiving_tds INTEGER DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (player_id) REFERENCES nfl_players(player_id),
    FOREIGN KEY (game_id) REFERENCES nfl_games(game_id)
)";

/// Tables in creation order; player stats reference players and games.
pub const TABLES: [(&str, &str); 4] = [
    ("nfl_teams", CREATE_TEAMS),
    ("nfl_games", CREATE_GAMES),
    ("nfl_players", CREATE_PLAYERS),
    ("nfl_player_stats", CREATE_PLAYER_STATS),
];

/// A single, caller-owned database connection.
///
/// Every top-level operation opens its own and closes it when done; nothing
/// is pooled or shared.
pub struct NflDatabase {
    pub(crate) conn: Connection,
}

impl NflDatabase {
    /// Open a connection using `DATABASE_URL`.
    pub fn connect() -> Result<Self> {
        let url = resolve_database_url(None)?;
        Self::open(&url)
    }

    /// Open a fresh connection to `url`.
    pub fn open(url: &DatabaseUrl) -> Result<Self> {
        url.validate()?;
        let conn = if url.is_memory() {
            Connection::open_in_memory()?
        } else {
            let path = url.path();
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Connection::open(&path)?
        };
        conn.pragma_update(None, "foreign_keys", "ON")?;
        debug!(database = %url, "opened database connection");
        Ok(Self { conn })
    }

    /// Create an in-memory database (primarily for testing)
    pub fn new_in_memory() -> Result<Self> {
        Self::open(&DatabaseUrl::new(":memory:"))
    }

    /// Close the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }

    /// Create all four tables if they are absent, committing once.
    pub fn initialize_schema(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        for (_, ddl) in TABLES.iter() {
            tx.execute(ddl, [])?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Names of the user tables currently in the database, sorted.
    pub fn table_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }

    /// The stored `CREATE TABLE` text for `table`, if it exists.
    pub fn table_definition(&self, table: &str) -> Result<Option<String>> {
        let sql = self
            .conn
            .query_row(
                "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?",
                params![table],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(sql)
    }
}
