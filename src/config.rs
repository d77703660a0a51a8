//! Runtime configuration resolved once at start-up.
//!
//! The only required value is the database location, read from
//! `DATABASE_URL` (a `.env` file in the working directory is honoured).
//! Everything else has a default so the binary runs with no arguments.

use crate::{
    cli::types::time::{Season, Week, DEFAULT_THROUGH_WEEK},
    error::{NflError, Result},
    espn::http::SCOREBOARD_BASE_URL,
};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Once;

pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
pub const SCOREBOARD_URL_ENV_VAR: &str = "NFL_SCOREBOARD_URL";

static DOTENV: Once = Once::new();

/// Load `.env` exactly once. Safe to call many times.
pub fn init_env() {
    DOTENV.call_once(|| {
        let _ = dotenv::dotenv();
    });
}

/// Get optional env var (None if unset or blank).
fn env_opt(key: &str) -> Option<String> {
    init_env();
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => None,
    }
}

/// SQLite database location.
///
/// Accepts a bare path, `sqlite://path`, `sqlite:path` or `:memory:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseUrl(String);

impl DatabaseUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL scheme, if the value looks like `scheme://...`.
    pub fn scheme(&self) -> Option<&str> {
        let (scheme, _) = self.0.split_once("://")?;
        let mut chars = scheme.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        valid.then_some(scheme)
    }

    /// Reject URLs for other database engines (`postgres://...`) instead of
    /// mistaking them for a file path.
    pub fn validate(&self) -> Result<()> {
        match self.scheme() {
            Some(scheme) if !scheme.eq_ignore_ascii_case("sqlite") => {
                Err(NflError::UnsupportedDatabaseUrl {
                    url: self.0.clone(),
                })
            }
            _ => Ok(()),
        }
    }

    pub fn is_memory(&self) -> bool {
        self.path_str() == ":memory:"
    }

    /// Filesystem path with any `sqlite:` scheme removed.
    pub fn path(&self) -> PathBuf {
        PathBuf::from(self.path_str())
    }

    fn path_str(&self) -> &str {
        let s = self.0.as_str();
        s.strip_prefix("sqlite://")
            .or_else(|| s.strip_prefix("sqlite:"))
            .unwrap_or(s)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatabaseUrl {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Resolve the database location: explicit value first, then `DATABASE_URL`.
///
/// Absence or a non-sqlite URL is fatal; callers propagate the error before
/// touching any table.
pub fn resolve_database_url(database_url: Option<DatabaseUrl>) -> Result<DatabaseUrl> {
    let url = match database_url.filter(|u| !u.as_str().trim().is_empty()) {
        Some(url) => url,
        None => env_opt(DATABASE_URL_ENV_VAR)
            .map(DatabaseUrl::new)
            .ok_or_else(|| NflError::MissingDatabaseUrl {
                env_var: DATABASE_URL_ENV_VAR.to_string(),
            })?,
    };
    url.validate()?;
    Ok(url)
}

/// Everything the driver needs for one run.
#[derive(Debug, Clone)]
pub struct PopulateConfig {
    pub database_url: DatabaseUrl,
    pub season: Season,
    pub through_week: Week,
    pub scoreboard_base_url: String,
}

impl PopulateConfig {
    /// Build the run configuration, failing fast when no database is configured.
    pub fn resolve(
        database_url: Option<DatabaseUrl>,
        season: Season,
        through_week: Week,
    ) -> Result<Self> {
        let database_url = resolve_database_url(database_url)?;
        let scoreboard_base_url =
            env_opt(SCOREBOARD_URL_ENV_VAR).unwrap_or_else(|| SCOREBOARD_BASE_URL.to_string());

        Ok(Self {
            database_url,
            season,
            through_week,
            scoreboard_base_url,
        })
    }

    /// Defaults for season and week range, database from the environment.
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            None,
            Season::default(),
            Week::new(DEFAULT_THROUGH_WEEK),
        )
    }
}
