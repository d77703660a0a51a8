//! CLI argument definitions and parsing.

pub mod types;

use crate::config::DatabaseUrl;
use clap::Parser;
use types::time::{Season, Week, DEFAULT_THROUGH_WEEK};

/// Create the NFL tables, seed the 32 teams, then fetch and upsert the
/// scoreboard for every week from 1 through `--through-week`.
///
/// Running with no arguments populates the 2025 season through week 11.
#[derive(Debug, Parser)]
#[clap(name = "nfl-populate", about = "Populate a database with NFL teams and games")]
pub struct NflPopulate {
    /// Season year (e.g. 2025).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Fetch weeks 1 through this week (inclusive).
    #[clap(long, short = 'w', default_value_t = Week::new(DEFAULT_THROUGH_WEEK))]
    pub through_week: Week,

    /// Database location (or set `DATABASE_URL` env var).
    #[clap(long)]
    pub database_url: Option<DatabaseUrl>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let args = NflPopulate::parse_from(["nfl-populate"]);
        assert_eq!(args.season, Season::new(2025));
        assert_eq!(args.through_week, Week::new(11));
        assert!(args.database_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = NflPopulate::parse_from([
            "nfl-populate",
            "--season",
            "2024",
            "-w",
            "3",
            "--database-url",
            "sqlite://nfl.db",
        ]);
        assert_eq!(args.season, Season::new(2024));
        assert_eq!(args.through_week, Week::new(3));
        assert_eq!(args.database_url.unwrap().as_str(), "sqlite://nfl.db");
    }

    #[test]
    fn test_invalid_week_rejected() {
        let result = NflPopulate::try_parse_from(["nfl-populate", "--through-week", "eleven"]);
        assert!(result.is_err());
    }
}
