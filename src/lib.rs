//! NFL Data Populator Library
//!
//! Populates a SQLite database with NFL reference and results data from
//! ESPN's public scoreboard API.
//!
//! ## Features
//!
//! - **Schema Creation**: Idempotent creation of team, game, player and
//!   player statistics tables
//! - **Team Seeding**: The 32 league teams, inserted once by abbreviation
//! - **Game Results**: Weekly scoreboard fetches upserted by ESPN event id,
//!   refreshing scores and status on every run
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nfl_populate::{
//!     commands::populate_all, config::PopulateConfig, espn::http::ScoreboardClient,
//! };
//!
//! # async fn example() -> nfl_populate::Result<()> {
//! let config = PopulateConfig::from_env()?;
//! let client = ScoreboardClient::with_base_url(config.scoreboard_base_url.clone())?;
//! for (week, outcome) in populate_all(&config, &client).await? {
//!     println!("week {week}: {outcome}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the populator at a SQLite database:
//! ```bash
//! export DATABASE_URL=sqlite://nfl.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod espn;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    ids::GameId,
    league::{Conference, Division},
    time::{Season, Week},
};
pub use config::{DatabaseUrl, PopulateConfig, DATABASE_URL_ENV_VAR};
pub use error::{NflError, Result};
