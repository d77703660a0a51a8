//! Command implementations for the NFL data populator

pub mod create_tables;
pub mod populate_all;
pub mod populate_games;
pub mod populate_teams;


pub use create_tables::create_tables;
pub use populate_all::populate_all;
pub use populate_games::{populate_games, WeekOutcome};
pub use populate_teams::populate_teams;
