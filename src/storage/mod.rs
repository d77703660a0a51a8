//! Storage layer for the NFL data populator
//!
//! This module provides a thin abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `teams`: The embedded team reference table
//! - `upsert`: Named conflict policies for bulk inserts
//! - `queries`: Seeding, upserts and lookups

pub mod models;
pub mod queries;
pub mod schema;
pub mod teams;
pub mod upsert;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::NflDatabase;
pub use teams::NFL_TEAMS;
pub use upsert::{OnConflict, UpsertPolicy, GAME_UPSERT, TEAM_UPSERT};
