//! Type-safe wrappers and enums for NFL data.

pub mod ids;
pub mod league;
pub mod time;
