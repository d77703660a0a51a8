//! ESPN scoreboard access: HTTP client, response types and game extraction.

pub mod games;
pub mod http;
pub mod types;
