//! Error types for the NFL data populator

use thiserror::Error;


pub type Result<T> = std::result::Result<T, NflError>;

#[derive(Error, Debug)]
pub enum NflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{env_var} environment variable not set")]
    MissingDatabaseUrl { env_var: String },

    #[error("Unsupported database URL {url}: only sqlite paths are supported")]
    UnsupportedDatabaseUrl { url: String },

    #[error("Scoreboard request to {url} returned status {status}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Invalid score value: {value}")]
    InvalidScore { value: String },

    #[error("Invalid conference: {value}")]
    InvalidConference { value: String },

    #[error("Invalid division: {value}")]
    InvalidDivision { value: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}
