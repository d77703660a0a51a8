//! HTTP client for the ESPN NFL scoreboard

use crate::cli::types::time::{Season, Week};
use crate::error::{NflError, Result};
use crate::espn::types::ScoreboardResponse;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use tracing::debug;


/// Base path for the ESPN site API, NFL section.
pub const SCOREBOARD_BASE_URL: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl";

/// ESPN `seasontype` for the regular season.
pub const REGULAR_SEASON: u8 = 2;

/// Query parameters for one scoreboard page.
///
/// With a week, asks for that regular-season week; without one, only the
/// season is sent and ESPN picks its current week.
pub fn scoreboard_query(season: Season, week: Option<Week>) -> Vec<(&'static str, String)> {
    let mut params = vec![("dates", season.to_string())];
    if let Some(w) = week {
        params.push(("seasontype", REGULAR_SEASON.to_string()));
        params.push(("week", w.to_string()));
    }
    params
}

/// Scoreboard API client. One GET per call: no retries, no pagination.
#[derive(Debug, Clone)]
pub struct ScoreboardClient {
    client: Client,
    base_url: String,
}

impl ScoreboardClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(SCOREBOARD_BASE_URL)
    }

    /// Point the client at another host (mirrors, mock servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent("nfl-populate/0.1")
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn scoreboard_url(&self) -> String {
        format!("{}/scoreboard", self.base_url)
    }

    /// Fetch one scoreboard page for `season`/`week`.
    ///
    /// A non-success status is returned as [`NflError::UnexpectedStatus`]
    /// without reading the body.
    pub async fn fetch_scoreboard(
        &self,
        season: Season,
        week: Option<Week>,
    ) -> Result<ScoreboardResponse> {
        let request = self
            .client
            .get(self.scoreboard_url())
            .query(&scoreboard_query(season, week))
            .build()?;
        let url = request.url().to_string();
        debug!(%url, "fetching scoreboard");

        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NflError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let scoreboard = serde_json::from_str::<ScoreboardResponse>(&body)?;
        Ok(scoreboard)
    }
}
