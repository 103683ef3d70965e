//! HTTP client for the NBA stats API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONNECTION, REFERER, USER_AGENT};
use reqwest::Client;

use crate::cli::types::{GameId, SeasonLabel, TeamId};
use crate::error::Result;
use crate::nba::types::StatsEnvelope;

/// Base path for the public stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Header set the stats API expects; requests without it are rejected.
pub fn stats_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        ),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(REFERER, HeaderValue::from_static("https://stats.nba.com/"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    headers
}

/// Thin wrapper over `reqwest::Client` with an injectable base URL so tests
/// can point it at a mock server.
#[derive(Debug, Clone)]
pub struct NbaClient {
    client: Client,
    base_url: String,
}

impl NbaClient {
    pub fn new() -> Self {
        Self::with_base_url(STATS_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch a team's game log for one season.
    pub async fn team_game_log(
        &self,
        team_id: TeamId,
        season: SeasonLabel,
    ) -> Result<StatsEnvelope> {
        let url = format!("{}/teamgamelog", self.base_url);
        let params = [
            ("TeamID", team_id.to_string()),
            ("Season", season.to_string()),
            ("SeasonType", "Regular Season".to_string()),
        ];

        let envelope = self
            .client
            .get(&url)
            .headers(stats_headers())
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsEnvelope>()
            .await?;

        Ok(envelope)
    }

    /// Fetch the traditional box score for one game.
    pub async fn box_score(&self, game_id: &GameId) -> Result<StatsEnvelope> {
        let url = format!("{}/boxscoretraditionalv2", self.base_url);
        let params = [
            ("GameID", game_id.to_string()),
            ("StartPeriod", "0".to_string()),
            ("EndPeriod", "10".to_string()),
            ("StartRange", "0".to_string()),
            ("EndRange", "0".to_string()),
            ("RangeType", "0".to_string()),
        ];

        let envelope = self
            .client
            .get(&url)
            .headers(stats_headers())
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsEnvelope>()
            .await?;

        Ok(envelope)
    }
}

impl Default for NbaClient {
    fn default() -> Self {
        Self::new()
    }
}
