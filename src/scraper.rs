//! Team scraper and season aggregation.

use std::time::Duration;

use chrono::Local;

use crate::cli::types::{GameId, SeasonLabel};
use crate::error::{Result, StatsError};
use crate::nba::teams::{find_by_full_name, Team};
use crate::nba::types::cell_str;
use crate::nba::NbaClient;
use crate::shape::shape_box_score;
use crate::storage::models::GameStatRow;

/// Result set names used by the two endpoints.
const GAME_LOG_SET: &str = "TeamGameLog";
const PLAYER_STATS_SET: &str = "PlayerStats";

/// Source of game listings and per-game box scores.
///
/// `TeamScraper` is the real implementation; tests substitute canned data to
/// exercise the aggregation logic without the network.
#[allow(async_fn_in_trait)]
pub trait GameLogSource {
    /// All game ids for the team in `season`, in the provider's order.
    async fn game_ids(&self, season: SeasonLabel) -> Result<Vec<GameId>>;

    /// The team's shaped box-score rows for one game. An empty batch means
    /// the team did not appear in the box score; failures are `Err`, never
    /// an empty batch.
    async fn game_stats(&self, game_id: &GameId) -> Result<Vec<GameStatRow>>;
}

/// Scrapes one team's box scores from the stats API.
///
/// The team id is resolved exactly once at construction from the static
/// directory and never changes afterwards.
#[derive(Debug)]
pub struct TeamScraper {
    client: NbaClient,
    team: &'static Team,
    pacing: Duration,
}

impl TeamScraper {
    /// Resolve `team_name` against the directory and build a scraper with
    /// the default one-second pacing.
    pub fn new(team_name: &str) -> Result<Self> {
        Self::with_client(NbaClient::new(), team_name, Duration::from_secs(1))
    }

    /// Full constructor; tests inject a mock-server client and zero pacing.
    pub fn with_client(client: NbaClient, team_name: &str, pacing: Duration) -> Result<Self> {
        let team = find_by_full_name(team_name)?;
        Ok(Self {
            client,
            team,
            pacing,
        })
    }

    pub fn team(&self) -> &'static Team {
        self.team
    }
}

impl GameLogSource for TeamScraper {
    async fn game_ids(&self, season: SeasonLabel) -> Result<Vec<GameId>> {
        let envelope = self.client.team_game_log(self.team.team_id(), season).await?;
        let log = envelope.result_set(GAME_LOG_SET)?;
        let game_id_col = log.column("Game_ID")?;

        let mut ids = Vec::with_capacity(log.row_set.len());
        for row in &log.row_set {
            let id = cell_str(row, game_id_col).ok_or_else(|| StatsError::MalformedRow {
                column: "Game_ID".to_string(),
            })?;
            ids.push(GameId::from(id));
        }
        Ok(ids)
    }

    async fn game_stats(&self, game_id: &GameId) -> Result<Vec<GameStatRow>> {
        let captured_at = Local::now();
        let envelope = self.client.box_score(game_id).await?;
        let player_stats = envelope.result_set(PLAYER_STATS_SET)?;
        let rows = shape_box_score(player_stats, self.team.team_id(), captured_at)?;

        // Provider rate limit: pause after every successful fetch.
        if !self.pacing.is_zero() {
            tokio::time::sleep(self.pacing).await;
        }

        Ok(rows)
    }
}

/// Fetch box scores for `game_ids` sequentially and concatenate the batches
/// in listing order.
///
/// A failed game is logged to stderr and skipped; it never aborts the rest
/// of the run, and there is no retry within a run.
pub async fn collect_games<S: GameLogSource>(
    source: &S,
    game_ids: &[GameId],
    verbose: bool,
) -> Result<Vec<GameStatRow>> {
    let mut all_stats = Vec::new();
    for game_id in game_ids {
        match source.game_stats(game_id).await {
            Ok(rows) => {
                if verbose {
                    println!("Game {}: {} rows", game_id, rows.len());
                }
                all_stats.extend(rows);
            }
            Err(err) => {
                eprintln!("Error fetching game {}: {}", game_id, err);
            }
        }
    }
    Ok(all_stats)
}

/// List a season's games and aggregate every box score.
///
/// Returns an empty collection when the season has no games or every fetch
/// failed; callers check emptiness before appending.
pub async fn collect_season<S: GameLogSource>(
    source: &S,
    season: SeasonLabel,
    verbose: bool,
) -> Result<Vec<GameStatRow>> {
    let game_ids = source.game_ids(season).await?;
    if verbose {
        println!("Season {}: {} games listed", season, game_ids.len());
    }
    collect_games(source, &game_ids, verbose).await
}
