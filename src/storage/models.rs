//! Data models for the storage layer

use crate::cli::types::{GameId, PlayerId, TeamId};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One player's statistical line for one game.
///
/// `(game_id, player_id)` is the composite identity; the store enforces it
/// as the primary key. Stat fields are optional because players listed on
/// the box score who did not play carry nulls across the board, and the
/// shooting percentages are null whenever the attempt count is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStatRow {
    pub game_id: GameId,
    pub team_id: TeamId,
    pub team_abbreviation: String,
    pub team_city: String,
    pub player_id: PlayerId,
    pub player_name: String,
    /// Minutes played as reported, e.g. `"34:12"`; `None` for DNP.
    pub minutes: Option<String>,
    pub fgm: Option<i64>,
    pub fga: Option<i64>,
    pub fg_pct: Option<f64>,
    pub fg3m: Option<i64>,
    pub fg3a: Option<i64>,
    pub fg3_pct: Option<f64>,
    pub ftm: Option<i64>,
    pub fta: Option<i64>,
    pub ft_pct: Option<f64>,
    pub reb: Option<i64>,
    pub ast: Option<i64>,
    pub stl: Option<i64>,
    pub blk: Option<i64>,
    pub pts: Option<i64>,
    pub plus_minus: Option<i64>,
    /// When this row was fetched, not when the game was played.
    pub captured_at: DateTime<Local>,
}

/// Per-player averages backing the scoring scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAverages {
    pub player_name: String,
    pub avg_points: f64,
    pub avg_rebounds: f64,
    pub avg_assists: f64,
}

/// Per-player rebounding totals backing the top-10 bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReboundTotals {
    pub player_name: String,
    pub total_rebounds: i64,
    pub games_played: i64,
    pub avg_rebounds: f64,
}
