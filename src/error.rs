//! Error types for the Celtics stats CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Team not found in directory: {name}")]
    TeamNotFound { name: String },

    #[error("Invalid season label (expected YYYY-YY): {label}")]
    InvalidSeason { label: String },

    #[error("Stats API response has no result set named {name:?}")]
    MissingResultSet { name: String },

    #[error("Result set is missing column {name:?}")]
    MissingColumn { name: String },

    #[error("Row has a null or mistyped value in column {column:?}")]
    MalformedRow { column: String },

    #[error("Row for game {game_id}, player {player_id} already stored")]
    DuplicateRow { game_id: String, player_id: i64 },

    #[error("Table at {path} uses the legacy schema without team columns; point the store at a new location")]
    LegacySchema { path: String },
}

impl StatsError {
    /// True when the error is the composite-key rejection from `append_rows`.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StatsError::DuplicateRow { .. })
    }
}
