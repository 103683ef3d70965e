//! Celtics Stats CLI Library
//!
//! Scrapes Boston Celtics box-score statistics from the public NBA stats
//! API, persists them into a local SQLite table keyed by
//! `(GAME_ID, PLAYER_ID)`, and renders two static HTML charts from the
//! stored rows.
//!
//! ## Pipeline
//!
//! - **Scraping**: [`scraper::TeamScraper`] resolves the team once from the
//!   static directory and fetches game logs and box scores, pacing each
//!   fetch to respect the provider's rate limit
//! - **Shaping**: [`shape::shape_box_score`] projects raw box scores to the
//!   fixed column set and stamps the capture time
//! - **Aggregation**: [`scraper::collect_season`] walks a season's games
//!   sequentially, skipping failed games instead of aborting
//! - **Storage**: [`storage::StatsDatabase`] appends batches atomically and
//!   rejects duplicate `(game, player)` pairs
//! - **Reporting**: [`report`] renders the scoring and rebounding charts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use celtics_stats::{
//!     cli::types::SeasonLabel,
//!     scraper::{collect_season, TeamScraper},
//!     storage::StatsDatabase,
//! };
//!
//! # async fn example() -> celtics_stats::Result<()> {
//! let scraper = TeamScraper::new(celtics_stats::TEAM_NAME)?;
//! let rows = collect_season(&scraper, SeasonLabel::current(), false).await?;
//!
//! let mut db = StatsDatabase::open("data/celtics.db")?;
//! db.append_rows(&rows)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod nba;
pub mod report;
pub mod scraper;
pub mod shape;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GameId, PlayerId, SeasonLabel, TeamId};
pub use error::{Result, StatsError};
pub use storage::{GameStatRow, StatsDatabase};

/// The one team this system scrapes.
pub const TEAM_NAME: &str = "Boston Celtics";
