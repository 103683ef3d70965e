//! Season population with explicit pacing and stored-game skipping.

use std::path::Path;
use std::time::Duration;

use crate::cli::types::{GameId, SeasonLabel};
use crate::nba::NbaClient;
use crate::scraper::{collect_games, GameLogSource, TeamScraper};
use crate::storage::StatsDatabase;
use crate::{Result, TEAM_NAME};

/// Scrape one season into the database, skipping games already stored so a
/// re-run tops up the table instead of tripping the primary key.
pub async fn handle_populate(
    season: SeasonLabel,
    delay_secs: u64,
    db_path: &Path,
    verbose: bool,
) -> Result<()> {
    let scraper = TeamScraper::with_client(
        NbaClient::new(),
        TEAM_NAME,
        Duration::from_secs(delay_secs),
    )?;
    let mut db = StatsDatabase::open(db_path)?;

    let listed = scraper.game_ids(season).await?;
    let stored = db.stored_game_ids()?;
    let pending: Vec<GameId> = listed
        .iter()
        .filter(|id| !stored.contains(id))
        .cloned()
        .collect();

    if verbose {
        println!(
            "Season {}: {} games listed, {} already stored, {} to fetch",
            season,
            listed.len(),
            listed.len() - pending.len(),
            pending.len()
        );
    }

    let rows = collect_games(&scraper, &pending, verbose).await?;
    if rows.is_empty() {
        println!("No game stats retrieved");
        return Ok(());
    }

    db.append_rows(&rows)?;
    println!("Saved {} game stats records", rows.len());
    Ok(())
}
