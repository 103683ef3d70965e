//! Single-shot "fetch current season, save" command.

use std::path::Path;

use crate::cli::types::SeasonLabel;
use crate::scraper::{collect_season, TeamScraper};
use crate::storage::StatsDatabase;
use crate::{Result, TEAM_NAME};

/// Scrape the current season and append everything in one batch.
pub async fn handle_fetch(db_path: &Path, verbose: bool) -> Result<()> {
    let scraper = TeamScraper::new(TEAM_NAME)?;
    let mut db = StatsDatabase::open(db_path)?;

    let season = SeasonLabel::current();
    if verbose {
        println!("Fetching {} {} box scores...", TEAM_NAME, season);
    }

    let rows = collect_season(&scraper, season, verbose).await?;
    if rows.is_empty() {
        println!("No stats retrieved");
        return Ok(());
    }

    db.append_rows(&rows)?;
    println!("Saved {} game stat records", rows.len());
    Ok(())
}
