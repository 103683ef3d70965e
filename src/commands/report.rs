//! Chart generation command.

use std::path::Path;

use crate::report::write_player_charts;
use crate::storage::StatsDatabase;
use crate::Result;

/// Render both HTML charts from the stored rows.
pub fn handle_report(db_path: &Path, out_dir: &Path) -> Result<()> {
    let db = StatsDatabase::open(db_path)?;
    write_player_charts(&db, out_dir)?;
    println!("Visualizations saved in {}", out_dir.display());
    Ok(())
}
