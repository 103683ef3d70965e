//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::SeasonLabel;

/// Default location of the stats database, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "data/celtics.db";

/// Default output directory for generated charts.
pub const DEFAULT_REPORT_DIR: &str = "data";

#[derive(Debug, Parser)]
#[clap(name = "celtics-stats", about = "Boston Celtics box-score scraper and chart generator")]
pub struct CelticsStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the current season's box scores and save them.
    ///
    /// Scrapes every game in the team's current-season game log and appends
    /// the rows to the database in one batch.
    Fetch {
        /// Path to the SQLite database file.
        #[clap(long, default_value = DEFAULT_DB_PATH)]
        db: PathBuf,

        /// Print per-game progress while scraping.
        #[clap(long)]
        verbose: bool,
    },

    /// Fetch an explicit season with configurable per-game pacing.
    ///
    /// Skips games already present in the database, so it can be re-run to
    /// top up a partially populated table without tripping the primary key.
    Populate {
        /// Season label, e.g. 2024-25.
        #[clap(long, short, default_value_t = SeasonLabel::default())]
        season: SeasonLabel,

        /// Seconds to wait after each successful box-score fetch.
        #[clap(long, default_value_t = 1)]
        delay: u64,

        /// Path to the SQLite database file.
        #[clap(long, default_value = DEFAULT_DB_PATH)]
        db: PathBuf,

        /// Print per-game progress while scraping.
        #[clap(long)]
        verbose: bool,
    },

    /// Render the two HTML charts from the stored rows.
    Report {
        /// Path to the SQLite database file.
        #[clap(long, default_value = DEFAULT_DB_PATH)]
        db: PathBuf,

        /// Directory the HTML files are written to.
        #[clap(long, short, default_value = DEFAULT_REPORT_DIR)]
        out: PathBuf,
    },
}
