//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use celtics_stats::{
    cli::{CelticsStats, Commands},
    commands::{fetch::handle_fetch, populate::handle_populate, report::handle_report},
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = CelticsStats::parse();

    match app.command {
        Commands::Fetch { db, verbose } => handle_fetch(&db, verbose).await?,

        Commands::Populate {
            season,
            delay,
            db,
            verbose,
        } => handle_populate(season, delay, &db, verbose).await?,

        Commands::Report { db, out } => handle_report(&db, &out)?,
    }

    Ok(())
}
