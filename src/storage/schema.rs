//! Database connection and schema management

use crate::error::{Result, StatsError};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Connection manager for the `game_stats` table.
#[derive(Debug)]
pub struct StatsDatabase {
    pub(crate) conn: Connection,
    pub(crate) path: Option<PathBuf>,
}

impl StatsDatabase {
    /// Open (or create) the database at `path` and ensure the table exists.
    ///
    /// Creates the parent directory if needed. Refuses to open a table in
    /// the legacy shape without team columns; re-pointing at a fresh path is
    /// the supported way forward, there is no automatic migration.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let mut db = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        db.ensure_schema()?;
        Ok(db)
    }

    /// In-memory database for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn, path: None };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Create the `game_stats` table if it is missing.
    ///
    /// Idempotent: never alters an existing table's structure. An existing
    /// table in the legacy shape is rejected instead of silently reused.
    pub fn ensure_schema(&mut self) -> Result<()> {
        self.reject_legacy_shape()?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS game_stats (
                GAME_ID TEXT,
                TEAM_ID INTEGER,
                TEAM_ABBREVIATION TEXT,
                TEAM_CITY TEXT,
                PLAYER_ID INTEGER,
                PLAYER_NAME TEXT,
                MIN TEXT,
                FGM INTEGER,
                FGA INTEGER,
                FG_PCT REAL,
                FG3M INTEGER,
                FG3A INTEGER,
                FG3_PCT REAL,
                FTM INTEGER,
                FTA INTEGER,
                FT_PCT REAL,
                REB INTEGER,
                AST INTEGER,
                STL INTEGER,
                BLK INTEGER,
                PTS INTEGER,
                PLUS_MINUS INTEGER,
                SCRAPE_TIMESTAMP TEXT,
                PRIMARY KEY (GAME_ID, PLAYER_ID)
            )",
            [],
        )?;

        Ok(())
    }

    /// Fail with `LegacySchema` when the existing table predates the team
    /// columns. A missing table is fine; `ensure_schema` will create it.
    fn reject_legacy_shape(&self) -> Result<()> {
        let table_exists: bool = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'game_stats'",
            [],
            |row| row.get::<_, i64>(0).map(|n| n > 0),
        )?;
        if !table_exists {
            return Ok(());
        }

        let mut stmt = self.conn.prepare("SELECT name FROM pragma_table_info('game_stats')")?;
        let mut has_team_id = false;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let name: String = row.get(0)?;
            if name.eq_ignore_ascii_case("TEAM_ID") {
                has_team_id = true;
            }
        }

        if has_team_id {
            Ok(())
        } else {
            let path = self
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| ":memory:".to_string());
            Err(StatsError::LegacySchema { path })
        }
    }
}
