//! Query operations over the `game_stats` table

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{GameId, PlayerId, TeamId};
use crate::error::{Result, StatsError};
use chrono::{DateTime, Local};
use rusqlite::{params, types::Type, ErrorCode, Row};
use std::collections::HashSet;

impl StatsDatabase {
    /// Append every row in `rows` in a single transaction.
    ///
    /// If any row's `(GAME_ID, PLAYER_ID)` already exists the whole batch is
    /// rolled back and `DuplicateRow` names the offending pair. An empty
    /// batch is a no-op.
    pub fn append_rows(&mut self, rows: &[GameStatRow]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO game_stats (
                    GAME_ID, TEAM_ID, TEAM_ABBREVIATION, TEAM_CITY,
                    PLAYER_ID, PLAYER_NAME, MIN,
                    FGM, FGA, FG_PCT, FG3M, FG3A, FG3_PCT, FTM, FTA, FT_PCT,
                    REB, AST, STL, BLK, PTS, PLUS_MINUS, SCRAPE_TIMESTAMP
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;

            for row in rows {
                let inserted = stmt.execute(params![
                    row.game_id.as_str(),
                    row.team_id.as_i64(),
                    row.team_abbreviation,
                    row.team_city,
                    row.player_id.as_i64(),
                    row.player_name,
                    row.minutes,
                    row.fgm,
                    row.fga,
                    row.fg_pct,
                    row.fg3m,
                    row.fg3a,
                    row.fg3_pct,
                    row.ftm,
                    row.fta,
                    row.ft_pct,
                    row.reb,
                    row.ast,
                    row.stl,
                    row.blk,
                    row.pts,
                    row.plus_minus,
                    row.captured_at.to_rfc3339(),
                ]);

                if let Err(err) = inserted {
                    // Dropping the uncommitted transaction rolls everything back.
                    return Err(map_insert_error(err, row));
                }
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Every stored row, in insertion order.
    pub fn all_rows(&self) -> Result<Vec<GameStatRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT GAME_ID, TEAM_ID, TEAM_ABBREVIATION, TEAM_CITY,
                    PLAYER_ID, PLAYER_NAME, MIN,
                    FGM, FGA, FG_PCT, FG3M, FG3A, FG3_PCT, FTM, FTA, FT_PCT,
                    REB, AST, STL, BLK, PTS, PLUS_MINUS, SCRAPE_TIMESTAMP
             FROM game_stats
             ORDER BY rowid",
        )?;

        let rows = stmt.query_map([], row_to_stat)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Number of stored rows.
    pub fn row_count(&self) -> Result<i64> {
        let count =
            self.conn
                .query_row("SELECT COUNT(*) FROM game_stats", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Distinct game ids already persisted, for callers that avoid
    /// re-fetching stored games.
    pub fn stored_game_ids(&self) -> Result<HashSet<GameId>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT GAME_ID FROM game_stats")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut ids = HashSet::new();
        for row in rows {
            ids.insert(GameId::new(row?));
        }
        Ok(ids)
    }

    /// Per-player scoring/rebounding/assist averages across all stored games.
    pub fn player_averages(&self) -> Result<Vec<PlayerAverages>> {
        let mut stmt = self.conn.prepare(
            "SELECT PLAYER_NAME,
                    AVG(PTS) AS avg_points,
                    AVG(REB) AS avg_rebounds,
                    AVG(AST) AS avg_assists
             FROM game_stats
             GROUP BY PLAYER_NAME
             ORDER BY PLAYER_NAME",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(PlayerAverages {
                player_name: row.get(0)?,
                avg_points: row.get::<_, Option<f64>>(1)?.unwrap_or(0.0),
                avg_rebounds: row.get::<_, Option<f64>>(2)?.unwrap_or(0.0),
                avg_assists: row.get::<_, Option<f64>>(3)?.unwrap_or(0.0),
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Players ranked by total rebounds, capped at `limit`.
    pub fn rebound_totals(&self, limit: usize) -> Result<Vec<ReboundTotals>> {
        let mut stmt = self.conn.prepare(
            "SELECT PLAYER_NAME,
                    SUM(REB) AS total_rebounds,
                    COUNT(DISTINCT GAME_ID) AS games_played,
                    AVG(REB) AS avg_rebounds
             FROM game_stats
             GROUP BY PLAYER_NAME
             ORDER BY total_rebounds DESC
             LIMIT ?",
        )?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(ReboundTotals {
                player_name: row.get(0)?,
                total_rebounds: row.get::<_, Option<i64>>(1)?.unwrap_or(0),
                games_played: row.get(2)?,
                avg_rebounds: row.get::<_, Option<f64>>(3)?.unwrap_or(0.0),
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

/// Map a primary-key violation to `DuplicateRow`; pass everything else through.
fn map_insert_error(err: rusqlite::Error, row: &GameStatRow) -> StatsError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            StatsError::DuplicateRow {
                game_id: row.game_id.to_string(),
                player_id: row.player_id.as_i64(),
            }
        }
        _ => StatsError::Db(err),
    }
}

/// Convert a database row back into a `GameStatRow`.
fn row_to_stat(row: &Row) -> rusqlite::Result<GameStatRow> {
    let timestamp: String = row.get(22)?;
    let captured_at: DateTime<Local> = DateTime::parse_from_rfc3339(&timestamp)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(22, Type::Text, Box::new(e)))?
        .with_timezone(&Local);

    Ok(GameStatRow {
        game_id: GameId::new(row.get::<_, String>(0)?),
        team_id: TeamId::new(row.get(1)?),
        team_abbreviation: row.get(2)?,
        team_city: row.get(3)?,
        player_id: PlayerId::new(row.get(4)?),
        player_name: row.get(5)?,
        minutes: row.get(6)?,
        fgm: row.get(7)?,
        fga: row.get(8)?,
        fg_pct: row.get(9)?,
        fg3m: row.get(10)?,
        fg3a: row.get(11)?,
        fg3_pct: row.get(12)?,
        ftm: row.get(13)?,
        fta: row.get(14)?,
        ft_pct: row.get(15)?,
        reb: row.get(16)?,
        ast: row.get(17)?,
        stl: row.get(18)?,
        blk: row.get(19)?,
        pts: row.get(20)?,
        plus_minus: row.get(21)?,
        captured_at,
    })
}
