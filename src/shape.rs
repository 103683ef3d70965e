//! Projection from a raw box-score result set to `GameStatRow` batches.
//!
//! Pure: no I/O, no clock reads. The capture time is passed in so the same
//! input always produces the same rows.

use chrono::{DateTime, Local};

use crate::cli::types::{GameId, PlayerId, TeamId};
use crate::error::{Result, StatsError};
use crate::nba::types::{cell_f64, cell_i64, cell_str, ResultSet};
use crate::storage::models::GameStatRow;

/// Column indices resolved once per result set, so the projection is
/// insensitive to the provider's column order.
struct Projection {
    game_id: usize,
    team_id: usize,
    team_abbreviation: usize,
    team_city: usize,
    player_id: usize,
    player_name: usize,
    min: usize,
    fgm: usize,
    fga: usize,
    fg_pct: usize,
    fg3m: usize,
    fg3a: usize,
    fg3_pct: usize,
    ftm: usize,
    fta: usize,
    ft_pct: usize,
    reb: usize,
    ast: usize,
    stl: usize,
    blk: usize,
    pts: usize,
    plus_minus: usize,
}

impl Projection {
    fn resolve(result_set: &ResultSet) -> Result<Self> {
        Ok(Self {
            game_id: result_set.column("GAME_ID")?,
            team_id: result_set.column("TEAM_ID")?,
            team_abbreviation: result_set.column("TEAM_ABBREVIATION")?,
            team_city: result_set.column("TEAM_CITY")?,
            player_id: result_set.column("PLAYER_ID")?,
            player_name: result_set.column("PLAYER_NAME")?,
            min: result_set.column("MIN")?,
            fgm: result_set.column("FGM")?,
            fga: result_set.column("FGA")?,
            fg_pct: result_set.column("FG_PCT")?,
            fg3m: result_set.column("FG3M")?,
            fg3a: result_set.column("FG3A")?,
            fg3_pct: result_set.column("FG3_PCT")?,
            ftm: result_set.column("FTM")?,
            fta: result_set.column("FTA")?,
            ft_pct: result_set.column("FT_PCT")?,
            reb: result_set.column("REB")?,
            ast: result_set.column("AST")?,
            stl: result_set.column("STL")?,
            blk: result_set.column("BLK")?,
            pts: result_set.column("PTS")?,
            plus_minus: result_set.column("PLUS_MINUS")?,
        })
    }
}

/// Filter a raw `PlayerStats` result set down to one team's rows, project
/// the fixed column set, and stamp every row with `captured_at`.
///
/// Rows for other teams are dropped; an input with no rows for `team_id`
/// yields an empty batch, which is not an error.
pub fn shape_box_score(
    result_set: &ResultSet,
    team_id: TeamId,
    captured_at: DateTime<Local>,
) -> Result<Vec<GameStatRow>> {
    let proj = Projection::resolve(result_set)?;

    let required_str = |row: &[serde_json::Value], idx: usize, column: &str| {
        cell_str(row, idx)
            .map(str::to_string)
            .ok_or_else(|| StatsError::MalformedRow {
                column: column.to_string(),
            })
    };
    let required_i64 = |row: &[serde_json::Value], idx: usize, column: &str| {
        cell_i64(row, idx).ok_or_else(|| StatsError::MalformedRow {
            column: column.to_string(),
        })
    };

    let mut rows = Vec::new();
    for raw in &result_set.row_set {
        match cell_i64(raw, proj.team_id) {
            Some(id) if id == team_id.as_i64() => {}
            _ => continue,
        }

        rows.push(GameStatRow {
            game_id: GameId::new(required_str(raw, proj.game_id, "GAME_ID")?),
            team_id,
            team_abbreviation: required_str(raw, proj.team_abbreviation, "TEAM_ABBREVIATION")?,
            team_city: required_str(raw, proj.team_city, "TEAM_CITY")?,
            player_id: PlayerId::new(required_i64(raw, proj.player_id, "PLAYER_ID")?),
            player_name: required_str(raw, proj.player_name, "PLAYER_NAME")?,
            minutes: cell_str(raw, proj.min).map(str::to_string),
            fgm: cell_i64(raw, proj.fgm),
            fga: cell_i64(raw, proj.fga),
            fg_pct: cell_f64(raw, proj.fg_pct),
            fg3m: cell_i64(raw, proj.fg3m),
            fg3a: cell_i64(raw, proj.fg3a),
            fg3_pct: cell_f64(raw, proj.fg3_pct),
            ftm: cell_i64(raw, proj.ftm),
            fta: cell_i64(raw, proj.fta),
            ft_pct: cell_f64(raw, proj.ft_pct),
            reb: cell_i64(raw, proj.reb),
            ast: cell_i64(raw, proj.ast),
            stl: cell_i64(raw, proj.stl),
            blk: cell_i64(raw, proj.blk),
            pts: cell_i64(raw, proj.pts),
            plus_minus: cell_i64(raw, proj.plus_minus),
            captured_at,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests;
