//! Unit tests for the box-score projection

use super::*;
use chrono::TimeZone;
use serde_json::{json, Value};

const CELTICS: i64 = 1610612738;
const KNICKS: i64 = 1610612752;

fn headers() -> Vec<String> {
    [
        "GAME_ID", "TEAM_ID", "TEAM_ABBREVIATION", "TEAM_CITY", "PLAYER_ID", "PLAYER_NAME",
        "NICKNAME", "START_POSITION", "COMMENT", "MIN", "FGM", "FGA", "FG_PCT", "FG3M", "FG3A",
        "FG3_PCT", "FTM", "FTA", "FT_PCT", "OREB", "DREB", "REB", "AST", "STL", "BLK", "TO",
        "PF", "PTS", "PLUS_MINUS",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn tatum_row() -> Vec<Value> {
    json!([
        "0022400003", CELTICS, "BOS", "Boston", 1628369, "Jayson Tatum", "Jayson", "F", "",
        "37:12", 14, 26, 0.538, 8, 14, 0.571, 1, 2, 0.5, 1, 10, 11, 10, 1, 0, 2, 1, 37, 18
    ])
    .as_array()
    .unwrap()
    .clone()
}

fn dnp_row() -> Vec<Value> {
    json!([
        "0022400003", CELTICS, "BOS", "Boston", 1630573, "JD Davison", "JD", "",
        "DNP - Coach's Decision", null, null, null, null, null, null, null, null, null, null,
        null, null, null, null, null, null, null, null, null, null
    ])
    .as_array()
    .unwrap()
    .clone()
}

fn opponent_row() -> Vec<Value> {
    json!([
        "0022400003", KNICKS, "NYK", "New York", 1628973, "Jalen Brunson", "Jalen", "G", "",
        "35:01", 8, 21, 0.381, 2, 6, 0.333, 4, 4, 1.0, 0, 3, 3, 5, 1, 0, 3, 2, 22, -14
    ])
    .as_array()
    .unwrap()
    .clone()
}

fn result_set(headers: Vec<String>, row_set: Vec<Vec<Value>>) -> ResultSet {
    ResultSet {
        name: "PlayerStats".to_string(),
        headers,
        row_set,
    }
}

fn capture_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 10, 23, 9, 30, 0).unwrap()
}

#[test]
fn test_filters_to_requested_team() {
    let rs = result_set(headers(), vec![tatum_row(), opponent_row()]);
    let rows = shape_box_score(&rs, TeamId::new(CELTICS), capture_time()).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player_name, "Jayson Tatum");
    assert_eq!(rows[0].team_abbreviation, "BOS");
    assert_eq!(rows[0].team_city, "Boston");
}

#[test]
fn test_projects_fixed_columns() {
    let rs = result_set(headers(), vec![tatum_row()]);
    let rows = shape_box_score(&rs, TeamId::new(CELTICS), capture_time()).unwrap();

    let row = &rows[0];
    assert_eq!(row.game_id.as_str(), "0022400003");
    assert_eq!(row.player_id.as_i64(), 1628369);
    assert_eq!(row.minutes.as_deref(), Some("37:12"));
    assert_eq!(row.fgm, Some(14));
    assert_eq!(row.fga, Some(26));
    assert_eq!(row.fg_pct, Some(0.538));
    assert_eq!(row.reb, Some(11));
    assert_eq!(row.ast, Some(10));
    assert_eq!(row.pts, Some(37));
    assert_eq!(row.plus_minus, Some(18));
    assert_eq!(row.captured_at, capture_time());
}

#[test]
fn test_dnp_rows_keep_nulls() {
    let rs = result_set(headers(), vec![dnp_row()]);
    let rows = shape_box_score(&rs, TeamId::new(CELTICS), capture_time()).unwrap();

    let row = &rows[0];
    assert_eq!(row.player_name, "JD Davison");
    assert_eq!(row.minutes, None);
    assert_eq!(row.pts, None);
    assert_eq!(row.fg_pct, None);
}

#[test]
fn test_team_absent_yields_empty_batch() {
    let rs = result_set(headers(), vec![opponent_row()]);
    let rows = shape_box_score(&rs, TeamId::new(CELTICS), capture_time()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_deterministic_for_identical_inputs() {
    let rs = result_set(headers(), vec![tatum_row(), dnp_row()]);
    let first = shape_box_score(&rs, TeamId::new(CELTICS), capture_time()).unwrap();
    let second = shape_box_score(&rs, TeamId::new(CELTICS), capture_time()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_insensitive_to_input_column_order() {
    let rs = result_set(headers(), vec![tatum_row()]);
    let expected = shape_box_score(&rs, TeamId::new(CELTICS), capture_time()).unwrap();

    // Reverse the column order and every row with it.
    let reversed_headers: Vec<String> = headers().into_iter().rev().collect();
    let reversed_row: Vec<Value> = tatum_row().into_iter().rev().collect();
    let reversed = result_set(reversed_headers, vec![reversed_row]);
    let rows = shape_box_score(&reversed, TeamId::new(CELTICS), capture_time()).unwrap();

    assert_eq!(rows, expected);
}

#[test]
fn test_missing_column_is_an_error() {
    let mut short_headers = headers();
    short_headers.retain(|h| h != "PLAYER_ID");
    let rs = result_set(short_headers, vec![]);

    let err = shape_box_score(&rs, TeamId::new(CELTICS), capture_time()).unwrap_err();
    assert!(matches!(err, StatsError::MissingColumn { .. }));
}

#[test]
fn test_null_player_id_is_malformed() {
    let mut row = tatum_row();
    row[4] = Value::Null;
    let rs = result_set(headers(), vec![row]);

    let err = shape_box_score(&rs, TeamId::new(CELTICS), capture_time()).unwrap_err();
    assert!(matches!(err, StatsError::MalformedRow { .. }));
}
