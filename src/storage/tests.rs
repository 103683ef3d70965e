//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{GameId, PlayerId, TeamId};
use crate::error::StatsError;
use chrono::{Local, TimeZone};

fn create_test_db() -> StatsDatabase {
    StatsDatabase::open_in_memory().unwrap()
}

fn stat_row(game_id: &str, player_id: i64) -> GameStatRow {
    GameStatRow {
        game_id: GameId::from(game_id),
        team_id: TeamId::new(1610612738),
        team_abbreviation: "BOS".to_string(),
        team_city: "Boston".to_string(),
        player_id: PlayerId::new(player_id),
        player_name: format!("Player {}", player_id),
        minutes: Some("32:45".to_string()),
        fgm: Some(7),
        fga: Some(15),
        fg_pct: Some(0.467),
        fg3m: Some(2),
        fg3a: Some(6),
        fg3_pct: Some(0.333),
        ftm: Some(4),
        fta: Some(5),
        ft_pct: Some(0.8),
        reb: Some(8),
        ast: Some(5),
        stl: Some(2),
        blk: Some(1),
        pts: Some(20),
        plus_minus: Some(12),
        captured_at: Local.with_ymd_and_hms(2024, 10, 23, 9, 30, 0).unwrap(),
    }
}

#[test]
fn test_schema_creation() {
    let db = create_test_db();
    assert_eq!(db.row_count().unwrap(), 0);
}

#[test]
fn test_ensure_schema_is_idempotent() {
    let mut db = create_test_db();
    db.append_rows(&[stat_row("g1", 1)]).unwrap();

    db.ensure_schema().unwrap();
    db.ensure_schema().unwrap();

    // Existing data and structure untouched.
    assert_eq!(db.row_count().unwrap(), 1);
    assert_eq!(db.all_rows().unwrap()[0], stat_row("g1", 1));
}

#[test]
fn test_append_then_read_back() {
    let mut db = create_test_db();
    let rows = vec![stat_row("g1", 1), stat_row("g1", 2), stat_row("g2", 1)];

    db.append_rows(&rows).unwrap();

    assert_eq!(db.all_rows().unwrap(), rows);
}

#[test]
fn test_append_empty_batch_is_noop() {
    let mut db = create_test_db();
    db.append_rows(&[]).unwrap();
    assert_eq!(db.row_count().unwrap(), 0);
}

#[test]
fn test_duplicate_append_is_rejected_atomically() {
    let mut db = create_test_db();
    db.append_rows(&[stat_row("g1", 1)]).unwrap();

    // Second batch starts with a fresh row but contains a duplicate; the
    // whole batch must roll back.
    let batch = vec![stat_row("g2", 1), stat_row("g1", 1)];
    let err = db.append_rows(&batch).unwrap_err();

    assert!(err.is_duplicate());
    match err {
        StatsError::DuplicateRow { game_id, player_id } => {
            assert_eq!(game_id, "g1");
            assert_eq!(player_id, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(db.row_count().unwrap(), 1);
}

#[test]
fn test_same_player_different_games_is_allowed() {
    let mut db = create_test_db();
    db.append_rows(&[stat_row("g1", 1), stat_row("g2", 1)]).unwrap();
    assert_eq!(db.row_count().unwrap(), 2);
}

#[test]
fn test_nullable_stats_round_trip() {
    let mut db = create_test_db();
    let dnp = GameStatRow {
        minutes: None,
        fgm: None,
        fga: None,
        fg_pct: None,
        fg3m: None,
        fg3a: None,
        fg3_pct: None,
        ftm: None,
        fta: None,
        ft_pct: None,
        reb: None,
        ast: None,
        stl: None,
        blk: None,
        pts: None,
        plus_minus: None,
        ..stat_row("g1", 99)
    };

    db.append_rows(&[dnp.clone()]).unwrap();
    assert_eq!(db.all_rows().unwrap(), vec![dnp]);
}

#[test]
fn test_stored_game_ids() {
    let mut db = create_test_db();
    db.append_rows(&[stat_row("g1", 1), stat_row("g1", 2), stat_row("g2", 1)])
        .unwrap();

    let ids = db.stored_game_ids().unwrap();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&GameId::from("g1")));
    assert!(ids.contains(&GameId::from("g2")));
}

#[test]
fn test_player_averages() {
    let mut db = create_test_db();
    let mut a1 = stat_row("g1", 1);
    a1.player_name = "Al Horford".to_string();
    a1.pts = Some(10);
    a1.reb = Some(6);
    a1.ast = Some(2);
    let mut a2 = stat_row("g2", 1);
    a2.player_name = "Al Horford".to_string();
    a2.pts = Some(20);
    a2.reb = Some(10);
    a2.ast = Some(4);

    db.append_rows(&[a1, a2]).unwrap();

    let averages = db.player_averages().unwrap();
    assert_eq!(averages.len(), 1);
    assert_eq!(averages[0].player_name, "Al Horford");
    assert_eq!(averages[0].avg_points, 15.0);
    assert_eq!(averages[0].avg_rebounds, 8.0);
    assert_eq!(averages[0].avg_assists, 3.0);
}

#[test]
fn test_rebound_totals_ranked_and_capped() {
    let mut db = create_test_db();
    let mut rows = Vec::new();
    for player_id in 1..=12 {
        let mut row = stat_row("g1", player_id);
        row.reb = Some(player_id);
        rows.push(row);
    }
    db.append_rows(&rows).unwrap();

    let totals = db.rebound_totals(10).unwrap();
    assert_eq!(totals.len(), 10);
    assert_eq!(totals[0].total_rebounds, 12);
    assert_eq!(totals[9].total_rebounds, 3);
    assert!(totals.windows(2).all(|w| w[0].total_rebounds >= w[1].total_rebounds));
    assert_eq!(totals[0].games_played, 1);
}
