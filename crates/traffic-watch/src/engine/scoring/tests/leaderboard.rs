use super::common::*;
use crate::engine::scoring::domain::{BadgeTier, UserScore};
use crate::engine::scoring::leaderboard;

fn score(id: &str, points: u64, verified: u64, reports: u64) -> UserScore {
    UserScore {
        user_id: user(id),
        points,
        violations_count: verified,
        reports_count: reports,
        badge: crate::engine::scoring::badge::classify(points),
    }
}

#[test]
fn ranks_are_dense_one_based_and_complete() {
    let snapshot = vec![
        score("asha", 4_200, 12, 20),
        score("bala", 900, 2, 5),
        score("chitra", 2_000, 5, 9),
        score("dev", 2_000, 7, 9),
    ];

    let entries = leaderboard::rank(&snapshot, board_date());

    assert_eq!(entries.len(), 4);
    let ranks: Vec<u32> = entries.iter().map(|entry| entry.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert_eq!(entries[0].user_id, user("asha"));
    // dev outranks chitra on verified reports despite equal points.
    assert_eq!(entries[1].user_id, user("dev"));
    assert_eq!(entries[2].user_id, user("chitra"));
    assert_eq!(entries[3].user_id, user("bala"));
}

#[test]
fn full_ties_break_on_user_id_ascending() {
    let snapshot = vec![score("bina", 2_000, 5, 8), score("anil", 2_000, 5, 8)];

    let entries = leaderboard::rank(&snapshot, board_date());

    assert_eq!(entries[0].user_id, user("anil"));
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[1].user_id, user("bina"));
    assert_eq!(entries[1].rank, 2);
}

#[test]
fn ranking_is_independent_of_snapshot_order() {
    let forward = vec![
        score("asha", 4_200, 12, 20),
        score("bala", 900, 2, 5),
        score("chitra", 2_000, 5, 9),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let first = leaderboard::rank(&forward, board_date());
    let second = leaderboard::rank(&reversed, board_date());

    assert_eq!(first, second);
    let first_json = serde_json::to_string(&first).expect("serializes");
    let second_json = serde_json::to_string(&second).expect("serializes");
    assert_eq!(first_json, second_json);
}

#[test]
fn entries_carry_the_snapshot_columns() {
    let snapshot = vec![score("asha", 5_100, 9, 17)];

    let entries = leaderboard::rank(&snapshot, board_date());

    let entry = &entries[0];
    assert_eq!(entry.date, board_date());
    assert_eq!(entry.points, 5_100);
    assert_eq!(entry.reports_submitted, 17);
    assert_eq!(entry.verified_reports, 9);
    assert_eq!(entry.badge, BadgeTier::Platinum);
}

#[test]
fn empty_snapshot_ranks_to_an_empty_board() {
    assert!(leaderboard::rank(&[], board_date()).is_empty());
}
