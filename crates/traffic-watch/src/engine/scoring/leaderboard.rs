use chrono::NaiveDate;

use super::domain::{LeaderboardEntry, UserScore};

/// Produce the fully ordered leaderboard for one day from a consistent
/// snapshot of all scores.
///
/// Ordering: points descending, then verified reports descending, then
/// user id ascending as the tiebreak of last resort, so two runs over the
/// same snapshot emit identical output regardless of input order. Ranks are
/// dense and 1-based: tied users still receive distinct consecutive ranks
/// rather than sharing one.
pub fn rank(snapshot: &[UserScore], date: NaiveDate) -> Vec<LeaderboardEntry> {
    let mut ordered: Vec<&UserScore> = snapshot.iter().collect();
    ordered.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.violations_count.cmp(&a.violations_count))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, score)| LeaderboardEntry {
            user_id: score.user_id.clone(),
            date,
            rank: index as u32 + 1,
            points: score.points,
            reports_submitted: score.reports_count,
            verified_reports: score.violations_count,
            badge: score.badge,
        })
        .collect()
}
