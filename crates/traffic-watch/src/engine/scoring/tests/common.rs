use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::engine::scoring::domain::{LeaderboardEntry, UserId, UserScore};
use crate::engine::scoring::repository::{
    LeaderboardStore, LeaderboardStoreError, ScoreRepository, ScoreStoreError, VersionedScore,
};
use crate::engine::scoring::service::ScoringService;

#[derive(Default)]
pub(super) struct MemoryScoreStore {
    rows: Mutex<HashMap<UserId, VersionedScore>>,
}

impl ScoreRepository for MemoryScoreStore {
    fn insert(&self, score: UserScore) -> Result<VersionedScore, ScoreStoreError> {
        let mut rows = self.rows.lock().expect("score mutex poisoned");
        if rows.contains_key(&score.user_id) {
            return Err(ScoreStoreError::Conflict);
        }
        let stored = VersionedScore { version: 1, score };
        rows.insert(stored.score.user_id.clone(), stored.clone());
        Ok(stored)
    }

    fn fetch(&self, user_id: &UserId) -> Result<Option<VersionedScore>, ScoreStoreError> {
        let rows = self.rows.lock().expect("score mutex poisoned");
        Ok(rows.get(user_id).cloned())
    }

    fn compare_and_swap(
        &self,
        expected_version: u64,
        score: UserScore,
    ) -> Result<VersionedScore, ScoreStoreError> {
        let mut rows = self.rows.lock().expect("score mutex poisoned");
        let row = rows
            .get_mut(&score.user_id)
            .ok_or(ScoreStoreError::NotFound)?;
        if row.version != expected_version {
            return Err(ScoreStoreError::VersionMismatch);
        }
        *row = VersionedScore {
            version: expected_version + 1,
            score,
        };
        Ok(row.clone())
    }

    fn snapshot(&self) -> Result<Vec<UserScore>, ScoreStoreError> {
        let rows = self.rows.lock().expect("score mutex poisoned");
        Ok(rows.values().map(|row| row.score.clone()).collect())
    }
}

#[derive(Default)]
pub(super) struct MemoryLeaderboardStore {
    days: Mutex<HashMap<NaiveDate, Vec<LeaderboardEntry>>>,
}

impl LeaderboardStore for MemoryLeaderboardStore {
    fn publish(
        &self,
        date: NaiveDate,
        entries: Vec<LeaderboardEntry>,
    ) -> Result<(), LeaderboardStoreError> {
        let mut days = self.days.lock().expect("leaderboard mutex poisoned");
        days.insert(date, entries);
        Ok(())
    }

    fn for_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<Vec<LeaderboardEntry>>, LeaderboardStoreError> {
        let days = self.days.lock().expect("leaderboard mutex poisoned");
        Ok(days.get(&date).cloned())
    }
}

pub(super) fn user(id: &str) -> UserId {
    UserId(id.to_string())
}

pub(super) fn board_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date")
}

pub(super) fn build_service() -> (
    Arc<ScoringService<MemoryScoreStore, MemoryLeaderboardStore>>,
    Arc<MemoryScoreStore>,
    Arc<MemoryLeaderboardStore>,
) {
    let scores = Arc::new(MemoryScoreStore::default());
    let leaderboards = Arc::new(MemoryLeaderboardStore::default());
    let service = Arc::new(ScoringService::new(scores.clone(), leaderboards.clone()));
    (service, scores, leaderboards)
}
