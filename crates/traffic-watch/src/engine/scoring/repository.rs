use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{LeaderboardEntry, UserId, UserScore};

/// Score row paired with the storage version backing optimistic updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedScore {
    pub version: u64,
    pub score: UserScore,
}

/// Storage abstraction for reporter scores.
///
/// `compare_and_swap` is the per-user serialization primitive: the write
/// only lands when `expected_version` still matches the stored row, so two
/// racing updates to the same user cannot overwrite each other. Updates to
/// different users never contend. `snapshot` returns the full score set as
/// one consistent read, isolated from concurrent writes.
pub trait ScoreRepository: Send + Sync {
    fn insert(&self, score: UserScore) -> Result<VersionedScore, ScoreStoreError>;
    fn fetch(&self, user_id: &UserId) -> Result<Option<VersionedScore>, ScoreStoreError>;
    fn compare_and_swap(
        &self,
        expected_version: u64,
        score: UserScore,
    ) -> Result<VersionedScore, ScoreStoreError>;
    fn snapshot(&self) -> Result<Vec<UserScore>, ScoreStoreError>;
}

/// Error enumeration for score storage failures.
#[derive(Debug, thiserror::Error)]
pub enum ScoreStoreError {
    #[error("score row already exists")]
    Conflict,
    #[error("stored version moved underneath the update")]
    VersionMismatch,
    #[error("score row not found")]
    NotFound,
    #[error("score store unavailable: {0}")]
    Unavailable(String),
}

/// Published-leaderboard storage.
///
/// `publish` replaces the whole entry set for a date in one swap; readers
/// keep seeing the previous set until the new one is complete, never a
/// partially written day.
pub trait LeaderboardStore: Send + Sync {
    fn publish(
        &self,
        date: NaiveDate,
        entries: Vec<LeaderboardEntry>,
    ) -> Result<(), LeaderboardStoreError>;
    fn for_date(&self, date: NaiveDate)
        -> Result<Option<Vec<LeaderboardEntry>>, LeaderboardStoreError>;
}

/// Error enumeration for leaderboard storage failures.
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardStoreError {
    #[error("leaderboard store unavailable: {0}")]
    Unavailable(String),
}
