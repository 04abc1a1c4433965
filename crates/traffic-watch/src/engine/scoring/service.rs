use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::domain::{LeaderboardEntry, ScoreEvent, UserId, UserScore};
use super::leaderboard;
use super::ledger::{LedgerError, PointLedger};
use super::repository::{
    LeaderboardStore, LeaderboardStoreError, ScoreRepository, ScoreStoreError,
};

/// Service composing the point ledger, score storage, and leaderboard
/// publication.
pub struct ScoringService<S, L> {
    scores: Arc<S>,
    leaderboards: Arc<L>,
    ledger: PointLedger<S>,
}

impl<S, L> ScoringService<S, L>
where
    S: ScoreRepository + 'static,
    L: LeaderboardStore + 'static,
{
    pub fn new(scores: Arc<S>, leaderboards: Arc<L>) -> Self {
        let ledger = PointLedger::new(scores.clone());
        Self {
            scores,
            leaderboards,
            ledger,
        }
    }

    /// Create a zeroed score profile for a new reporter.
    pub fn register_user(&self, user_id: UserId) -> Result<UserScore, ScoringServiceError> {
        let stored = self.scores.insert(UserScore::new(user_id))?;
        Ok(stored.score)
    }

    /// Award points for an approved report.
    pub fn award_report_approval(
        &self,
        user_id: &UserId,
        reward_points: i64,
    ) -> Result<UserScore, ScoringServiceError> {
        let score = self
            .ledger
            .apply(user_id, &ScoreEvent::ReportApproved { reward_points })?;
        info!(%user_id, reward_points, points = score.points, "report approval applied");
        Ok(score)
    }

    /// Record that a violation reported by this user was confirmed.
    pub fn confirm_violation(&self, user_id: &UserId) -> Result<UserScore, ScoringServiceError> {
        Ok(self.ledger.apply(user_id, &ScoreEvent::ViolationConfirmed)?)
    }

    /// Current score for API responses.
    pub fn get(&self, user_id: &UserId) -> Result<UserScore, ScoringServiceError> {
        let stored = self
            .scores
            .fetch(user_id)?
            .ok_or(ScoreStoreError::NotFound)?;
        Ok(stored.score)
    }

    /// Build and publish the leaderboard for `date`.
    ///
    /// The snapshot is one consistent read, ranking is pure, and
    /// publication replaces any previously generated set for the date in a
    /// single swap, so regeneration deterministically overwrites.
    pub fn generate_leaderboard(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<LeaderboardEntry>, ScoringServiceError> {
        let snapshot = self.scores.snapshot()?;
        let entries = leaderboard::rank(&snapshot, date);
        self.leaderboards.publish(date, entries.clone())?;
        info!(%date, entrants = entries.len(), "leaderboard published");
        Ok(entries)
    }

    /// Read back a previously published day, if any.
    pub fn leaderboard_for(
        &self,
        date: NaiveDate,
    ) -> Result<Option<Vec<LeaderboardEntry>>, ScoringServiceError> {
        Ok(self.leaderboards.for_date(date)?)
    }
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Store(#[from] ScoreStoreError),
    #[error(transparent)]
    Leaderboard(#[from] LeaderboardStoreError),
}
