use std::sync::Arc;

use tracing::debug;

use super::badge;
use super::domain::{ScoreEvent, UserId, UserScore};
use super::repository::{ScoreRepository, ScoreStoreError};

/// Bounded optimistic-retry budget for contended updates to one user.
const MAX_APPLY_ATTEMPTS: u32 = 5;

/// Applies scoring events to stored user scores.
///
/// Each application rewrites the points, counters, and recomputed badge
/// tier as one compare-and-swap: concurrent approvals for the same user
/// serialize instead of losing updates, and no reader ever observes a tier
/// inconsistent with the points total. An abandoned call leaves either the
/// old row or the fully updated one, nothing in between.
pub struct PointLedger<S> {
    scores: Arc<S>,
}

impl<S> PointLedger<S>
where
    S: ScoreRepository + 'static,
{
    pub fn new(scores: Arc<S>) -> Self {
        Self { scores }
    }

    pub fn apply(&self, user_id: &UserId, event: &ScoreEvent) -> Result<UserScore, LedgerError> {
        if let ScoreEvent::ReportApproved { reward_points } = event {
            if *reward_points < 0 {
                return Err(LedgerError::NegativeReward(*reward_points));
            }
        }

        for attempt in 1..=MAX_APPLY_ATTEMPTS {
            let current = self
                .scores
                .fetch(user_id)?
                .ok_or_else(|| LedgerError::UnknownUser(user_id.clone()))?;

            let next = updated_score(current.score, event);

            match self.scores.compare_and_swap(current.version, next) {
                Ok(stored) => return Ok(stored.score),
                Err(ScoreStoreError::VersionMismatch) => {
                    debug!(%user_id, attempt, "score update lost the version race, retrying");
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(LedgerError::Contention {
            user_id: user_id.clone(),
            attempts: MAX_APPLY_ATTEMPTS,
        })
    }
}

fn updated_score(mut score: UserScore, event: &ScoreEvent) -> UserScore {
    match event {
        ScoreEvent::ReportApproved { reward_points } => {
            score.points = score.points.saturating_add(*reward_points as u64);
            score.reports_count += 1;
        }
        ScoreEvent::ViolationConfirmed => {
            score.violations_count += 1;
        }
    }
    score.badge = badge::classify(score.points);
    score
}

/// Error raised by the point ledger.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("reward points must be non-negative, got {0}")]
    NegativeReward(i64),
    #[error("no score profile for user {0}")]
    UnknownUser(UserId),
    #[error("update for user {user_id} still contended after {attempts} attempts")]
    Contention { user_id: UserId, attempts: u32 },
    #[error(transparent)]
    Store(#[from] ScoreStoreError),
}
