//! Reporter gamification: the point ledger, badge tiers, and daily
//! leaderboards.
//!
//! Scores change only through [`ledger::PointLedger`], which serializes
//! concurrent updates per user; the leaderboard is ranked from a single
//! consistent snapshot and published one day at a time.

pub mod badge;
pub mod domain;
pub mod leaderboard;
pub mod ledger;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{BadgeTier, LeaderboardEntry, ScoreEvent, UserId, UserScore, UserScoreView};
pub use ledger::{LedgerError, PointLedger};
pub use repository::{
    LeaderboardStore, LeaderboardStoreError, ScoreRepository, ScoreStoreError, VersionedScore,
};
pub use router::scoring_router;
pub use service::{ScoringService, ScoringServiceError};
