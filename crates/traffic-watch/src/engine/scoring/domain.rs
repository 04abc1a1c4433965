use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for reporter accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Gamification tier derived solely from accumulated points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl BadgeTier {
    pub const fn level(self) -> u8 {
        match self {
            BadgeTier::Bronze => 1,
            BadgeTier::Silver => 2,
            BadgeTier::Gold => 3,
            BadgeTier::Platinum => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BadgeTier::Bronze => "bronze",
            BadgeTier::Silver => "silver",
            BadgeTier::Gold => "gold",
            BadgeTier::Platinum => "platinum",
        }
    }
}

/// Running score for one reporter.
///
/// Mutated only through the point ledger so the points, counters, and badge
/// tier always change together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserScore {
    pub user_id: UserId,
    pub points: u64,
    pub violations_count: u64,
    pub reports_count: u64,
    pub badge: BadgeTier,
}

impl UserScore {
    /// Fresh profile starting at zero points.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            points: 0,
            violations_count: 0,
            reports_count: 0,
            badge: BadgeTier::Bronze,
        }
    }

    pub fn view(&self) -> UserScoreView {
        UserScoreView {
            user_id: self.user_id.clone(),
            points: self.points,
            reports_count: self.reports_count,
            violations_count: self.violations_count,
            badge_level: self.badge.level(),
            badge_label: self.badge.label(),
        }
    }
}

/// Point-affecting events recognized by the ledger.
///
/// Submitting an event exactly once is the caller's job (a report can only
/// transition to approved once); the ledger guarantees no submitted event
/// is lost to a concurrent update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreEvent {
    /// A report by this user was approved and earns reward points.
    ReportApproved { reward_points: i64 },
    /// A violation this user reported was confirmed by a reviewer.
    ViolationConfirmed,
}

/// One row of a published daily leaderboard. Write-once per (user, date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub rank: u32,
    pub points: u64,
    pub reports_submitted: u64,
    pub verified_reports: u64,
    pub badge: BadgeTier,
}

/// Sanitized representation of a score for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserScoreView {
    pub user_id: UserId,
    pub points: u64,
    pub reports_count: u64,
    pub violations_count: u64,
    pub badge_level: u8,
    pub badge_label: &'static str,
}
