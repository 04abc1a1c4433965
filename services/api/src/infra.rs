use chrono::{DateTime, Duration, NaiveDate, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use traffic_watch::engine::fines::{HistoryError, VehicleId, ViolationHistory};
use traffic_watch::engine::scoring::{
    LeaderboardEntry, LeaderboardStore, LeaderboardStoreError, ScoreRepository, ScoreStoreError,
    UserId, UserScore, VersionedScore,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory stand-in for the violation store: a flat log of
/// (vehicle, instant) sightings filtered per query window.
#[derive(Default)]
pub(crate) struct InMemoryViolationLog {
    entries: Mutex<Vec<(VehicleId, DateTime<Utc>)>>,
}

impl InMemoryViolationLog {
    pub(crate) fn record(&self, vehicle: VehicleId, at: DateTime<Utc>) {
        self.entries
            .lock()
            .expect("violation log mutex poisoned")
            .push((vehicle, at));
    }
}

impl ViolationHistory for InMemoryViolationLog {
    fn count_recent(
        &self,
        vehicle: &VehicleId,
        window_days: u32,
        as_of: DateTime<Utc>,
    ) -> Result<u32, HistoryError> {
        let from = as_of - Duration::days(i64::from(window_days));
        let entries = self.entries.lock().expect("violation log mutex poisoned");
        Ok(entries
            .iter()
            .filter(|(candidate, at)| candidate == vehicle && *at >= from && *at <= as_of)
            .count() as u32)
    }
}

#[derive(Default)]
pub(crate) struct InMemoryScoreStore {
    rows: Mutex<HashMap<UserId, VersionedScore>>,
}

impl ScoreRepository for InMemoryScoreStore {
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
pub(crate) struct InMemoryLeaderboardStore {
    days: Mutex<HashMap<NaiveDate, Vec<LeaderboardEntry>>>,
}

impl LeaderboardStore for InMemoryLeaderboardStore {
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

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
