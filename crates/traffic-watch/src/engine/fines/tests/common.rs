use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::engine::clock::Clock;
use crate::engine::fines::domain::{Severity, VehicleId, ViolationId, ViolationSnapshot};
use crate::engine::fines::history::{HistoryError, ViolationHistory};
use crate::engine::fines::{FinePolicy, FineService};

pub(super) struct FixedClock(pub(super) DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
pub(super) struct StaticHistory {
    counts: Mutex<HashMap<VehicleId, u32>>,
    unavailable: bool,
}

impl StaticHistory {
    pub(super) fn with_count(vehicle: &str, count: u32) -> Self {
        let mut counts = HashMap::new();
        counts.insert(VehicleId(vehicle.to_string()), count);
        Self {
            counts: Mutex::new(counts),
            unavailable: false,
        }
    }

    pub(super) fn unreachable() -> Self {
        Self {
            counts: Mutex::new(HashMap::new()),
            unavailable: true,
        }
    }
}

impl ViolationHistory for StaticHistory {
    fn count_recent(
        &self,
        vehicle: &VehicleId,
        _window_days: u32,
        _as_of: DateTime<Utc>,
    ) -> Result<u32, HistoryError> {
        if self.unavailable {
            return Err(HistoryError::Unavailable(
                "violation store offline".to_string(),
            ));
        }
        Ok(self
            .counts
            .lock()
            .expect("history mutex poisoned")
            .get(vehicle)
            .copied()
            .unwrap_or(0))
    }
}

pub(super) fn issued_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn violation(vehicle: &str, severity: Severity) -> ViolationSnapshot {
    ViolationSnapshot {
        violation_id: ViolationId("vio-1001".to_string()),
        vehicle: VehicleId(vehicle.to_string()),
        severity,
        occurred_at: issued_at(),
        is_verified: true,
    }
}

pub(super) fn build_service(history: StaticHistory) -> FineService<StaticHistory, FixedClock> {
    FineService::new(
        Arc::new(history),
        Arc::new(FixedClock(issued_at())),
        FinePolicy::default(),
    )
}
