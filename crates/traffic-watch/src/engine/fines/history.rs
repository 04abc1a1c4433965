use chrono::{DateTime, Utc};

use super::domain::VehicleId;

/// Read-only window query against the external violation store.
///
/// Implementations answer how many violations a vehicle accumulated in the
/// `window_days` preceding `as_of` (inclusive on both ends). The query is
/// point-in-time: no locks are taken, and staleness up to the caller's own
/// transaction boundary is acceptable.
pub trait ViolationHistory: Send + Sync {
    fn count_recent(
        &self,
        vehicle: &VehicleId,
        window_days: u32,
        as_of: DateTime<Utc>,
    ) -> Result<u32, HistoryError>;
}

/// Failure talking to the violation store.
///
/// A fine is never computed against a guessed history count; callers surface
/// this error instead of substituting a default.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("violation store unavailable: {0}")]
    Unavailable(String),
}
