use chrono::{DateTime, NaiveDate, Utc};

/// Injectable time source.
///
/// Pure components never read the environment clock directly; due dates and
/// history windows are derived from an instant handed in through this trait
/// so they stay deterministic under test.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now_utc().date_naive()
    }
}

/// Wall-clock implementation used by the running service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
