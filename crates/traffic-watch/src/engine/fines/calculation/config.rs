use serde::{Deserialize, Serialize};

/// Policy dials backing fine computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinePolicy {
    /// Lookback window for counting repeat offenses, in days.
    pub repeat_window_days: u32,
    /// Repeat count at which the rehabilitation discount kicks in.
    pub rehabilitation_threshold: u32,
    /// Discount granted once the threshold is reached, in whole percent.
    pub rehabilitation_discount_percent: u8,
    /// Days between issuing a fine and its payment due date.
    pub due_in_days: u16,
}

impl Default for FinePolicy {
    fn default() -> Self {
        Self {
            repeat_window_days: 180,
            rehabilitation_threshold: 5,
            rehabilitation_discount_percent: 10,
            due_in_days: 30,
        }
    }
}
