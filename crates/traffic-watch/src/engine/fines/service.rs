use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Duration;
use rust_decimal::Decimal;
use tracing::info;

use super::calculation::{FineCalculator, FineInputError, FinePolicy};
use super::domain::{FineId, FineRecord, PaymentStatus, ViolationSnapshot};
use super::history::{HistoryError, ViolationHistory};
use crate::engine::clock::Clock;

/// Service composing the history lookup, calculator, and clock.
pub struct FineService<H, C> {
    history: Arc<H>,
    clock: Arc<C>,
    calculator: FineCalculator,
}

static FINE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_fine_id() -> FineId {
    let id = FINE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    FineId(format!("fine-{id:06}"))
}

impl<H, C> FineService<H, C>
where
    H: ViolationHistory + 'static,
    C: Clock + 'static,
{
    pub fn new(history: Arc<H>, clock: Arc<C>, policy: FinePolicy) -> Self {
        Self {
            history,
            clock,
            calculator: FineCalculator::new(policy),
        }
    }

    pub fn calculator(&self) -> &FineCalculator {
        &self.calculator
    }

    /// Compute the payable fine for a violation.
    ///
    /// The repeat-offense count is read from the violation store for the
    /// policy window ending now. If the store is unreachable the whole
    /// computation fails; a wrong count would be worse than a loud error.
    pub fn compute_fine(
        &self,
        violation: &ViolationSnapshot,
        base_amount: Decimal,
    ) -> Result<FineRecord, FineServiceError> {
        let as_of = self.clock.now_utc();
        let policy = self.calculator.policy();
        let repeat_count =
            self.history
                .count_recent(&violation.vehicle, policy.repeat_window_days, as_of)?;

        let draft = self
            .calculator
            .draft(violation.severity, base_amount, repeat_count)?;
        let due_date = as_of.date_naive() + Duration::days(i64::from(policy.due_in_days));

        let record = FineRecord {
            fine_id: next_fine_id(),
            violation_id: violation.violation_id.clone(),
            base_amount: draft.base_amount,
            severity_multiplier: draft.severity_multiplier,
            repeat_offender_multiplier: draft.repeat_offender_multiplier,
            final_amount: draft.final_amount,
            discount_percentage: draft.discount_percentage,
            amount_after_discount: draft.amount_after_discount,
            payment_status: PaymentStatus::Pending,
            due_date,
            issued_at: as_of,
        };

        info!(
            fine_id = %record.fine_id.0,
            violation_id = %record.violation_id.0,
            repeat_count,
            %record.final_amount,
            "fine computed"
        );

        Ok(record)
    }
}

/// Error raised by the fine service.
#[derive(Debug, thiserror::Error)]
pub enum FineServiceError {
    #[error(transparent)]
    Input(#[from] FineInputError),
    #[error(transparent)]
    History(#[from] HistoryError),
}
