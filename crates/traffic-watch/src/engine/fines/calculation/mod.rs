mod config;
mod rules;

pub use config::FinePolicy;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::{Severity, SeverityOutOfRange};

/// Stateless calculator applying the fine policy to a single violation.
///
/// Deterministic: the same severity, base amount, and repeat count always
/// produce the same draft, which is what makes fines auditable after the
/// fact.
pub struct FineCalculator {
    policy: FinePolicy,
}

impl FineCalculator {
    pub fn new(policy: FinePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FinePolicy {
        &self.policy
    }

    /// Produce the monetary breakdown for a violation.
    pub fn draft(
        &self,
        severity: Severity,
        base_amount: Decimal,
        repeat_count: u32,
    ) -> Result<FineDraft, FineInputError> {
        if base_amount <= Decimal::ZERO {
            return Err(FineInputError::NonPositiveBaseAmount(base_amount));
        }

        let severity_multiplier = rules::severity_multiplier(severity);
        let repeat_offender_multiplier = rules::repeat_offender_multiplier(repeat_count);
        let final_amount =
            rules::round_currency(base_amount * severity_multiplier * repeat_offender_multiplier);

        let discount_percentage = if repeat_count >= self.policy.rehabilitation_threshold {
            self.policy.rehabilitation_discount_percent
        } else {
            0
        };
        let amount_after_discount = if discount_percentage == 0 {
            final_amount
        } else {
            let retained =
                Decimal::ONE - Decimal::from(discount_percentage) / Decimal::ONE_HUNDRED;
            rules::round_currency(final_amount * retained)
        };

        Ok(FineDraft {
            severity,
            base_amount,
            severity_multiplier,
            repeat_count,
            repeat_offender_multiplier,
            final_amount,
            discount_percentage,
            amount_after_discount,
        })
    }
}

/// Monetary breakdown of a fine before an identifier and due date are
/// assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FineDraft {
    pub severity: Severity,
    pub base_amount: Decimal,
    pub severity_multiplier: Decimal,
    pub repeat_count: u32,
    pub repeat_offender_multiplier: Decimal,
    pub final_amount: Decimal,
    pub discount_percentage: u8,
    pub amount_after_discount: Decimal,
}

/// Malformed calculator input. Caller's bug: never retried, and no partial
/// record is produced.
#[derive(Debug, thiserror::Error)]
pub enum FineInputError {
    #[error("base amount must be positive, got {0}")]
    NonPositiveBaseAmount(Decimal),
    #[error(transparent)]
    Severity(#[from] SeverityOutOfRange),
}
