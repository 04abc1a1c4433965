use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for violations owned by the external violation store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViolationId(pub String);

/// Registration plate identifying the offending vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub String);

/// Identifier assigned to a fine once its computation completes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FineId(pub String);

/// Raised when an ordinal severity level falls outside the supported range.
#[derive(Debug, Clone, thiserror::Error)]
#[error("severity level {0} outside supported range 1-4")]
pub struct SeverityOutOfRange(pub u8);

/// Ordinal seriousness of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const fn level(self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Critical => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn from_level(level: u8) -> Result<Self, SeverityOutOfRange> {
        match level {
            1 => Ok(Severity::Low),
            2 => Ok(Severity::Medium),
            3 => Ok(Severity::High),
            4 => Ok(Severity::Critical),
            other => Err(SeverityOutOfRange(other)),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = SeverityOutOfRange;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Severity::from_level(level)
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.level()
    }
}

/// Point-in-time view of a violation as handed over by the violation store.
/// Immutable once verified; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationSnapshot {
    pub violation_id: ViolationId,
    pub vehicle: VehicleId,
    pub severity: Severity,
    pub occurred_at: DateTime<Utc>,
    pub is_verified: bool,
}

/// Payment lifecycle of an issued fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
    Waived,
}

impl PaymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Overdue => "overdue",
            PaymentStatus::Waived => "waived",
        }
    }
}

/// Fully computed fine together with the multipliers that explain it.
///
/// `final_amount = base_amount * severity_multiplier * repeat_offender_multiplier`
/// and `amount_after_discount = final_amount * (1 - discount_percentage / 100)`,
/// both rounded to currency precision. Only the payment fields change after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FineRecord {
    pub fine_id: FineId,
    pub violation_id: ViolationId,
    pub base_amount: Decimal,
    pub severity_multiplier: Decimal,
    pub repeat_offender_multiplier: Decimal,
    pub final_amount: Decimal,
    pub discount_percentage: u8,
    pub amount_after_discount: Decimal,
    pub payment_status: PaymentStatus,
    pub due_date: NaiveDate,
    pub issued_at: DateTime<Utc>,
}

impl FineRecord {
    /// A pending fine past its due date counts as overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.payment_status == PaymentStatus::Pending && self.due_date < today
    }
}
