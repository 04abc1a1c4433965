//! Fine computation for confirmed violations.
//!
//! The calculator is a pure function of severity, base amount, and the
//! vehicle's repeat-offense count; the service wires in the violation-store
//! history lookup and an injected clock to assign identifiers and due
//! dates.

pub(crate) mod calculation;
pub mod domain;
pub mod history;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use calculation::{FineCalculator, FineDraft, FineInputError, FinePolicy};
pub use domain::{
    FineId, FineRecord, PaymentStatus, Severity, SeverityOutOfRange, VehicleId, ViolationId,
    ViolationSnapshot,
};
pub use history::{HistoryError, ViolationHistory};
pub use router::fine_router;
pub use service::{FineService, FineServiceError};
