//! Fine computation and reporter gamification engine.
//!
//! The engine turns a violation plus the offending vehicle's recent history
//! into a payable fine, and maintains reporter scores, badge tiers, and
//! daily leaderboards behind storage traits so the surrounding service can
//! bring its own persistence.

pub mod config;
pub mod engine;
pub mod error;
pub mod telemetry;
