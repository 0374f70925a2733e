//! Crossing-state model: participants, banks, and the tri-partition.
//!
//! Purpose
//! - Hold who stands where (origin bank, bridge, destination bank) as plain
//!   owned values, so a snapshot is a cheap independent copy.
//! - Expose transfers as the only way to mutate a `CrossingState`; every
//!   transfer is checked before it touches either bank.
//!
//! Invariants
//! - The three banks partition the participant set (no drops, no duplicates).
//! - The bridge never holds more than `BRIDGE_CAPACITY` participants.
//!
//! Violations surface as `ContractViolation` errors rather than panics, so a
//! misbehaving strategy aborts its own run and tests can assert on it.

mod bank;
mod error;
mod state;
mod types;

pub use bank::Bank;
pub use error::{BankError, ContractViolation};
pub use state::CrossingState;
pub use types::{Participant, ParticipantId, Side, SpeedKey, BRIDGE_CAPACITY};
