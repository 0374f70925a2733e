//! Bridge-and-torch crossing model and schedule.
//!
//! A group starts on the origin bank. At most two people may be on the bridge
//! at once, a pair moves at the slower member's pace, and someone must bring
//! the light back after each forward trip. This crate models who stands where,
//! records every intermediate state, and computes a schedule with the classic
//! courier greedy.
//!
//! Layout
//! - `model`: `Participant`, `Bank`, `CrossingState` and checked transfers.
//! - `history`: `CrossingLog` snapshots, total time, derived trips.
//! - `strategy`: the `Strategy` capability and `GreedyStrategy`.
//! - `roster`: YAML loading, the built-in default roster, seeded random rosters.

pub mod history;
pub mod model;
pub mod roster;
pub mod strategy;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use history::{CrossingLog, Direction, Trip};
pub use model::{
    Bank, BankError, ContractViolation, CrossingState, Participant, ParticipantId, Side, SpeedKey,
    BRIDGE_CAPACITY,
};
pub use roster::{default_roster, load_roster, parse_roster, LoadError, Roster, RosterNotice};
pub use strategy::{solve_greedy, GreedyStrategy, Strategy};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::history::{CrossingLog, Direction, Trip};
    pub use crate::model::{CrossingState, Participant, ParticipantId, Side};
    pub use crate::roster::rand::{draw_roster, ReplayToken, RosterCfg};
    pub use crate::roster::{default_roster, load_roster, Roster};
    pub use crate::strategy::{GreedyStrategy, Strategy};
}
