//! Crossing strategies.
//!
//! A strategy turns an initial `CrossingState` into a complete `CrossingLog`.
//! Strategies work on their own copy of the input and never mutate it.

mod greedy;

pub use greedy::GreedyStrategy;

use crate::history::CrossingLog;
use crate::model::{ContractViolation, CrossingState};

/// Pluggable solver over the crossing model.
pub trait Strategy {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Produce the full move history starting from `initial`.
    ///
    /// Errors only if the strategy breaks a crossing rule; no partial log is returned.
    fn solve(&self, initial: &CrossingState) -> Result<CrossingLog, ContractViolation>;
}

/// Convenience: run the greedy strategy on `initial`.
pub fn solve_greedy(initial: &CrossingState) -> Result<CrossingLog, ContractViolation> {
    GreedyStrategy.solve(initial)
}

#[cfg(test)]
mod tests;
