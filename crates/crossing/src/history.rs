//! `CrossingLog`: append-only history of state snapshots.
//!
//! The log owns copies of every recorded state, so later mutation of the live
//! state cannot rewrite history. Total time and the trip list are derived from
//! the stored snapshots on demand.

use serde::Serialize;

use crate::model::{CrossingState, Participant};

/// Which way a trip went over the bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Return,
}

/// One bridge occupancy derived from the log.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trip {
    pub direction: Direction,
    /// Occupants in speed order.
    pub participants: Vec<Participant>,
    pub duration: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CrossingLog {
    snapshots: Vec<CrossingState>,
}

impl CrossingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `state`.
    pub fn record(&mut self, state: &CrossingState) {
        self.snapshots.push(state.clone());
    }

    /// Sum of `bridge_duration` over every snapshot.
    pub fn total_time(&self) -> f64 {
        self.snapshots.iter().map(CrossingState::bridge_duration).sum()
    }

    /// Elapsed time after each snapshot; same length as `snapshots()`.
    pub fn cumulative_times(&self) -> Vec<f64> {
        self.snapshots
            .iter()
            .scan(0.0, |acc, s| {
                *acc += s.bridge_duration();
                Some(*acc)
            })
            .collect()
    }

    /// True iff some recorded snapshot equals `state`.
    ///
    /// Unused by the greedy strategy; cycle detection for search strategies.
    pub fn has_occurred(&self, state: &CrossingState) -> bool {
        self.snapshots.iter().any(|s| s == state)
    }

    pub fn snapshots(&self) -> &[CrossingState] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last(&self) -> Option<&CrossingState> {
        self.snapshots.last()
    }

    /// Bridge crossings in order. A snapshot with a non-empty bridge is one
    /// trip; it is `Forward` if its occupants stood on the origin bank in the
    /// preceding snapshot.
    pub fn trips(&self) -> Vec<Trip> {
        let mut out = Vec::new();
        for (i, snap) in self.snapshots.iter().enumerate() {
            let Ok(lead) = snap.bridge().fastest() else {
                continue;
            };
            let direction = match i.checked_sub(1).map(|j| &self.snapshots[j]) {
                Some(prev) if !prev.origin().contains(lead) => Direction::Return,
                _ => Direction::Forward,
            };
            out.push(Trip {
                direction,
                participants: snap.bridge().members().cloned().collect(),
                duration: snap.bridge_duration(),
            });
        }
        out
    }
}
