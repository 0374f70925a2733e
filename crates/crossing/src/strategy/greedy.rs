//! Courier-based greedy schedule.
//!
//! Each pass sends the two fastest across as couriers, brings one back, sends
//! the two slowest across together, then brings the other courier back. Every
//! slow crossing carries two people and every return is made by the fastest
//! person on the far side.

use tracing::debug;

use super::Strategy;
use crate::history::CrossingLog;
use crate::model::{ContractViolation, CrossingState, Side};

#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, initial: &CrossingState) -> Result<CrossingLog, ContractViolation> {
        GreedyRunner::new(initial).run()
    }
}

/// Steps of one pass. `Done` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    SendCouriers,
    CheckDone,
    RetrieveCourier,
    SendSlowestPair,
    RetrieveSecondCourier,
    Done,
}

/// Working state and history for a single run.
struct GreedyRunner {
    state: CrossingState,
    log: CrossingLog,
}

impl GreedyRunner {
    fn new(initial: &CrossingState) -> Self {
        Self {
            state: initial.clone(),
            log: CrossingLog::new(),
        }
    }

    fn run(mut self) -> Result<CrossingLog, ContractViolation> {
        self.snap();
        match self.state.origin().len() {
            0 => return Ok(self.log),
            1 => {
                self.send_fastest_alone()?;
                return Ok(self.log);
            }
            _ => {}
        }

        let mut phase = Phase::SendCouriers;
        while phase != Phase::Done {
            debug!(?phase, remaining = self.state.origin().len(), "greedy step");
            phase = match phase {
                Phase::SendCouriers => {
                    self.send_couriers()?;
                    Phase::CheckDone
                }
                Phase::CheckDone if self.origin_empty() => Phase::Done,
                Phase::CheckDone => Phase::RetrieveCourier,
                Phase::RetrieveCourier => {
                    self.retrieve_fastest()?;
                    Phase::SendSlowestPair
                }
                Phase::SendSlowestPair => {
                    self.send_slowest_pair()?;
                    Phase::RetrieveSecondCourier
                }
                Phase::RetrieveSecondCourier if self.origin_empty() => Phase::Done,
                Phase::RetrieveSecondCourier => {
                    self.retrieve_fastest()?;
                    Phase::SendCouriers
                }
                Phase::Done => Phase::Done,
            };
        }
        debug!(
            snapshots = self.log.len(),
            total = self.log.total_time(),
            "greedy finished"
        );
        Ok(self.log)
    }

    fn snap(&mut self) {
        self.log.record(&self.state);
    }

    fn origin_empty(&self) -> bool {
        self.state.origin().is_empty()
    }

    fn fastest_origin_to_bridge(&mut self) -> Result<(), ContractViolation> {
        let p = self.state.fastest(Side::Origin)?.clone();
        self.state.move_origin_to_bridge(&p)
    }

    fn slowest_origin_to_bridge(&mut self) -> Result<(), ContractViolation> {
        let p = self.state.slowest(Side::Origin)?.clone();
        self.state.move_origin_to_bridge(&p)
    }

    fn fastest_destination_to_bridge(&mut self) -> Result<(), ContractViolation> {
        let p = self.state.fastest(Side::Destination)?.clone();
        self.state.move_destination_to_bridge(&p)
    }

    fn cross_forward(&mut self) {
        self.snap();
        self.state.all_bridge_to_destination();
        self.snap();
    }

    fn send_fastest_alone(&mut self) -> Result<(), ContractViolation> {
        self.fastest_origin_to_bridge()?;
        self.cross_forward();
        Ok(())
    }

    fn send_couriers(&mut self) -> Result<(), ContractViolation> {
        self.fastest_origin_to_bridge()?;
        self.fastest_origin_to_bridge()?;
        self.cross_forward();
        Ok(())
    }

    fn retrieve_fastest(&mut self) -> Result<(), ContractViolation> {
        self.fastest_destination_to_bridge()?;
        self.snap();
        self.state.all_bridge_to_origin();
        self.snap();
        Ok(())
    }

    fn send_slowest_pair(&mut self) -> Result<(), ContractViolation> {
        self.slowest_origin_to_bridge()?;
        self.slowest_origin_to_bridge()?;
        self.cross_forward();
        Ok(())
    }
}
