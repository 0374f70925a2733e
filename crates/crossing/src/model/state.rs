//! `CrossingState`: origin, bridge and destination banks with checked transfers.

use serde::Serialize;

use super::bank::Bank;
use super::error::ContractViolation;
use super::types::{Participant, Side, BRIDGE_CAPACITY};

/// Who stands where. Cloning yields an independent snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CrossingState {
    origin: Bank,
    bridge: Bank,
    destination: Bank,
}

impl CrossingState {
    /// Everyone on the origin bank; bridge and destination empty.
    ///
    /// Fails if two participants share an id.
    pub fn new<I: IntoIterator<Item = Participant>>(
        participants: I,
    ) -> Result<Self, ContractViolation> {
        let origin =
            Bank::from_participants(participants).map_err(ContractViolation::on(Side::Origin))?;
        Ok(Self {
            origin,
            bridge: Bank::new(),
            destination: Bank::new(),
        })
    }

    #[inline]
    pub fn origin(&self) -> &Bank {
        &self.origin
    }

    #[inline]
    pub fn bridge(&self) -> &Bank {
        &self.bridge
    }

    #[inline]
    pub fn destination(&self) -> &Bank {
        &self.destination
    }

    pub fn bank(&self, side: Side) -> &Bank {
        match side {
            Side::Origin => &self.origin,
            Side::Bridge => &self.bridge,
            Side::Destination => &self.destination,
        }
    }

    /// Total participants across all three banks.
    pub fn population(&self) -> usize {
        self.origin.len() + self.bridge.len() + self.destination.len()
    }

    /// Fastest participant on `side`.
    pub fn fastest(&self, side: Side) -> Result<&Participant, ContractViolation> {
        self.bank(side).fastest().map_err(ContractViolation::on(side))
    }

    /// Slowest participant on `side`.
    pub fn slowest(&self, side: Side) -> Result<&Participant, ContractViolation> {
        self.bank(side).slowest().map_err(ContractViolation::on(side))
    }

    pub fn move_origin_to_bridge(&mut self, p: &Participant) -> Result<(), ContractViolation> {
        self.ensure_bridge_room()?;
        self.origin
            .transfer_to(p, &mut self.bridge)
            .map_err(ContractViolation::on(Side::Origin))
    }

    pub fn move_bridge_to_destination(&mut self, p: &Participant) -> Result<(), ContractViolation> {
        self.bridge
            .transfer_to(p, &mut self.destination)
            .map_err(ContractViolation::on(Side::Bridge))
    }

    pub fn move_destination_to_bridge(&mut self, p: &Participant) -> Result<(), ContractViolation> {
        self.ensure_bridge_room()?;
        self.destination
            .transfer_to(p, &mut self.bridge)
            .map_err(ContractViolation::on(Side::Destination))
    }

    pub fn move_bridge_to_origin(&mut self, p: &Participant) -> Result<(), ContractViolation> {
        self.bridge
            .transfer_to(p, &mut self.origin)
            .map_err(ContractViolation::on(Side::Bridge))
    }

    pub fn all_bridge_to_destination(&mut self) {
        self.bridge.transfer_all_to(&mut self.destination);
    }

    pub fn all_bridge_to_origin(&mut self) {
        self.bridge.transfer_all_to(&mut self.origin);
    }

    /// Time charged for the current bridge occupancy: the slowest occupant's
    /// crossing time, or 0 when nobody is on the bridge.
    pub fn bridge_duration(&self) -> f64 {
        self.bridge.slowest().map_or(0.0, Participant::time)
    }

    fn ensure_bridge_room(&self) -> Result<(), ContractViolation> {
        if self.bridge.len() >= BRIDGE_CAPACITY {
            return Err(ContractViolation::bridge_full());
        }
        Ok(())
    }
}
