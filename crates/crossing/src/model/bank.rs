//! `Bank`: participants kept in speed order, indexed by id.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::error::BankError;
use super::types::{Participant, ParticipantId, SpeedKey};

/// Participants standing in one place.
///
/// Each id appears at most once. Lookups go by id; iteration and
/// fastest/slowest go by speed. Equality is set equality by id.
#[derive(Clone, Debug, Default)]
pub struct Bank {
    members: BTreeMap<SpeedKey, Participant>,
    by_id: BTreeMap<ParticipantId, SpeedKey>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bank, rejecting repeated ids.
    pub fn from_participants<I>(participants: I) -> Result<Self, BankError>
    where
        I: IntoIterator<Item = Participant>,
    {
        let mut bank = Self::new();
        for p in participants {
            let id = p.id();
            if !bank.insert(p) {
                return Err(BankError::Duplicate { id });
            }
        }
        Ok(bank)
    }

    /// Add `p`. Returns false (and changes nothing) if its id is already here.
    pub fn insert(&mut self, p: Participant) -> bool {
        if self.by_id.contains_key(&p.id()) {
            return false;
        }
        let key = p.speed_key();
        self.by_id.insert(p.id(), key);
        self.members.insert(key, p);
        true
    }

    /// Take the member with `p`'s id out of this bank.
    pub fn remove(&mut self, p: &Participant) -> Result<Participant, BankError> {
        let id = p.id();
        self.by_id
            .remove(&id)
            .and_then(|key| self.members.remove(&key))
            .ok_or(BankError::Missing { id })
    }

    /// Move `p` from this bank into `to`. Nothing changes on either side if `p`
    /// is absent here or its id is already in `to`.
    pub fn transfer_to(&mut self, p: &Participant, to: &mut Bank) -> Result<(), BankError> {
        if to.contains(p) {
            return Err(BankError::Duplicate { id: p.id() });
        }
        let p = self.remove(p)?;
        to.insert(p);
        Ok(())
    }

    /// Move every member into `to`, slowest first.
    pub fn transfer_all_to(&mut self, to: &mut Bank) {
        while let Some((_, p)) = self.members.pop_last() {
            self.by_id.remove(&p.id());
            let inserted = to.insert(p);
            debug_assert!(inserted, "banks of one state never share an id");
        }
    }

    /// Member with the smallest crossing time.
    pub fn fastest(&self) -> Result<&Participant, BankError> {
        self.members
            .first_key_value()
            .map(|(_, p)| p)
            .ok_or(BankError::Empty)
    }

    /// Member with the largest crossing time.
    pub fn slowest(&self) -> Result<&Participant, BankError> {
        self.members
            .last_key_value()
            .map(|(_, p)| p)
            .ok_or(BankError::Empty)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True iff a member with `p`'s id is here.
    pub fn contains(&self, p: &Participant) -> bool {
        self.by_id.contains_key(&p.id())
    }

    /// Members in speed order, fastest first.
    pub fn members(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.members.values()
    }
}

impl PartialEq for Bank {
    fn eq(&self, other: &Self) -> bool {
        self.by_id.keys().eq(other.by_id.keys())
    }
}

impl Eq for Bank {}

impl Serialize for Bank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.members.values())
    }
}
