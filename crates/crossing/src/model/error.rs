//! Contract-violation errors raised by bank and state transfers.

use thiserror::Error;

use super::types::{ParticipantId, Side, BRIDGE_CAPACITY};

/// Precondition failure on a single bank.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("participant {id} is not in this bank")]
    Missing { id: ParticipantId },
    #[error("participant {id} is already in this bank")]
    Duplicate { id: ParticipantId },
    #[error("bank is empty")]
    Empty,
}

/// A strategy broke the crossing rules. Fatal to the run that raised it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("bridge already holds {capacity} participants")]
    BridgeFull { capacity: usize },
    #[error("{side} bank: {source}")]
    Bank {
        side: Side,
        #[source]
        source: BankError,
    },
}

impl ContractViolation {
    pub(crate) fn bridge_full() -> Self {
        Self::BridgeFull {
            capacity: BRIDGE_CAPACITY,
        }
    }

    pub(crate) fn on(side: Side) -> impl FnOnce(BankError) -> Self {
        move |source| Self::Bank { side, source }
    }
}
