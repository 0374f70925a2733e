//! Roster loading: YAML participant lists into an initial `CrossingState`.
//!
//! Document shape
//! ```yaml
//! people:
//!   - name: A
//!     time: 1
//!   - name: B
//!     time: 2
//! ```
//!
//! Outcomes
//! - Unreadable file, YAML that does not parse, or an entry without `name`/`time`:
//!   `LoadError` (the caller aborts).
//! - Empty document or no `people` list: an empty roster plus a `RosterNotice`,
//!   logged at warn level. Nothing to cross is a legal input.
//! - A crossing time that is not finite and positive: `LoadError::InvalidEntry`.
//!
//! Ids are assigned 0.. in document order, per call.

pub mod rand;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::Value;
use thiserror::Error;
use tracing::warn;

use crate::model::{ContractViolation, CrossingState, Participant, ParticipantId};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("yaml parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("entry {index} ({name}): crossing time {time} is not a positive number")]
    InvalidEntry { index: usize, name: String, time: f64 },
}

/// Why a successfully parsed document produced no participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterNotice {
    EmptyDocument,
    MissingPeople,
}

/// Participants read from one document, in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    pub participants: Vec<Participant>,
    pub notice: Option<RosterNotice>,
}

impl Roster {
    fn degraded(notice: RosterNotice) -> Self {
        Self {
            participants: Vec::new(),
            notice: Some(notice),
        }
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Everyone on the origin bank. Fails only if the roster repeats an id.
    pub fn into_state(self) -> Result<CrossingState, ContractViolation> {
        CrossingState::new(self.participants)
    }
}

#[derive(Debug, Deserialize)]
struct RawPerson {
    name: String,
    time: f64,
}

/// The built-in four: A=1, B=2, C=5, D=10.
pub fn default_roster() -> Roster {
    let participants = [("A", 1.0), ("B", 2.0), ("C", 5.0), ("D", 10.0)]
        .into_iter()
        .enumerate()
        .map(|(id, (name, time))| Participant::new(ParticipantId(id), name, time))
        .collect();
    Roster {
        participants,
        notice: None,
    }
}

/// Read and parse the roster at `path`.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = parse_roster(&text)?;
    if let Some(notice) = roster.notice {
        warn!(path = %path.display(), ?notice, "roster has no participants");
    }
    Ok(roster)
}

/// Parse a roster document held in memory.
pub fn parse_roster(text: &str) -> Result<Roster, LoadError> {
    if text.trim().is_empty() {
        return Ok(Roster::degraded(RosterNotice::EmptyDocument));
    }
    let doc: Value = serde_yaml::from_str(text)?;
    if doc.is_null() {
        return Ok(Roster::degraded(RosterNotice::EmptyDocument));
    }
    let people = match doc.get("people") {
        Some(v) if !v.is_null() => v.clone(),
        _ => return Ok(Roster::degraded(RosterNotice::MissingPeople)),
    };
    let raw: Vec<RawPerson> = serde_yaml::from_value(people)?;

    let mut participants = Vec::with_capacity(raw.len());
    for (index, person) in raw.into_iter().enumerate() {
        if !(person.time.is_finite() && person.time > 0.0) {
            return Err(LoadError::InvalidEntry {
                index,
                name: person.name,
                time: person.time,
            });
        }
        participants.push(Participant::new(ParticipantId(index), person.name, person.time));
    }
    Ok(Roster {
        participants,
        notice: None,
    })
}

#[cfg(test)]
mod tests;
