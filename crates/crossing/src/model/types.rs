//! Leaf types: participant identity, bank sides, and the bridge capacity.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// Maximum number of participants allowed on the bridge at once.
pub const BRIDGE_CAPACITY: usize = 2;

/// Sequential id assigned at load time; unique within one run even when names collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ParticipantId(pub usize);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One person and their crossing time. Immutable once built.
///
/// Identity is the `id`: equality ignores `name` and `time`. Speed order is
/// given by `speed_key`.
#[derive(Clone, Debug, Serialize)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    time: f64,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>, time: f64) -> Self {
        Self {
            id,
            name: name.into(),
            time,
        }
    }

    #[inline]
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Time this participant needs to cross alone.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn speed_key(&self) -> SpeedKey {
        SpeedKey {
            time: self.time,
            id: self.id,
        }
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Participant {}

/// Sort key for speed order: crossing time (fastest first), ties broken by id.
#[derive(Clone, Copy, Debug)]
pub struct SpeedKey {
    time: f64,
    id: ParticipantId,
}

impl PartialEq for SpeedKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SpeedKey {}

impl PartialOrd for SpeedKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SpeedKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .total_cmp(&other.time)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The three places a participant can stand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Origin,
    Bridge,
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Origin => "origin",
            Side::Bridge => "bridge",
            Side::Destination => "destination",
        })
    }
}
