//! Seeded random rosters for property tests and benchmarks.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//! the same token always yields the same roster.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Roster;
use crate::model::{Participant, ParticipantId};

/// Roster sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RosterCfg {
    pub min_people: usize,
    pub max_people: usize,
    /// Crossing times are drawn uniformly from `[min_time, max_time]`.
    /// A non-finite `max_time` pins every time to `min_time`.
    pub min_time: f64,
    pub max_time: f64,
    /// Round times to whole numbers (keeps totals exact for comparisons).
    pub whole_times: bool,
}

impl Default for RosterCfg {
    fn default() -> Self {
        Self {
            min_people: 0,
            max_people: 12,
            min_time: 1.0,
            max_time: 20.0,
            whole_times: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a roster of positive crossing times. Names are `P0`, `P1`, ...
pub fn draw_roster(cfg: RosterCfg, tok: ReplayToken) -> Roster {
    let mut rng = tok.to_std_rng();
    let lo = cfg.min_people.min(cfg.max_people);
    let n = rng.gen_range(lo..=cfg.max_people);
    // Non-finite bounds collapse onto the other bound (or 1.0).
    let t_lo = if cfg.min_time.is_finite() {
        cfg.min_time.max(f64::MIN_POSITIVE)
    } else {
        1.0
    };
    let t_hi = if cfg.max_time.is_finite() {
        cfg.max_time.max(t_lo)
    } else {
        t_lo
    };
    let participants = (0..n)
        .map(|i| {
            let mut t = rng.gen_range(t_lo..=t_hi);
            if cfg.whole_times {
                t = t.round().max(1.0);
            }
            Participant::new(ParticipantId(i), format!("P{i}"), t)
        })
        .collect();
    Roster {
        participants,
        notice: None,
    }
}
