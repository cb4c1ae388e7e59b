//! Seeds for the multiply-with-carry generator.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Last clock tick handed out by [clock_ticks].
static LAST_TICK: AtomicU64 = AtomicU64::new(0);

/// Read the wall clock as nanoseconds since the Unix epoch.
///
/// Ticks are strictly increasing across the process: a call landing in the
/// same clock granule as the previous one gets the previous tick plus one.
pub fn clock_ticks() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
        .unwrap_or(0);
    let previous = LAST_TICK
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| Some(now.max(last.saturating_add(1))))
        .unwrap_or_else(|last| last);
    now.max(previous.saturating_add(1))
}

/// Pair of optional seed words for a [crate::MultiplyWithCarry].
///
/// `u` feeds the 18000-multiplier lane and `v` the 36969-multiplier lane.
/// A missing word is taken from the wall clock when the seed is resolved.
/// A zero word, or one that would pin its lane to a fixed point, never
/// overwrites generator state.
///
/// # Example
/// ```
/// use simvariate::Seed;
///
/// let seed = Seed::new(12345, 67890);
/// assert_eq!(seed.resolve(), (12345, 67890));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Seed {
    /// Seed for the first lane
    pub u: Option<u32>,
    /// Seed for the second lane
    pub v: Option<u32>,
}

impl Seed {
    /// Create an explicit seed pair.
    pub fn new(u: u32, v: u32) -> Self {
        Self { u: Some(u), v: Some(v) }
    }

    /// Create a seed pair from the current clock reading.
    pub fn from_clock() -> Self {
        let ticks = clock_ticks();
        Self::new((ticks >> 16) as u32, ticks as u32)
    }

    /// Whether both words are given explicitly.
    pub fn is_explicit(&self) -> bool {
        self.u.is_some() && self.v.is_some()
    }

    /// Resolve the seed into concrete words, reading the clock for missing ones.
    pub fn resolve(&self) -> (u32, u32) {
        match (self.u, self.v) {
            (Some(u), Some(v)) => (u, v),
            (u, v) => {
                let (cu, cv) = Self::from_clock().resolve();
                (u.unwrap_or(cu), v.unwrap_or(cv))
            }
        }
    }
}

impl From<(u32, u32)> for Seed {
    fn from((u, v): (u32, u32)) -> Self {
        Self::new(u, v)
    }
}

/// When a [crate::distributions::Uniform] stream takes a new seed from the clock.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReseedPolicy {
    /// Seed once at construction and let the recurrence evolve.
    #[default]
    Once,
    /// Reseed from the clock before every draw. Output is not reproducible.
    EveryDraw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_ticks_strictly_increase() {
        let mut last = clock_ticks();
        for _ in 0..10_000 {
            let next = clock_ticks();
            assert!(next > last, "tick {next} not after {last}");
            last = next;
        }
    }

    #[test]
    fn clock_seeds_differ_between_calls() {
        let a = Seed::from_clock();
        let b = Seed::from_clock();
        assert!(a.is_explicit() && b.is_explicit());
        assert_ne!(a.v, b.v, "two clock seeds share the low word");
    }

    #[test]
    fn resolve_keeps_explicit_words() {
        let seed = Seed { u: Some(7), v: None };
        let (u, _) = seed.resolve();
        assert_eq!(u, 7);

        let seed = Seed { u: None, v: Some(9) };
        let (_, v) = seed.resolve();
        assert_eq!(v, 9);
    }

    #[test]
    fn default_seed_is_clock_derived() {
        let seed = Seed::default();
        assert!(!seed.is_explicit());
        assert_eq!(seed, Seed { u: None, v: None });
    }

    #[test]
    fn from_tuple() {
        assert_eq!(Seed::from((1, 2)), Seed::new(1, 2));
    }

    #[test]
    fn default_policy_is_once() {
        assert_eq!(ReseedPolicy::default(), ReseedPolicy::Once);
    }
}
