//! Discrete simulation time.
//!
//! The table advances in whole ticks.  There is no wall clock anywhere in the
//! core: think/eat durations and back-off are step counts.

use std::fmt;

use crate::PhilosopherRng;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── DurationRange ─────────────────────────────────────────────────────────────

/// Half-open range `[min, max)` of tick counts a timed state may last.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationRange {
    pub min: u32,
    pub max: u32,
}

impl DurationRange {
    #[inline]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// `true` if the range can be sampled and never yields zero.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min >= 1 && self.min < self.max
    }

    /// Draw a duration uniformly from `[min, max)`.
    ///
    /// # Panics
    /// Panics if the range is empty; `TableConfig::validate` rules that out.
    #[inline]
    pub fn sample(&self, rng: &mut PhilosopherRng) -> u32 {
        rng.gen_range(self.min..self.max)
    }
}

impl fmt::Display for DurationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}
