//! Randomized ordering with probabilistic back-off.

use dp_core::config::DEFAULT_MAX_ATTEMPTS;
use dp_core::{ForkId, PhilosopherRng, Seat, StrategyKind};

use crate::ForkStrategy;

/// Chance of an early release after each failed attempt below the cap.
pub const DEFAULT_BACKOFF_PROBABILITY: f64 = 0.25;

/// Picks the first fork with a fair coin and may give up the held fork
/// before the cap.
///
/// The hard cap still applies: at `max_attempts` failures the fork is
/// always released, so hold time stays bounded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomizedStrategy {
    max_attempts:        u32,
    backoff_probability: f64,
}

impl RandomizedStrategy {
    pub fn new(max_attempts: u32) -> Self {
        Self::with_backoff(max_attempts, DEFAULT_BACKOFF_PROBABILITY)
    }

    /// `backoff_probability` is clamped to `[0, 1]`.
    pub fn with_backoff(max_attempts: u32, backoff_probability: f64) -> Self {
        Self {
            max_attempts:        max_attempts.max(1),
            backoff_probability: backoff_probability.clamp(0.0, 1.0),
        }
    }

    pub fn backoff_probability(&self) -> f64 {
        self.backoff_probability
    }
}

impl Default for RandomizedStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl ForkStrategy for RandomizedStrategy {
    fn first_fork(&self, seat: &Seat, rng: &mut PhilosopherRng) -> ForkId {
        if rng.gen_bool(0.5) { seat.left } else { seat.right }
    }

    fn should_release(&self, attempts: u32, rng: &mut PhilosopherRng) -> bool {
        if attempts >= self.max_attempts {
            return true;
        }
        attempts > 0 && rng.gen_bool(self.backoff_probability)
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Randomized
    }
}
