//! Parity-ordered acquisition.

use dp_core::config::DEFAULT_MAX_ATTEMPTS;
use dp_core::{ForkId, PhilosopherRng, Seat, StrategyKind};

use crate::ForkStrategy;

/// Even seats take their left fork first, odd seats their right.
///
/// An odd seat and the even seat after it reach for the fork between them
/// first; whoever loses that race holds nothing, so no ring-wide cycle of
/// "hold one, wait for the next" can form.  The held fork is released once
/// `max_attempts` requests for the second have failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OrderedStrategy {
    max_attempts: u32,
}

impl OrderedStrategy {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts: max_attempts.max(1) }
    }
}

impl Default for OrderedStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl ForkStrategy for OrderedStrategy {
    fn first_fork(&self, seat: &Seat, _rng: &mut PhilosopherRng) -> ForkId {
        if seat.id.is_even() { seat.left } else { seat.right }
    }

    fn should_release(&self, attempts: u32, _rng: &mut PhilosopherRng) -> bool {
        attempts >= self.max_attempts
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Ordered
    }
}
