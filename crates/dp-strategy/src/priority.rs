//! Resource-hierarchy acquisition.

use dp_core::config::DEFAULT_MAX_ATTEMPTS;
use dp_core::{ForkId, PhilosopherRng, Seat, StrategyKind};

use crate::ForkStrategy;

/// Forks are ranked by id and always taken lowest first.
///
/// Every philosopher except the last takes its left fork first; the last one,
/// whose right fork wraps to `F0`, takes its right fork first.  A total order
/// on resources rules out a wait-for cycle outright.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PriorityStrategy {
    max_attempts: u32,
}

impl PriorityStrategy {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts: max_attempts.max(1) }
    }
}

impl Default for PriorityStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl ForkStrategy for PriorityStrategy {
    fn first_fork(&self, seat: &Seat, _rng: &mut PhilosopherRng) -> ForkId {
        seat.left.min(seat.right)
    }

    fn should_release(&self, attempts: u32, _rng: &mut PhilosopherRng) -> bool {
        attempts >= self.max_attempts
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Priority
    }
}
