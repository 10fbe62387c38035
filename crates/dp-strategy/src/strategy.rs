//! The `ForkStrategy` trait: the policy seam on the strategy path.

use std::sync::Arc;

use dp_core::{ForkId, PhilosopherRng, Seat, StrategyKind};

use crate::{OrderedStrategy, PriorityStrategy, RandomizedStrategy};

/// Decides, for one philosopher, which fork to request first and second and
/// when to give up a half-acquired pair.
///
/// The philosopher state machine calls these at fixed points:
///
/// 1. Hungry with no forks → [`first_fork`][Self::first_fork].
/// 2. Hungry with one fork → [`second_fork`][Self::second_fork].
/// 3. Second request failed → [`should_release`][Self::should_release] with
///    the running count of failed attempts.
///
/// Strategies hold no per-philosopher state; anything random is drawn from the
/// philosopher's own [`PhilosopherRng`].  A single instance can therefore be
/// shared by the whole table, and the trait is `Send + Sync` so the same
/// instance can serve philosophers on separate threads.
pub trait ForkStrategy: Send + Sync + 'static {
    /// The fork to request when holding none.
    fn first_fork(&self, seat: &Seat, rng: &mut PhilosopherRng) -> ForkId;

    /// The fork to request while holding `held`: always the other adjacent one.
    fn second_fork(&self, seat: &Seat, held: ForkId) -> ForkId {
        seat.other(held)
    }

    /// Whether to put the held fork back after `attempts` failed requests for
    /// the second one.
    fn should_release(&self, attempts: u32, rng: &mut PhilosopherRng) -> bool;

    /// Configured cap on failed attempts.
    fn max_attempts(&self) -> u32;

    /// Tag naming this policy.
    fn kind(&self) -> StrategyKind;
}

/// Construct the policy named by `kind`, shareable across a table.
///
/// `max_attempts` below 1 is raised to 1.
pub fn build_strategy(kind: StrategyKind, max_attempts: u32) -> Arc<dyn ForkStrategy> {
    match kind {
        StrategyKind::Ordered    => Arc::new(OrderedStrategy::new(max_attempts)),
        StrategyKind::Randomized => Arc::new(RandomizedStrategy::new(max_attempts)),
        StrategyKind::Priority   => Arc::new(PriorityStrategy::new(max_attempts)),
    }
}
