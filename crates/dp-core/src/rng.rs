//! Deterministic per-philosopher RNG.
//!
//! Every seat draws from its own `SmallRng`, seeded from the table seed
//! and the seat id:
//!
//!   seed = table_seed ^ (seat_id * GOLDEN_GAMMA)
//!
//! Multiplying by the golden-ratio gamma scatters neighbouring seat ids far
//! apart in seed space.  Because no two seats share a stream:
//!
//! - the order seats are stepped in never changes what one seat draws;
//! - adding seats leaves the streams of the existing ones alone;
//! - a test can hand a philosopher a fixed-seed generator and know every
//!   think and eat duration in advance.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PhilosopherId;

/// 2^64 / phi, rounded to odd.
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-philosopher deterministic RNG.
///
/// Owned by the philosopher it was seeded for.  Strategies that need
/// randomness borrow it for the duration of one decision.
#[derive(Clone, Debug)]
pub struct PhilosopherRng(SmallRng);

impl PhilosopherRng {
    /// The stream for `philosopher` at a table seeded with `table_seed`.
    pub fn new(table_seed: u64, philosopher: PhilosopherId) -> Self {
        let seed = table_seed ^ (philosopher.0 as u64).wrapping_mul(GOLDEN_GAMMA);
        PhilosopherRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed directly, bypassing the per-seat mixing.
    pub fn from_seed(seed: u64) -> Self {
        PhilosopherRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
