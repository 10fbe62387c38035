//! Ring adjacency.
//!
//! Philosopher `i` in a ring of `n` owns `left = fork i` and
//! `right = fork (i + 1) mod n`.  Every component that needs to know which
//! forks a philosopher may touch goes through [`Seat`] so the rule lives in
//! one place.

use crate::{ForkId, PhilosopherId};

/// A philosopher's position at the table and its two adjacent forks.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Seat {
    pub id:    PhilosopherId,
    pub left:  ForkId,
    pub right: ForkId,
}

impl Seat {
    /// Seat for philosopher `id` in a ring of `ring_size` forks.
    ///
    /// # Panics
    /// Panics if `ring_size` is zero.  Table construction rejects rings
    /// smaller than two before any seat is built.
    pub fn new(id: PhilosopherId, ring_size: usize) -> Self {
        assert!(ring_size > 0, "ring must contain at least one fork");
        let n = ring_size as u32;
        Self {
            id,
            left:  ForkId(id.0 % n),
            right: ForkId((id.0 + 1) % n),
        }
    }

    /// All seats of a ring, in ascending id order.
    pub fn ring(ring_size: usize) -> impl Iterator<Item = Seat> {
        (0..ring_size as u32).map(move |i| Seat::new(PhilosopherId(i), ring_size))
    }

    /// `true` if `fork` is one of this seat's two forks.
    #[inline]
    pub fn is_adjacent(&self, fork: ForkId) -> bool {
        fork == self.left || fork == self.right
    }

    /// The adjacent fork that is not `fork`.
    ///
    /// For a non-adjacent `fork` this returns `left`; callers only pass a
    /// fork they already hold.
    #[inline]
    pub fn other(&self, fork: ForkId) -> ForkId {
        if fork == self.left { self.right } else { self.left }
    }

    /// Both forks as `[left, right]`.
    #[inline]
    pub fn forks(&self) -> [ForkId; 2] {
        [self.left, self.right]
    }
}
