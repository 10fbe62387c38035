//! The forks one philosopher currently holds.

use dp_core::ForkId;

/// Up to two distinct forks, in pickup order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct HeldForks([Option<ForkId>; 2]);

impl HeldForks {
    #[inline]
    pub fn count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    #[inline]
    pub fn contains(&self, fork: ForkId) -> bool {
        self.0.contains(&Some(fork))
    }

    /// The earliest-picked fork still held.
    #[inline]
    pub fn first(&self) -> Option<ForkId> {
        self.iter().next()
    }

    /// Record `fork`.  Returns `false` if it is already held or both hands are
    /// full.
    pub fn insert(&mut self, fork: ForkId) -> bool {
        if self.contains(fork) {
            return false;
        }
        match self.0.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(fork);
                true
            }
            None => false,
        }
    }

    /// Forget `fork`.  Returns `false` if it was not held.
    pub fn remove(&mut self, fork: ForkId) -> bool {
        match self.0.iter_mut().find(|slot| **slot == Some(fork)) {
            Some(slot) => {
                *slot = None;
                // Keep the remaining fork in the first slot.
                self.0.sort_by_key(|s| s.is_none());
                true
            }
            None => false,
        }
    }

    /// Remove and return everything held.
    pub fn take(&mut self) -> HeldForks {
        std::mem::take(self)
    }

    pub fn iter(&self) -> impl Iterator<Item = ForkId> + '_ {
        self.0.iter().flatten().copied()
    }

    pub fn to_vec(&self) -> Vec<ForkId> {
        self.iter().collect()
    }
}
