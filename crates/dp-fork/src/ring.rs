//! `ForkRing`: every fork at one table, indexed by `ForkId`.

use std::ops::{Index, IndexMut};

use dp_core::{ForkId, PhilosopherId};

use crate::{Fork, ForkStatus};

/// Arena of `n` forks.  Fork ids are dense `0..n`, so lookups are plain
/// `Vec` indexing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ForkRing {
    forks: Vec<Fork>,
}

impl ForkRing {
    /// Create `count` available forks with ids `0..count`.
    pub fn new(count: usize) -> Self {
        let forks = (0..count as u32).map(|i| Fork::new(ForkId(i))).collect();
        Self { forks }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.forks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forks.is_empty()
    }

    #[inline]
    pub fn get(&self, id: ForkId) -> Option<&Fork> {
        self.forks.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: ForkId) -> Option<&mut Fork> {
        self.forks.get_mut(id.index())
    }

    /// Iterator over all forks in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Fork> + '_ {
        self.forks.iter()
    }

    /// `(id, status)` for every fork, in id order.
    pub fn statuses(&self) -> Vec<(ForkId, ForkStatus)> {
        self.forks.iter().map(|f| (f.id(), f.status())).collect()
    }

    /// Number of forks currently held by someone.
    pub fn in_use_count(&self) -> usize {
        self.forks.iter().filter(|f| !f.is_available()).count()
    }

    /// Forks currently held by `philosopher`, in id order.
    pub fn held_by(&self, philosopher: PhilosopherId) -> Vec<ForkId> {
        self.forks
            .iter()
            .filter(|f| f.holder() == Some(philosopher))
            .map(Fork::id)
            .collect()
    }

    /// Return every fork to `Available`, whoever held it.
    pub fn force_release_all(&mut self) {
        for fork in &mut self.forks {
            fork.force_release();
        }
    }
}

impl Index<ForkId> for ForkRing {
    type Output = Fork;
    #[inline]
    fn index(&self, id: ForkId) -> &Fork {
        &self.forks[id.index()]
    }
}

impl IndexMut<ForkId> for ForkRing {
    #[inline]
    fn index_mut(&mut self, id: ForkId) -> &mut Fork {
        &mut self.forks[id.index()]
    }
}
