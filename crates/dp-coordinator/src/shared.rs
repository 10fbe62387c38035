//! Thread-safe coordinator.
//!
//! "Check both forks free, then assign both" must be one critical section
//! when philosophers run on real threads; otherwise two neighbours can each
//! see their shared fork free and both be granted it.  `SharedCoordinator`
//! puts the whole `Coordinator` (holder map and waiting set together) behind
//! one `Mutex`, so every request and release is atomic.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dp_core::{ForkId, PhilosopherId};

use crate::{Coordinator, CoordinatorResult, Grant};

/// A [`Coordinator`] shared between threads.  Cloning shares the same arbiter.
#[derive(Clone, Debug)]
pub struct SharedCoordinator {
    inner: Arc<Mutex<Coordinator>>,
}

impl SharedCoordinator {
    /// Wrap a coordinator whose registrations are already complete.
    pub fn new(coordinator: Coordinator) -> Self {
        Self { inner: Arc::new(Mutex::new(coordinator)) }
    }

    fn lock(&self) -> MutexGuard<'_, Coordinator> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn request_to_eat(&self, id: PhilosopherId) -> CoordinatorResult<Vec<Grant>> {
        self.lock().request_to_eat(id)
    }

    pub fn release_forks(&self, id: PhilosopherId) -> CoordinatorResult<Vec<Grant>> {
        self.lock().release_forks(id)
    }

    pub fn detect_deadlock(&self) -> bool {
        self.lock().detect_deadlock()
    }

    pub fn holder(&self, fork: ForkId) -> Option<PhilosopherId> {
        self.lock().holder(fork)
    }

    pub fn held_by(&self, id: PhilosopherId) -> Vec<ForkId> {
        self.lock().held_by(id)
    }

    pub fn is_waiting(&self, id: PhilosopherId) -> bool {
        self.lock().is_waiting(id)
    }

    /// Run `f` against the coordinator while holding the lock.
    pub fn with<T>(&self, f: impl FnOnce(&Coordinator) -> T) -> T {
        f(&self.lock())
    }
}
