//! Thread-safe fork.
//!
//! The turn-based table needs no locking: one stepper mutates every fork in a
//! single sequential pass.  When philosophers run on real threads each fork's
//! status transition must be its own critical section, otherwise two threads
//! can both observe `Available` and both take the fork.  `SharedFork` makes
//! every operation one `Mutex` acquisition.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dp_core::{ForkId, PhilosopherId};

use crate::{Acquire, Fork, ForkStatus, Release};

/// A [`Fork`] behind an `Arc<Mutex<_>>`.  Cloning shares the same fork.
#[derive(Clone, Debug)]
pub struct SharedFork {
    inner: Arc<Mutex<Fork>>,
}

impl SharedFork {
    pub fn new(id: ForkId) -> Self {
        Self { inner: Arc::new(Mutex::new(Fork::new(id))) }
    }

    // A panic while holding the lock cannot leave a fork half-updated: every
    // mutation is a single field assignment.  Recover the guard instead of
    // propagating the poison.
    fn lock(&self) -> MutexGuard<'_, Fork> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id(&self) -> ForkId {
        self.lock().id()
    }

    pub fn status(&self) -> ForkStatus {
        self.lock().status()
    }

    pub fn try_acquire(&self, requester: PhilosopherId) -> Acquire {
        self.lock().try_acquire(requester)
    }

    pub fn release(&self, requester: PhilosopherId) -> Release {
        self.lock().release(requester)
    }

    pub fn force_release(&self) -> Option<PhilosopherId> {
        self.lock().force_release()
    }
}
