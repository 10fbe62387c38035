//! A single exclusive fork.

use std::fmt;

use dp_core::{ForkId, PhilosopherId};

/// Who, if anyone, holds a fork.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum ForkStatus {
    #[default]
    Available,
    InUse(PhilosopherId),
}

impl ForkStatus {
    /// The holder, or `None` when the fork is free.
    #[inline]
    pub fn holder(self) -> Option<PhilosopherId> {
        match self {
            ForkStatus::Available  => None,
            ForkStatus::InUse(p)   => Some(p),
        }
    }
}

impl fmt::Display for ForkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForkStatus::Available => f.write_str("available"),
            ForkStatus::InUse(p)  => write!(f, "held by {p}"),
        }
    }
}

/// Outcome of [`Fork::try_acquire`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[must_use]
pub enum Acquire {
    /// The requester now holds the fork.
    Acquired,
    /// Someone already holds it; nothing changed.
    Busy { holder: PhilosopherId },
}

impl Acquire {
    #[inline]
    pub fn is_acquired(self) -> bool {
        matches!(self, Acquire::Acquired)
    }
}

/// Outcome of [`Fork::release`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[must_use]
pub enum Release {
    /// The fork is free again.
    Released,
    /// The requester did not hold the fork.  The fork was left untouched;
    /// `holder` is whoever holds it now (`None` if it was already free).
    NotHolder { holder: Option<PhilosopherId> },
}

impl Release {
    #[inline]
    pub fn is_released(self) -> bool {
        matches!(self, Release::Released)
    }
}

/// An exclusive resource with a free / held-by-X status.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Fork {
    id:     ForkId,
    status: ForkStatus,
}

impl Fork {
    pub fn new(id: ForkId) -> Self {
        Self { id, status: ForkStatus::Available }
    }

    #[inline]
    pub fn id(&self) -> ForkId {
        self.id
    }

    #[inline]
    pub fn status(&self) -> ForkStatus {
        self.status
    }

    #[inline]
    pub fn holder(&self) -> Option<PhilosopherId> {
        self.status.holder()
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == ForkStatus::Available
    }

    /// Take the fork if it is free.
    pub fn try_acquire(&mut self, requester: PhilosopherId) -> Acquire {
        match self.status {
            ForkStatus::Available => {
                self.status = ForkStatus::InUse(requester);
                Acquire::Acquired
            }
            ForkStatus::InUse(holder) => Acquire::Busy { holder },
        }
    }

    /// Put the fork back.  Only the holder may do so; any other request is
    /// logged and ignored.
    pub fn release(&mut self, requester: PhilosopherId) -> Release {
        match self.status {
            ForkStatus::InUse(holder) if holder == requester => {
                self.status = ForkStatus::Available;
                Release::Released
            }
            other => {
                let holder = other.holder();
                tracing::warn!(
                    fork = %self.id,
                    %requester,
                    holder = ?holder,
                    "release requested by a philosopher that does not hold the fork"
                );
                Release::NotHolder { holder }
            }
        }
    }

    /// Free the fork regardless of who holds it.  Returns the previous holder.
    ///
    /// Reserved for reset and cleanup paths.
    pub fn force_release(&mut self) -> Option<PhilosopherId> {
        std::mem::take(&mut self.status).holder()
    }
}
