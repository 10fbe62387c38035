//! What a single step did.

use std::fmt;

use dp_coordinator::Grant;
use dp_core::{ForkId, PhilosopherId};

/// One observable effect of a step.  Every step yields at least one.
///
/// A failed pickup is an ordinary action, not an error: it is the most common
/// thing that happens at a busy table.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Action {
    /// A think duration was drawn; it starts counting next step.
    StartedThinking { duration: u32 },
    /// Still thinking.
    Thinking { remaining: u32 },
    /// Thinking ended; the philosopher wants to eat.
    BecameHungry,
    /// A fork was taken.
    PickedUp(ForkId),
    /// A fork was busy.  `attempts` is the running count of failed requests
    /// for the second fork (0 while requesting the first).
    PickupFailed { fork: ForkId, holder: PhilosopherId, attempts: u32 },
    /// A half-acquired fork was put back after too many failures.
    PutDown(ForkId),
    /// A release was refused because the fork's status did not name this
    /// philosopher.  Nothing changed.
    ReleaseRejected { fork: ForkId, holder: Option<PhilosopherId> },
    /// Both forks in hand; an eat duration was drawn.
    StartedEating { duration: u32 },
    /// Still eating.
    Eating { remaining: u32 },
    /// Eating ended and these forks were put down.
    FinishedEating { released: Vec<ForkId> },
    /// Asked the coordinator for both forks.
    Requested { granted: bool },
    /// Queued at the coordinator, not granted yet.
    Waiting,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::StartedThinking { duration } => write!(f, "starts thinking for {duration} ticks"),
            Action::Thinking { remaining }       => write!(f, "thinking ({remaining} left)"),
            Action::BecameHungry                 => f.write_str("is hungry"),
            Action::PickedUp(fork)               => write!(f, "picks up {fork}"),
            Action::PickupFailed { fork, holder, attempts } => {
                write!(f, "cannot pick up {fork} (held by {holder}, attempt {attempts})")
            }
            Action::PutDown(fork)                => write!(f, "puts {fork} back"),
            Action::ReleaseRejected { fork, holder } => match holder {
                Some(h) => write!(f, "cannot release {fork}: held by {h}"),
                None    => write!(f, "cannot release {fork}: already free"),
            },
            Action::StartedEating { duration }   => write!(f, "starts eating for {duration} ticks"),
            Action::Eating { remaining }         => write!(f, "eating ({remaining} left)"),
            Action::FinishedEating { released }  => {
                f.write_str("finishes eating, releases")?;
                for fork in released {
                    write!(f, " {fork}")?;
                }
                Ok(())
            }
            Action::Requested { granted: true }  => f.write_str("requests both forks (granted)"),
            Action::Requested { granted: false } => f.write_str("requests both forks (queued)"),
            Action::Waiting                      => f.write_str("waits for the coordinator"),
        }
    }
}

/// Result of [`Philosopher::step_coordinated`][crate::Philosopher::step_coordinated].
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CoordinatedStep {
    pub actions: Vec<Action>,
    /// Grants the coordinator made during this step, possibly to other
    /// philosophers.  The driver must apply them before the grantee's next
    /// step.
    pub grants:  Vec<Grant>,
}

impl CoordinatedStep {
    pub(crate) fn only(actions: Vec<Action>) -> Self {
        Self { actions, grants: Vec::new() }
    }
}
