//! Whole-table consistency checks.
//!
//! [`check`] is cheap enough to call after every tick in tests.  A healthy
//! table never fails it; a failure means the fork statuses, the
//! philosophers' own bookkeeping and (if present) the coordinator have
//! drifted apart.

use dp_core::{ForkId, PhilosopherId};
use dp_fork::ForkStatus;
use dp_philosopher::PhilosopherState;
use thiserror::Error;

use crate::Sim;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{philosopher} holds {fork}, which is not beside its seat")]
    NonAdjacentFork {
        philosopher: PhilosopherId,
        fork:        ForkId,
    },

    #[error("{philosopher} believes it holds {fork}, but the fork is {status}")]
    HolderMismatch {
        philosopher: PhilosopherId,
        fork:        ForkId,
        status:      ForkStatus,
    },

    #[error("philosophers account for {held} forks but {in_use} are in use")]
    CountMismatch {
        held:   usize,
        in_use: usize,
    },

    #[error("{philosopher} holds exactly one fork under central arbitration")]
    PartialGrant { philosopher: PhilosopherId },

    #[error("{philosopher} is {state} while holding {held} forks")]
    StateMismatch {
        philosopher: PhilosopherId,
        state:       PhilosopherState,
        held:        usize,
    },

    #[error("coordinator and fork status disagree about {fork}")]
    CoordinatorMismatch { fork: ForkId },
}

/// Check every table-wide rule against the current state of `sim`.
///
/// - Each fork is held by at most one philosopher, and only by a neighbour.
/// - Philosophers and forks agree on who holds what.
/// - An Eating philosopher holds both forks; a Thinking one holds none.
/// - With a coordinator, nobody holds exactly one fork and the
///   coordinator's holders match the fork statuses.
///
/// Returns the first violation found.
pub fn check(sim: &Sim) -> Result<(), InvariantViolation> {
    let mut held_total = 0;

    for p in &sim.philosophers {
        let id = p.id();
        let held = p.held();
        held_total += held.count();

        for fork in held.iter() {
            if !p.seat().is_adjacent(fork) {
                return Err(InvariantViolation::NonAdjacentFork { philosopher: id, fork });
            }
            let status = sim.forks.get(fork).map(|f| f.status()).unwrap_or_default();
            if status.holder() != Some(id) {
                return Err(InvariantViolation::HolderMismatch { philosopher: id, fork, status });
            }
        }

        let state_ok = match p.state() {
            PhilosopherState::Thinking => held.is_empty(),
            PhilosopherState::Hungry   => true,
            PhilosopherState::Eating   => held.count() == 2,
        };
        if !state_ok {
            return Err(InvariantViolation::StateMismatch {
                philosopher: id,
                state:       p.state(),
                held:        held.count(),
            });
        }

        if sim.coordinator.is_some() && held.count() == 1 {
            return Err(InvariantViolation::PartialGrant { philosopher: id });
        }
    }

    let in_use = sim.forks.in_use_count();
    if held_total != in_use {
        return Err(InvariantViolation::CountMismatch { held: held_total, in_use });
    }

    if let Some(coordinator) = &sim.coordinator {
        for fork in sim.forks.iter() {
            if coordinator.holder(fork.id()) != fork.holder() {
                return Err(InvariantViolation::CoordinatorMismatch { fork: fork.id() });
            }
        }
    }

    Ok(())
}
