use dp_coordinator::CoordinatorError;
use dp_core::{DpError, ForkId, PhilosopherId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] DpError),

    #[error("{got} display names supplied for {expected} philosophers")]
    NameCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("coordinator error: {0}")]
    Coordinator(#[from] CoordinatorError),

    #[error("coordinator granted {fork} but it is held by {holder}")]
    GrantConflict {
        fork:   ForkId,
        holder: PhilosopherId,
    },

    #[error("{philosopher} refused a grant of {fork}")]
    GrantRejected {
        philosopher: PhilosopherId,
        fork:        ForkId,
    },
}

pub type SimResult<T> = Result<T, SimError>;
