use dp_core::PhilosopherId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinatorError {
    #[error("philosopher {0} was never registered with the coordinator")]
    UnregisteredPhilosopher(PhilosopherId),

    #[error("registration is closed once requests have started")]
    RegistrationClosed,
}

pub type CoordinatorResult<T> = Result<T, CoordinatorError>;
