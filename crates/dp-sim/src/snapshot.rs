//! Detached, comparable view of a whole table.

use dp_core::{ForkId, Tick};
use dp_fork::ForkStatus;
use dp_philosopher::PhilosopherStatus;

/// Everything a display polls, copied out of the live table.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TableSnapshot {
    pub tick:         Tick,
    pub philosophers: Vec<PhilosopherStatus>,
    pub forks:        Vec<(ForkId, ForkStatus)>,
}

impl TableSnapshot {
    pub fn total_meals(&self) -> u64 {
        self.philosophers.iter().map(|p| p.eat_count).sum()
    }
}
