//! Philosopher states and the read-only status view.

use std::fmt;

use dp_core::{DurationRange, ForkId, PhilosopherId, TableConfig};

/// The three states.  The only edges are Thinking → Hungry, Hungry → Eating
/// and Eating → Thinking.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum PhilosopherState {
    #[default]
    Thinking,
    Hungry,
    Eating,
}

impl PhilosopherState {
    pub fn as_str(self) -> &'static str {
        match self {
            PhilosopherState::Thinking => "thinking",
            PhilosopherState::Hungry   => "hungry",
            PhilosopherState::Eating   => "eating",
        }
    }

    /// The single state reachable from `self`.
    pub fn next(self) -> PhilosopherState {
        match self {
            PhilosopherState::Thinking => PhilosopherState::Hungry,
            PhilosopherState::Hungry   => PhilosopherState::Eating,
            PhilosopherState::Eating   => PhilosopherState::Thinking,
        }
    }
}

impl fmt::Display for PhilosopherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Think and eat duration ranges for one philosopher.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Timing {
    pub think: DurationRange,
    pub eat:   DurationRange,
}

impl From<&TableConfig> for Timing {
    fn from(config: &TableConfig) -> Self {
        Self { think: config.think, eat: config.eat }
    }
}

/// Everything a driver polls for display, detached from the philosopher.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PhilosopherStatus {
    pub id:          PhilosopherId,
    pub name:        String,
    pub state:       PhilosopherState,
    pub remaining:   u32,
    pub eat_count:   u64,
    pub think_count: u64,
    pub attempts:    u32,
    /// Held forks in pickup order.
    pub held:        Vec<ForkId>,
}
