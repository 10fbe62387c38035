//! The `Sim` struct and its tick loop.

use dp_coordinator::{Coordinator, Grant};
use dp_core::{ForkId, PhilosopherId, TableConfig, Tick};
use dp_fork::{Fork, ForkRing};
use dp_philosopher::{Philosopher, PhilosopherState};

use crate::{SimError, SimObserver, SimResult, TableSnapshot};

/// One table and everything needed to advance it.
///
/// Each tick steps every philosopher once, in ascending seat order:
///
/// 1. **Strategy path** (`coordinator` is `None`): the philosopher acquires
///    and releases forks in `forks` itself.
/// 2. **Coordinator path**: the philosopher talks to `coordinator`; every
///    grant it returns is applied to `forks` and to the grantee before the
///    next seat steps.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// The configuration this table was built from.
    pub config: TableConfig,

    /// The tick the next call to [`step`][Self::step] will simulate.
    pub tick: Tick,

    /// Fork statuses.  On the coordinator path they mirror the
    /// coordinator's holders after every step.
    pub forks: ForkRing,

    /// Seats in id order; `philosophers[i].id() == PhilosopherId(i)`.
    pub philosophers: Vec<Philosopher>,

    /// Present only when the config selects central arbitration.
    pub coordinator: Option<Coordinator>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Simulate one tick: every philosopher advances exactly one transition.
    ///
    /// Fails only on the coordinator path, if a grant cannot be applied.
    /// That means the coordinator and the fork statuses disagree, which the
    /// tick loop never causes on its own.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);

        for i in 0..self.philosophers.len() {
            let philosopher = &mut self.philosophers[i];
            let id = philosopher.id();

            match self.coordinator.as_mut() {
                None => {
                    for action in philosopher.step(&mut self.forks) {
                        observer.on_action(now, id, &action);
                    }
                }
                Some(coordinator) => {
                    let step = philosopher.step_coordinated(coordinator, &mut self.forks)?;
                    for action in &step.actions {
                        observer.on_action(now, id, action);
                    }
                    for grant in step.grants {
                        apply_grant(&mut self.forks, &mut self.philosophers, grant)?;
                        observer.on_grant(now, grant);
                    }
                }
            }
        }

        observer.on_tick_end(now, &self.philosophers, &self.forks);
        self.tick = now + 1;
        Ok(())
    }

    /// Put the table back to its just-built state: every philosopher
    /// Thinking with zeroed counters, every fork available, the coordinator
    /// emptied and the tick rewound to zero.
    ///
    /// Random streams continue where they were, so a reset table does not
    /// replay the previous run.
    pub fn reset<O: SimObserver>(&mut self, observer: &mut O) {
        for philosopher in &mut self.philosophers {
            philosopher.reset(&mut self.forks);
        }
        // Catches forks whose status named a philosopher that did not know.
        self.forks.force_release_all();
        if let Some(coordinator) = self.coordinator.as_mut() {
            coordinator.reset();
        }
        self.tick = Tick::ZERO;
        tracing::debug!(philosophers = self.philosophers.len(), "table reset");
        observer.on_reset();
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            tick:         self.tick,
            philosophers: self.philosophers.iter().map(Philosopher::status).collect(),
            forks:        self.forks.statuses(),
        }
    }

    /// Whether the table looks stuck.
    ///
    /// With a coordinator this is
    /// [`Coordinator::detect_deadlock`].  Without one, it is the classic
    /// picture: every philosopher Hungry and holding exactly one fork.
    /// Either way the check is sufficient, not necessary.
    pub fn deadlock_suspected(&self) -> bool {
        match &self.coordinator {
            Some(coordinator) => coordinator.detect_deadlock(),
            None => self
                .philosophers
                .iter()
                .all(|p| p.state() == PhilosopherState::Hungry && p.held().count() == 1),
        }
    }

    pub fn philosopher(&self, id: PhilosopherId) -> Option<&Philosopher> {
        self.philosophers.get(id.index())
    }

    pub fn fork(&self, id: ForkId) -> Option<&Fork> {
        self.forks.get(id)
    }
}

// ── Grant application ─────────────────────────────────────────────────────────

/// Mirror one coordinator grant into the fork statuses and the grantee.
///
/// Nothing changes unless the fork is free and the grantee accepts it.
pub(crate) fn apply_grant(
    forks:        &mut ForkRing,
    philosophers: &mut [Philosopher],
    grant:        Grant,
) -> SimResult<()> {
    let Grant { philosopher, fork } = grant;
    let rejected = SimError::GrantRejected { philosopher, fork };

    let (Some(target), Some(grantee)) =
        (forks.get_mut(fork), philosophers.get_mut(philosopher.index()))
    else {
        return Err(rejected);
    };
    if let Some(holder) = target.holder() {
        return Err(SimError::GrantConflict { fork, holder });
    }
    if !grantee.accept_grant(fork) {
        return Err(rejected);
    }

    let acquired = target.try_acquire(philosopher);
    debug_assert!(acquired.is_acquired());
    Ok(())
}
