//! Passive observability hooks.

use dp_coordinator::Grant;
use dp_core::{PhilosopherId, Tick};
use dp_fork::ForkRing;
use dp_philosopher::{Action, Philosopher};

/// Callbacks invoked by [`Sim`][crate::Sim] during the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers see the table; they cannot
/// change it.
///
/// # Example: meal counter
///
/// ```rust,ignore
/// struct Meals(u64);
///
/// impl SimObserver for Meals {
///     fn on_action(&mut self, _tick: Tick, _who: PhilosopherId, action: &Action) {
///         if matches!(action, Action::FinishedEating { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any philosopher steps.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every action of every step, in the order they happened.
    fn on_action(&mut self, _tick: Tick, _philosopher: PhilosopherId, _action: &Action) {}

    /// Called after a coordinator grant has been applied to the table.
    fn on_grant(&mut self, _tick: Tick, _grant: Grant) {}

    /// Called after every philosopher has stepped.
    fn on_tick_end(&mut self, _tick: Tick, _philosophers: &[Philosopher], _forks: &ForkRing) {}

    /// Called after [`Sim::reset`][crate::Sim::reset] completes.
    fn on_reset(&mut self) {}

    /// Called once after [`Sim::run`][crate::Sim::run] reaches its end tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that forwards everything to `tracing`.
///
/// Pickups, failures and releases go out at `DEBUG`; per-tick countdowns at
/// `TRACE`.
pub struct TracingObserver;

impl SimObserver for TracingObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        tracing::trace!(%tick, "tick start");
    }

    fn on_action(&mut self, tick: Tick, philosopher: PhilosopherId, action: &Action) {
        match action {
            Action::Thinking { .. } | Action::Eating { .. } | Action::Waiting => {
                tracing::trace!(%tick, %philosopher, "{action}");
            }
            Action::ReleaseRejected { .. } => {
                tracing::warn!(%tick, %philosopher, "{action}");
            }
            _ => tracing::debug!(%tick, %philosopher, "{action}"),
        }
    }

    fn on_grant(&mut self, tick: Tick, grant: Grant) {
        tracing::debug!(%tick, philosopher = %grant.philosopher, fork = %grant.fork, "grant applied");
    }

    fn on_tick_end(&mut self, tick: Tick, _philosophers: &[Philosopher], forks: &ForkRing) {
        tracing::trace!(%tick, forks_in_use = forks.in_use_count(), "tick end");
    }

    fn on_reset(&mut self) {
        tracing::info!("table reset");
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        tracing::info!(%final_tick, "run complete");
    }
}
