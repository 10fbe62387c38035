//! The `Coordinator` arena and its grant logic.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

use dp_core::{ForkId, PhilosopherId, RegrantOrder, Seat};

use crate::{CoordinatorError, CoordinatorResult};

/// One fork handed to one philosopher.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Grant {
    pub philosopher: PhilosopherId,
    pub fork:        ForkId,
}

/// Central arbiter for one table.
///
/// All state is owned here and mutated only through
/// [`request_to_eat`][Self::request_to_eat], [`release_forks`][Self::release_forks]
/// and [`reset`][Self::reset]:
///
/// | Field          | Meaning                                              |
/// |----------------|------------------------------------------------------|
/// | `philosophers` | registered seat ids                                  |
/// | `forks`        | registered fork ids                                  |
/// | `holders`      | fork → holding philosopher (absent = free)           |
/// | `waiting`      | philosophers that asked to eat and were not granted  |
///
/// Ordered collections keep every iteration, and so every re-grant pass,
/// deterministic.
#[derive(Clone, Debug, Default)]
pub struct Coordinator {
    philosophers: BTreeSet<PhilosopherId>,
    forks:        BTreeSet<ForkId>,
    holders:      BTreeMap<ForkId, PhilosopherId>,
    waiting:      BTreeSet<PhilosopherId>,
    regrant:      RegrantOrder,
    last_granted: Option<PhilosopherId>,
    /// Set by the first request; registration is rejected afterwards.
    started:      bool,
}

impl Coordinator {
    pub fn new(regrant: RegrantOrder) -> Self {
        Self { regrant, ..Self::default() }
    }

    /// A coordinator with philosophers and forks `0..ring_size` registered.
    pub fn for_ring(ring_size: usize, regrant: RegrantOrder) -> Self {
        let mut c = Self::new(regrant);
        for i in 0..ring_size as u32 {
            c.philosophers.insert(PhilosopherId(i));
            c.forks.insert(ForkId(i));
        }
        c
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Add a philosopher to the id universe.  Registering twice is a no-op.
    pub fn register_philosopher(&mut self, id: PhilosopherId) -> CoordinatorResult<()> {
        if self.started {
            return Err(CoordinatorError::RegistrationClosed);
        }
        self.philosophers.insert(id);
        Ok(())
    }

    /// Add a fork to the id universe.  Registering twice is a no-op.
    pub fn register_fork(&mut self, id: ForkId) -> CoordinatorResult<()> {
        if self.started {
            return Err(CoordinatorError::RegistrationClosed);
        }
        self.forks.insert(id);
        Ok(())
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Queue `id` to eat and try to grant it immediately.
    ///
    /// Returns the grants made by this call: both of `id`'s forks, or
    /// nothing.  A philosopher that already holds its forks is not queued.
    pub fn request_to_eat(&mut self, id: PhilosopherId) -> CoordinatorResult<Vec<Grant>> {
        self.ensure_registered(id)?;
        self.started = true;

        if self.holders.values().any(|&h| h == id) {
            return Ok(vec![]);
        }
        self.waiting.insert(id);
        Ok(self.try_grant(id))
    }

    /// Free every fork held by `id`, drop it from the waiting set, then
    /// retry every still-waiting philosopher.
    ///
    /// Returns all grants made during the retry pass.
    pub fn release_forks(&mut self, id: PhilosopherId) -> CoordinatorResult<Vec<Grant>> {
        self.ensure_registered(id)?;

        self.waiting.remove(&id);
        let before = self.holders.len();
        self.holders.retain(|_, holder| *holder != id);
        tracing::debug!(philosopher = %id, freed = before - self.holders.len(), "forks released");

        let mut grants = Vec::new();
        for candidate in self.regrant_order() {
            grants.extend(self.try_grant(candidate));
        }
        Ok(grants)
    }

    /// Coarse deadlock alarm: someone is waiting and every registered fork
    /// is held.  With no forks registered a waiter can never be served, so
    /// any waiter raises the alarm.
    ///
    /// Sufficient, not necessary.  A ring can be stuck with some forks free
    /// if no single waiter has both of its forks free; do not treat `false`
    /// as proof of progress.
    pub fn detect_deadlock(&self) -> bool {
        !self.waiting.is_empty()
            && self.forks.iter().all(|f| self.holders.contains_key(f))
    }

    /// Clear holders and the waiting set and reopen registration.
    /// Registrations themselves are kept.
    pub fn reset(&mut self) {
        self.holders.clear();
        self.waiting.clear();
        self.last_granted = None;
        self.started = false;
    }

    // ── Read-only queries ─────────────────────────────────────────────────

    pub fn holder(&self, fork: ForkId) -> Option<PhilosopherId> {
        self.holders.get(&fork).copied()
    }

    /// Forks held by `id`, ascending.
    pub fn held_by(&self, id: PhilosopherId) -> Vec<ForkId> {
        self.holders
            .iter()
            .filter(|(_, h)| **h == id)
            .map(|(f, _)| *f)
            .collect()
    }

    pub fn is_waiting(&self, id: PhilosopherId) -> bool {
        self.waiting.contains(&id)
    }

    /// Waiting philosophers in ascending id order.
    pub fn waiting(&self) -> impl Iterator<Item = PhilosopherId> + '_ {
        self.waiting.iter().copied()
    }

    pub fn philosopher_count(&self) -> usize {
        self.philosophers.len()
    }

    pub fn fork_count(&self) -> usize {
        self.forks.len()
    }

    pub fn regrant(&self) -> RegrantOrder {
        self.regrant
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn ensure_registered(&self, id: PhilosopherId) -> CoordinatorResult<()> {
        if self.philosophers.contains(&id) {
            Ok(())
        } else {
            Err(CoordinatorError::UnregisteredPhilosopher(id))
        }
    }

    /// Grant both of `id`'s forks if both are free; otherwise change nothing.
    fn try_grant(&mut self, id: PhilosopherId) -> Vec<Grant> {
        let seat = Seat::new(id, self.philosophers.len());
        let [left, right] = seat.forks();

        if left == right || !self.forks.contains(&left) || !self.forks.contains(&right) {
            tracing::warn!(philosopher = %id, %left, %right, "grant skipped: fork not registered");
            return vec![];
        }
        if self.holders.contains_key(&left) || self.holders.contains_key(&right) {
            return vec![];
        }

        self.holders.insert(left, id);
        self.holders.insert(right, id);
        self.waiting.remove(&id);
        self.last_granted = Some(id);
        tracing::debug!(philosopher = %id, %left, %right, "both forks granted");

        vec![
            Grant { philosopher: id, fork: left },
            Grant { philosopher: id, fork: right },
        ]
    }

    /// Snapshot of the waiting set in the configured retry order.
    fn regrant_order(&self) -> Vec<PhilosopherId> {
        match (self.regrant, self.last_granted) {
            (RegrantOrder::RoundRobin, Some(last)) => self
                .waiting
                .range((Bound::Excluded(last), Bound::Unbounded))
                .chain(self.waiting.range(..=last))
                .copied()
                .collect(),
            _ => self.waiting.iter().copied().collect(),
        }
    }
}
