//! The `Philosopher` state machine.

use std::fmt;
use std::sync::Arc;

use dp_coordinator::{Coordinator, CoordinatorResult};
use dp_core::{ForkId, PhilosopherId, PhilosopherRng, Seat};
use dp_fork::{Acquire, ForkRing, Release};
use dp_strategy::ForkStrategy;

use crate::{Action, CoordinatedStep, HeldForks, PhilosopherState, PhilosopherStatus, Timing};

/// One seat at the table.
///
/// `remaining` counts down the current timed state.  Zero while Thinking
/// means "no duration drawn yet": the next step draws one and does nothing
/// else, so a fresh philosopher always spends at least one step thinking.
pub struct Philosopher {
    seat:        Seat,
    name:        String,
    state:       PhilosopherState,
    remaining:   u32,
    held:        HeldForks,
    eat_count:   u64,
    think_count: u64,
    attempts:    u32,
    strategy:    Arc<dyn ForkStrategy>,
    timing:      Timing,
    rng:         PhilosopherRng,
}

impl Philosopher {
    /// A philosopher in the Thinking state with all counters at zero.
    ///
    /// `rng` drives every duration and any randomized strategy decision;
    /// pass a fixed-seed generator to reproduce a run exactly.
    pub fn new(
        seat:     Seat,
        name:     impl Into<String>,
        strategy: Arc<dyn ForkStrategy>,
        timing:   Timing,
        rng:      PhilosopherRng,
    ) -> Self {
        Self {
            seat,
            name: name.into(),
            state: PhilosopherState::Thinking,
            remaining: 0,
            held: HeldForks::default(),
            eat_count: 0,
            think_count: 0,
            attempts: 0,
            strategy,
            timing,
            rng,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> PhilosopherId {
        self.seat.id
    }

    #[inline]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn state(&self) -> PhilosopherState {
        self.state
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn held(&self) -> &HeldForks {
        &self.held
    }

    #[inline]
    pub fn eat_count(&self) -> u64 {
        self.eat_count
    }

    #[inline]
    pub fn think_count(&self) -> u64 {
        self.think_count
    }

    /// Failed requests for the second fork since the first was picked up.
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn strategy(&self) -> &dyn ForkStrategy {
        self.strategy.as_ref()
    }

    pub fn status(&self) -> PhilosopherStatus {
        PhilosopherStatus {
            id:          self.seat.id,
            name:        self.name.clone(),
            state:       self.state,
            remaining:   self.remaining,
            eat_count:   self.eat_count,
            think_count: self.think_count,
            attempts:    self.attempts,
            held:        self.held.to_vec(),
        }
    }

    // ── Strategy path ─────────────────────────────────────────────────────

    /// Advance one transition, acquiring forks through the strategy.
    pub fn step(&mut self, forks: &mut ForkRing) -> Vec<Action> {
        match self.state {
            PhilosopherState::Thinking => self.think(),
            PhilosopherState::Hungry   => match self.held.first() {
                None       => self.request_first(forks),
                Some(held) => self.request_second(held, forks),
            },
            PhilosopherState::Eating   => self.eat(forks),
        }
    }

    fn request_first(&mut self, forks: &mut ForkRing) -> Vec<Action> {
        let fork = self.strategy.first_fork(&self.seat, &mut self.rng);
        match forks[fork].try_acquire(self.seat.id) {
            Acquire::Acquired => {
                self.held.insert(fork);
                vec![Action::PickedUp(fork)]
            }
            Acquire::Busy { holder } => {
                vec![Action::PickupFailed { fork, holder, attempts: 0 }]
            }
        }
    }

    fn request_second(&mut self, held: ForkId, forks: &mut ForkRing) -> Vec<Action> {
        self.attempts += 1;
        let fork = self.strategy.second_fork(&self.seat, held);

        match forks[fork].try_acquire(self.seat.id) {
            Acquire::Acquired => {
                self.held.insert(fork);
                self.attempts = 0;
                let duration = self.start_eating();
                vec![Action::PickedUp(fork), Action::StartedEating { duration }]
            }
            Acquire::Busy { holder } => {
                let mut actions = vec![Action::PickupFailed { fork, holder, attempts: self.attempts }];
                if self.strategy.should_release(self.attempts, &mut self.rng) {
                    actions.push(self.put_down(held, forks));
                    self.attempts = 0;
                }
                actions
            }
        }
    }

    fn eat(&mut self, forks: &mut ForkRing) -> Vec<Action> {
        if let Some(actions) = self.count_down_meal() {
            return actions;
        }

        let mut released = Vec::with_capacity(2);
        let mut rejected = Vec::new();
        for fork in self.held.take().iter() {
            match forks[fork].release(self.seat.id) {
                Release::Released => released.push(fork),
                Release::NotHolder { holder } => {
                    rejected.push(Action::ReleaseRejected { fork, holder });
                }
            }
        }
        self.finish_meal();

        let mut actions = vec![Action::FinishedEating { released }];
        actions.extend(rejected);
        actions
    }

    /// Put a single held fork back and forget it either way.
    fn put_down(&mut self, fork: ForkId, forks: &mut ForkRing) -> Action {
        self.held.remove(fork);
        match forks[fork].release(self.seat.id) {
            Release::Released => Action::PutDown(fork),
            Release::NotHolder { holder } => Action::ReleaseRejected { fork, holder },
        }
    }

    // ── Coordinator path ──────────────────────────────────────────────────

    /// Advance one transition, asking `coordinator` for both forks at once.
    ///
    /// Forks are never picked up here.  A grant (to this philosopher or,
    /// after a release, to anyone) is returned in
    /// [`CoordinatedStep::grants`] and takes effect once the driver calls
    /// [`accept_grant`][Self::accept_grant].  When eating ends, the fork
    /// statuses in `forks` are freed before the coordinator is told, so the
    /// grants it makes can be applied straight away.
    ///
    /// Fails only if this philosopher was never registered with
    /// `coordinator`.
    pub fn step_coordinated(
        &mut self,
        coordinator: &mut Coordinator,
        forks:       &mut ForkRing,
    ) -> CoordinatorResult<CoordinatedStep> {
        match self.state {
            PhilosopherState::Thinking => Ok(CoordinatedStep::only(self.think())),

            PhilosopherState::Hungry if self.held.count() == 2 => {
                let duration = self.start_eating();
                Ok(CoordinatedStep::only(vec![Action::StartedEating { duration }]))
            }

            PhilosopherState::Hungry if coordinator.is_waiting(self.seat.id) => {
                Ok(CoordinatedStep::only(vec![Action::Waiting]))
            }

            PhilosopherState::Hungry => {
                let grants = coordinator.request_to_eat(self.seat.id)?;
                Ok(CoordinatedStep {
                    actions: vec![Action::Requested { granted: !grants.is_empty() }],
                    grants,
                })
            }

            PhilosopherState::Eating => {
                if let Some(actions) = self.count_down_meal() {
                    return Ok(CoordinatedStep::only(actions));
                }

                let mut actions = Vec::with_capacity(1);
                let mut released = Vec::with_capacity(2);
                for fork in self.held.take().iter() {
                    match forks[fork].release(self.seat.id) {
                        Release::Released => released.push(fork),
                        Release::NotHolder { holder } => {
                            actions.push(Action::ReleaseRejected { fork, holder });
                        }
                    }
                }
                let grants = coordinator.release_forks(self.seat.id)?;
                self.finish_meal();

                actions.insert(0, Action::FinishedEating { released });
                Ok(CoordinatedStep { actions, grants })
            }
        }
    }

    /// Record that the coordinator granted `fork` to this philosopher.
    ///
    /// Returns `false`, and changes nothing, if `fork` is not adjacent or is
    /// already held.
    pub fn accept_grant(&mut self, fork: ForkId) -> bool {
        if !self.seat.is_adjacent(fork) || !self.held.insert(fork) {
            tracing::warn!(philosopher = %self.seat.id, %fork, "grant rejected by philosopher");
            return false;
        }
        true
    }

    // ── Reset ─────────────────────────────────────────────────────────────

    /// Back to a fresh Thinking philosopher.  Every fork this philosopher
    /// believes it holds is force-released, whoever the fork says holds it.
    ///
    /// The RNG stream is not rewound.
    pub fn reset(&mut self, forks: &mut ForkRing) {
        for fork in self.held.take().iter() {
            if let Some(f) = forks.get_mut(fork) {
                f.force_release();
            }
        }
        self.state = PhilosopherState::Thinking;
        self.remaining = 0;
        self.eat_count = 0;
        self.think_count = 0;
        self.attempts = 0;
    }

    // ── Shared transitions ────────────────────────────────────────────────

    fn think(&mut self) -> Vec<Action> {
        if self.remaining == 0 {
            let duration = self.timing.think.sample(&mut self.rng);
            self.remaining = duration;
            return vec![Action::StartedThinking { duration }];
        }

        self.remaining -= 1;
        if self.remaining > 0 {
            return vec![Action::Thinking { remaining: self.remaining }];
        }
        self.think_count += 1;
        self.state = self.state.next();
        tracing::trace!(philosopher = %self.seat.id, "thinking → hungry");
        vec![Action::BecameHungry]
    }

    /// Hungry → Eating.  Returns the drawn eat duration.
    fn start_eating(&mut self) -> u32 {
        let duration = self.timing.eat.sample(&mut self.rng);
        self.remaining = duration;
        self.state = self.state.next();
        tracing::trace!(philosopher = %self.seat.id, duration, "hungry → eating");
        duration
    }

    /// Decrement the meal timer.  `Some` while the meal continues.
    fn count_down_meal(&mut self) -> Option<Vec<Action>> {
        self.remaining = self.remaining.saturating_sub(1);
        (self.remaining > 0).then(|| vec![Action::Eating { remaining: self.remaining }])
    }

    /// Eating → Thinking with a fresh think duration due next step.
    fn finish_meal(&mut self) {
        self.eat_count += 1;
        self.remaining = 0;
        self.state = self.state.next();
        tracing::trace!(philosopher = %self.seat.id, meals = self.eat_count, "eating → thinking");
    }
}

impl fmt::Debug for Philosopher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Philosopher")
            .field("seat", &self.seat)
            .field("name", &self.name)
            .field("state", &self.state)
            .field("remaining", &self.remaining)
            .field("held", &self.held)
            .field("eat_count", &self.eat_count)
            .field("think_count", &self.think_count)
            .field("attempts", &self.attempts)
            .field("strategy", &self.strategy.kind())
            .finish()
    }
}
