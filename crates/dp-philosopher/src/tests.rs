//! Unit tests for dp-philosopher.

use std::sync::Arc;

use dp_core::{DurationRange, ForkId, PhilosopherId, PhilosopherRng, Seat};
use dp_fork::ForkRing;
use dp_strategy::OrderedStrategy;

use crate::{Philosopher, Timing};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Single-value ranges make every duration exact: think 1 tick, eat `eat`.
fn exact_timing(eat: u32) -> Timing {
    Timing {
        think: DurationRange::new(1, 2),
        eat:   DurationRange::new(eat, eat + 1),
    }
}

fn seated(id: u32, ring: usize, timing: Timing) -> Philosopher {
    let seat = Seat::new(PhilosopherId(id), ring);
    Philosopher::new(
        seat,
        format!("Philosopher {id}"),
        Arc::new(OrderedStrategy::new(3)),
        timing,
        PhilosopherRng::new(42, seat.id),
    )
}

/// Step until the philosopher reports hungry.  With `exact_timing` that is
/// two steps: draw the duration, then count it down.
fn make_hungry(p: &mut Philosopher, forks: &mut ForkRing) {
    p.step(forks);
    p.step(forks);
    assert_eq!(p.state(), crate::PhilosopherState::Hungry);
}

// ── State enum ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod state {
    use crate::PhilosopherState;

    #[test]
    fn cycle_has_three_edges() {
        let s = PhilosopherState::Thinking;
        assert_eq!(s.next(), PhilosopherState::Hungry);
        assert_eq!(s.next().next(), PhilosopherState::Eating);
        assert_eq!(s.next().next().next(), PhilosopherState::Thinking);
    }

    #[test]
    fn display() {
        assert_eq!(PhilosopherState::Hungry.to_string(), "hungry");
    }
}

// ── HeldForks ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod held {
    use dp_core::ForkId;

    use crate::HeldForks;

    #[test]
    fn holds_at_most_two_distinct() {
        let mut h = HeldForks::default();
        assert!(h.insert(ForkId(1)));
        assert!(!h.insert(ForkId(1)), "duplicate");
        assert!(h.insert(ForkId(2)));
        assert!(!h.insert(ForkId(3)), "full");
        assert_eq!(h.count(), 2);
        assert_eq!(h.to_vec(), vec![ForkId(1), ForkId(2)]);
    }

    #[test]
    fn remove_keeps_survivor_first() {
        let mut h = HeldForks::default();
        h.insert(ForkId(4));
        h.insert(ForkId(0));
        assert!(h.remove(ForkId(4)));
        assert_eq!(h.first(), Some(ForkId(0)));
        assert!(!h.remove(ForkId(4)));
    }

    #[test]
    fn take_empties() {
        let mut h = HeldForks::default();
        h.insert(ForkId(1));
        let taken = h.take();
        assert!(h.is_empty());
        assert!(taken.contains(ForkId(1)));
    }
}

// ── Strategy path ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod strategy_path {
    use super::*;
    use crate::{Action, PhilosopherState};

    #[test]
    fn first_step_only_draws_think_time() {
        let mut forks = ForkRing::new(5);
        let mut p = seated(0, 5, Timing {
            think: DurationRange::new(3, 8),
            eat:   DurationRange::new(2, 6),
        });
        let actions = p.step(&mut forks);
        assert_eq!(p.state(), PhilosopherState::Thinking);
        assert!(p.remaining() >= 3 && p.remaining() < 8);
        assert_eq!(actions, vec![Action::StartedThinking { duration: p.remaining() }]);
    }

    #[test]
    fn thinking_counts_down_to_hungry() {
        let mut forks = ForkRing::new(3);
        let mut p = seated(0, 3, Timing {
            think: DurationRange::new(3, 4),
            eat:   DurationRange::new(1, 2),
        });
        assert_eq!(p.step(&mut forks), vec![Action::StartedThinking { duration: 3 }]);
        assert_eq!(p.step(&mut forks), vec![Action::Thinking { remaining: 2 }]);
        assert_eq!(p.step(&mut forks), vec![Action::Thinking { remaining: 1 }]);
        assert_eq!(p.step(&mut forks), vec![Action::BecameHungry]);
        assert_eq!(p.state(), PhilosopherState::Hungry);
        assert_eq!(p.think_count(), 1);
    }

    #[test]
    fn full_meal_cycle() {
        let mut forks = ForkRing::new(3);
        let mut p = seated(1, 3, exact_timing(2));
        make_hungry(&mut p, &mut forks);

        // Odd seat: right fork (F2) first, then left (F1).
        assert_eq!(p.step(&mut forks), vec![Action::PickedUp(ForkId(2))]);
        assert_eq!(
            p.step(&mut forks),
            vec![Action::PickedUp(ForkId(1)), Action::StartedEating { duration: 2 }]
        );
        assert_eq!(p.state(), PhilosopherState::Eating);
        assert_eq!(p.attempts(), 0);
        assert_eq!(forks.in_use_count(), 2);

        assert_eq!(p.step(&mut forks), vec![Action::Eating { remaining: 1 }]);
        assert_eq!(
            p.step(&mut forks),
            vec![Action::FinishedEating { released: vec![ForkId(2), ForkId(1)] }]
        );
        assert_eq!(p.state(), PhilosopherState::Thinking);
        assert_eq!(p.remaining(), 0);
        assert_eq!(p.eat_count(), 1);
        assert!(p.held().is_empty());
        assert_eq!(forks.in_use_count(), 0);
    }

    #[test]
    fn busy_first_fork_keeps_hungry_with_nothing_held() {
        let mut forks = ForkRing::new(3);
        let _ = forks[ForkId(0)].try_acquire(PhilosopherId(2));
        let mut p = seated(0, 3, exact_timing(1));
        make_hungry(&mut p, &mut forks);

        assert_eq!(
            p.step(&mut forks),
            vec![Action::PickupFailed { fork: ForkId(0), holder: PhilosopherId(2), attempts: 0 }]
        );
        assert_eq!(p.state(), PhilosopherState::Hungry);
        assert!(p.held().is_empty());
        assert_eq!(p.attempts(), 0);
    }

    /// Agent 0 holds fork 0 and keeps asking for fork 1, which agent 1 holds.
    /// The counter climbs to 3, then fork 0 is put back and the counter resets.
    #[test]
    fn backs_off_after_three_failed_attempts() {
        let mut forks = ForkRing::new(5);
        let _ = forks[ForkId(1)].try_acquire(PhilosopherId(1));
        let mut p = seated(0, 5, exact_timing(1));
        make_hungry(&mut p, &mut forks);

        assert_eq!(p.step(&mut forks), vec![Action::PickedUp(ForkId(0))]);

        for attempt in 1..=2 {
            assert_eq!(
                p.step(&mut forks),
                vec![Action::PickupFailed { fork: ForkId(1), holder: PhilosopherId(1), attempts: attempt }]
            );
            assert_eq!(p.attempts(), attempt);
            assert_eq!(p.held().to_vec(), vec![ForkId(0)]);
        }

        assert_eq!(
            p.step(&mut forks),
            vec![
                Action::PickupFailed { fork: ForkId(1), holder: PhilosopherId(1), attempts: 3 },
                Action::PutDown(ForkId(0)),
            ]
        );
        assert_eq!(p.attempts(), 0);
        assert!(p.held().is_empty());
        assert!(forks[ForkId(0)].is_available());
        assert_eq!(p.state(), PhilosopherState::Hungry);

        // Back to the zero-fork branch: it takes fork 0 again.
        assert_eq!(p.step(&mut forks), vec![Action::PickedUp(ForkId(0))]);
    }

    #[test]
    fn stolen_fork_is_reported_on_release() {
        let mut forks = ForkRing::new(3);
        let mut p = seated(0, 3, exact_timing(1));
        make_hungry(&mut p, &mut forks);
        p.step(&mut forks);
        p.step(&mut forks);
        assert_eq!(p.state(), PhilosopherState::Eating);

        // Something outside the table yanks F1 and hands it to P1.
        forks[ForkId(1)].force_release();
        let _ = forks[ForkId(1)].try_acquire(PhilosopherId(1));

        let actions = p.step(&mut forks);
        assert_eq!(
            actions,
            vec![
                Action::FinishedEating { released: vec![ForkId(0)] },
                Action::ReleaseRejected { fork: ForkId(1), holder: Some(PhilosopherId(1)) },
            ]
        );
        // The stolen fork stays with its current holder.
        assert_eq!(forks[ForkId(1)].holder(), Some(PhilosopherId(1)));
        assert!(p.held().is_empty());
    }

    #[test]
    fn every_step_reports_something() {
        let mut forks = ForkRing::new(2);
        let mut p = seated(0, 2, exact_timing(2));
        for _ in 0..50 {
            assert!(!p.step(&mut forks).is_empty());
        }
    }
}

// ── Coordinator path ──────────────────────────────────────────────────────────

#[cfg(test)]
mod coordinator_path {
    use dp_coordinator::{Coordinator, CoordinatorError, Grant};
    use dp_core::RegrantOrder;

    use super::*;
    use crate::{Action, PhilosopherState};

    fn apply(grants: &[Grant], table: &mut [Philosopher], forks: &mut ForkRing) {
        for g in grants {
            assert!(forks[g.fork].try_acquire(g.philosopher).is_acquired());
            assert!(table[g.philosopher.index()].accept_grant(g.fork));
        }
    }

    #[test]
    fn request_grant_eat_release() {
        let mut forks = ForkRing::new(3);
        let mut coord = Coordinator::for_ring(3, RegrantOrder::Ascending);
        let mut table = vec![seated(0, 3, exact_timing(1))];
        let p = &mut table[0];
        make_hungry(p, &mut forks);

        let step = p.step_coordinated(&mut coord, &mut forks).unwrap();
        assert_eq!(step.actions, vec![Action::Requested { granted: true }]);
        assert_eq!(step.grants.len(), 2);
        assert!(p.held().is_empty(), "grants are applied by the driver");
        apply(&step.grants, &mut table, &mut forks);

        let p = &mut table[0];
        let step = p.step_coordinated(&mut coord, &mut forks).unwrap();
        assert_eq!(step.actions, vec![Action::StartedEating { duration: 1 }]);
        assert_eq!(p.state(), PhilosopherState::Eating);

        let step = p.step_coordinated(&mut coord, &mut forks).unwrap();
        assert_eq!(
            step.actions,
            vec![Action::FinishedEating { released: vec![ForkId(0), ForkId(1)] }]
        );
        assert!(step.grants.is_empty());
        assert_eq!(forks.in_use_count(), 0);
        assert!(coord.held_by(PhilosopherId(0)).is_empty());
        assert_eq!(p.eat_count(), 1);
    }

    #[test]
    fn queued_philosopher_waits() {
        let mut forks = ForkRing::new(3);
        let mut coord = Coordinator::for_ring(3, RegrantOrder::Ascending);
        let g = coord.request_to_eat(PhilosopherId(1)).unwrap();
        for grant in &g {
            let _ = forks[grant.fork].try_acquire(grant.philosopher);
        }

        let mut p = seated(0, 3, exact_timing(1));
        make_hungry(&mut p, &mut forks);
        let step = p.step_coordinated(&mut coord, &mut forks).unwrap();
        assert_eq!(step.actions, vec![Action::Requested { granted: false }]);
        let step = p.step_coordinated(&mut coord, &mut forks).unwrap();
        assert_eq!(step.actions, vec![Action::Waiting]);
        assert!(p.held().is_empty());
    }

    #[test]
    fn unregistered_philosopher_errors() {
        let mut forks = ForkRing::new(3);
        let mut coord = Coordinator::new(RegrantOrder::Ascending);
        let mut p = seated(0, 3, exact_timing(1));
        make_hungry(&mut p, &mut forks);
        assert_eq!(
            p.step_coordinated(&mut coord, &mut forks).unwrap_err(),
            CoordinatorError::UnregisteredPhilosopher(PhilosopherId(0))
        );
    }

    #[test]
    fn foreign_grant_rejected() {
        let mut p = seated(0, 5, exact_timing(1));
        assert!(!p.accept_grant(ForkId(3)));
        assert!(p.accept_grant(ForkId(1)));
        assert!(!p.accept_grant(ForkId(1)));
        assert_eq!(p.held().count(), 1);
    }
}

// ── Reset ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reset {
    use super::*;
    use crate::PhilosopherState;

    #[test]
    fn reset_force_releases_and_zeroes() {
        let mut forks = ForkRing::new(3);
        let mut p = seated(0, 3, exact_timing(3));
        make_hungry(&mut p, &mut forks);
        p.step(&mut forks);
        p.step(&mut forks);
        assert_eq!(p.state(), PhilosopherState::Eating);

        p.reset(&mut forks);
        assert_eq!(p.state(), PhilosopherState::Thinking);
        assert_eq!(p.remaining(), 0);
        assert_eq!(p.think_count(), 0);
        assert_eq!(p.eat_count(), 0);
        assert_eq!(p.attempts(), 0);
        assert!(p.held().is_empty());
        assert_eq!(forks.in_use_count(), 0);
    }

    #[test]
    fn reset_ignores_ownership() {
        let mut forks = ForkRing::new(3);
        let mut p = seated(0, 3, exact_timing(1));
        assert!(p.accept_grant(ForkId(0)));
        // Bookkeeping says P0 holds F0, the fork itself says P2.
        let _ = forks[ForkId(0)].try_acquire(PhilosopherId(2));
        p.reset(&mut forks);
        assert!(forks[ForkId(0)].is_available());
    }

    #[test]
    fn status_reflects_fields() {
        let mut forks = ForkRing::new(3);
        let mut p = seated(2, 3, exact_timing(1));
        make_hungry(&mut p, &mut forks);
        p.step(&mut forks);
        let s = p.status();
        assert_eq!(s.id, PhilosopherId(2));
        assert_eq!(s.name, "Philosopher 2");
        assert_eq!(s.state, PhilosopherState::Hungry);
        assert_eq!(s.held, vec![ForkId(2)]);
        assert_eq!(s.think_count, 1);
    }
}
