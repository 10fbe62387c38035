//! Unit tests for dp-fork.

#[cfg(test)]
mod fork {
    use dp_core::{ForkId, PhilosopherId};

    use crate::{Acquire, Fork, ForkStatus, Release};

    #[test]
    fn new_fork_is_available() {
        let f = Fork::new(ForkId(3));
        assert_eq!(f.id(), ForkId(3));
        assert!(f.is_available());
        assert_eq!(f.holder(), None);
    }

    #[test]
    fn acquire_then_busy() {
        let mut f = Fork::new(ForkId(0));
        assert_eq!(f.try_acquire(PhilosopherId(1)), Acquire::Acquired);
        assert_eq!(f.status(), ForkStatus::InUse(PhilosopherId(1)));

        // Second requester fails and learns the holder; state unchanged.
        assert_eq!(
            f.try_acquire(PhilosopherId(2)),
            Acquire::Busy { holder: PhilosopherId(1) }
        );
        assert_eq!(f.holder(), Some(PhilosopherId(1)));
    }

    #[test]
    fn reacquire_by_holder_is_busy() {
        let mut f = Fork::new(ForkId(0));
        let _ = f.try_acquire(PhilosopherId(1));
        assert!(!f.try_acquire(PhilosopherId(1)).is_acquired());
    }

    #[test]
    fn holder_release() {
        let mut f = Fork::new(ForkId(0));
        let _ = f.try_acquire(PhilosopherId(4));
        assert_eq!(f.release(PhilosopherId(4)), Release::Released);
        assert!(f.is_available());
    }

    #[test]
    fn non_holder_release_is_ignored() {
        let mut f = Fork::new(ForkId(0));
        let _ = f.try_acquire(PhilosopherId(4));
        assert_eq!(
            f.release(PhilosopherId(2)),
            Release::NotHolder { holder: Some(PhilosopherId(4)) }
        );
        assert_eq!(f.holder(), Some(PhilosopherId(4)));
    }

    #[test]
    fn release_of_free_fork_is_ignored() {
        let mut f = Fork::new(ForkId(0));
        assert_eq!(f.release(PhilosopherId(0)), Release::NotHolder { holder: None });
        assert!(f.is_available());
    }

    #[test]
    fn force_release_bypasses_ownership() {
        let mut f = Fork::new(ForkId(0));
        let _ = f.try_acquire(PhilosopherId(9));
        assert_eq!(f.force_release(), Some(PhilosopherId(9)));
        assert!(f.is_available());
        assert_eq!(f.force_release(), None);
    }

    #[test]
    fn status_display() {
        assert_eq!(ForkStatus::Available.to_string(), "available");
        assert_eq!(ForkStatus::InUse(PhilosopherId(2)).to_string(), "held by P2");
    }
}

#[cfg(test)]
mod ring {
    use dp_core::{ForkId, PhilosopherId};

    use crate::{ForkRing, ForkStatus};

    #[test]
    fn ids_are_dense() {
        let ring = ForkRing::new(4);
        assert_eq!(ring.len(), 4);
        for (i, f) in ring.iter().enumerate() {
            assert_eq!(f.id(), ForkId(i as u32));
        }
        assert!(ring.get(ForkId(4)).is_none());
    }

    #[test]
    fn in_use_and_held_by() {
        let mut ring = ForkRing::new(5);
        let _ = ring[ForkId(1)].try_acquire(PhilosopherId(1));
        let _ = ring[ForkId(2)].try_acquire(PhilosopherId(1));
        let _ = ring[ForkId(4)].try_acquire(PhilosopherId(3));
        assert_eq!(ring.in_use_count(), 3);
        assert_eq!(ring.held_by(PhilosopherId(1)), vec![ForkId(1), ForkId(2)]);
        assert!(ring.held_by(PhilosopherId(0)).is_empty());
    }

    #[test]
    fn force_release_all_clears_everything() {
        let mut ring = ForkRing::new(3);
        for i in 0..3 {
            let _ = ring[ForkId(i)].try_acquire(PhilosopherId(i));
        }
        ring.force_release_all();
        assert_eq!(ring.in_use_count(), 0);
        assert!(ring.statuses().iter().all(|(_, s)| *s == ForkStatus::Available));
    }
}

#[cfg(test)]
mod shared {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use dp_core::{ForkId, PhilosopherId};

    use crate::SharedFork;

    #[test]
    fn clones_share_state() {
        let a = SharedFork::new(ForkId(0));
        let b = a.clone();
        assert!(a.try_acquire(PhilosopherId(0)).is_acquired());
        assert_eq!(b.status().holder(), Some(PhilosopherId(0)));
        assert!(!b.release(PhilosopherId(1)).is_released());
        assert!(b.release(PhilosopherId(0)).is_released());
    }

    #[test]
    fn never_two_holders_across_threads() {
        let fork = SharedFork::new(ForkId(0));
        let holders = Arc::new(AtomicUsize::new(0));
        let max_seen = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8u32)
            .map(|i| {
                let fork = fork.clone();
                let holders = Arc::clone(&holders);
                let max_seen = Arc::clone(&max_seen);
                thread::spawn(move || {
                    let me = PhilosopherId(i);
                    let mut meals = 0;
                    while meals < 200 {
                        if fork.try_acquire(me).is_acquired() {
                            let now = holders.fetch_add(1, Ordering::SeqCst) + 1;
                            max_seen.fetch_max(now, Ordering::SeqCst);
                            holders.fetch_sub(1, Ordering::SeqCst);
                            assert!(fork.release(me).is_released());
                            meals += 1;
                        } else {
                            thread::yield_now();
                        }
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
        assert!(fork.status().holder().is_none());
    }
}
