//! `dp-sim`: the turn-based driver for one table.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   for seat in 0..n (ascending):
//!     strategy path    → Philosopher::step(&mut forks)
//!     coordinator path → Philosopher::step_coordinated(&mut coordinator, &mut forks)
//!                        then apply every returned Grant:
//!                          fork.try_acquire(grantee); grantee.accept_grant(fork)
//!     report each Action to the observer
//!   observer.on_tick_end(...)
//! ```
//!
//! Nothing blocks: a failed pickup is retried on a later tick, and back-off
//! is a step counter.  Every mutation happens inside this single sequential
//! pass, so no locking is needed here.  The `SharedFork` /
//! `SharedCoordinator` types in the lower crates are the building blocks for
//! a threaded variant.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dp_core::TableConfig;
//! use dp_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(TableConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! for p in &sim.philosophers {
//!     println!("{} ate {} times", p.name(), p.eat_count());
//! }
//! ```

pub mod builder;
pub mod error;
pub mod invariants;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use invariants::InvariantViolation;
pub use observer::{NoopObserver, SimObserver, TracingObserver};
pub use sim::Sim;
pub use snapshot::TableSnapshot;
