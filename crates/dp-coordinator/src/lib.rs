//! `dp-coordinator`: centralized arbitration.
//!
//! Instead of each philosopher picking up forks one at a time, a single
//! [`Coordinator`] hands out both of a philosopher's forks in one step, and
//! only when both are free.  No philosopher can ever hold exactly one fork,
//! which removes hold-and-wait entirely.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`coordinator`] | `Coordinator`, `Grant`                                |
//! | [`shared`]      | `SharedCoordinator`: `Mutex`-guarded, for threads     |
//! | [`error`]       | `CoordinatorError`, `CoordinatorResult<T>`            |
//!
//! Grants are returned from `request_to_eat` / `release_forks` as
//! `Vec<Grant>`.  The caller owns the handoff: it marks each granted fork as
//! held by the philosopher before that philosopher's next step.

pub mod coordinator;
pub mod error;
pub mod shared;


pub use coordinator::{Coordinator, Grant};
pub use error::{CoordinatorError, CoordinatorResult};
pub use shared::SharedCoordinator;
