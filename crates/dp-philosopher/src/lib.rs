//! `dp-philosopher`: the per-seat state machine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`state`]       | `PhilosopherState`, `PhilosopherStatus`, `Timing`        |
//! | [`held`]        | `HeldForks`: the 0, 1 or 2 forks a seat holds            |
//! | [`action`]      | `Action`, `CoordinatedStep`: what one step did           |
//! | [`philosopher`] | `Philosopher` and its two step functions                 |
//!
//! # Stepping
//!
//! A philosopher advances exactly one transition per call, on one of two
//! paths:
//!
//! - [`Philosopher::step`]: acquires forks itself, one at a time, as its
//!   [`ForkStrategy`][dp_strategy::ForkStrategy] directs.
//! - [`Philosopher::step_coordinated`]: asks a
//!   [`Coordinator`][dp_coordinator::Coordinator] for both forks at once.
//!   Grants come back in [`CoordinatedStep::grants`]; the driver applies them
//!   with [`Philosopher::accept_grant`] before the grantee's next step.
//!
//! Both return what happened as a list of [`Action`]s instead of pushing
//! notifications, so the caller decides what to log or display.

pub mod action;
pub mod held;
pub mod philosopher;
pub mod state;

#[cfg(test)]
mod tests;

pub use action::{Action, CoordinatedStep};
pub use held::HeldForks;
pub use philosopher::Philosopher;
pub use state::{PhilosopherState, PhilosopherStatus, Timing};
