//! `dp-fork`: the exclusive resource philosophers compete for.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`fork`]   | `Fork`, `ForkStatus`, `Acquire`, `Release`                   |
//! | [`ring`]   | `ForkRing`: id-indexed arena of all forks at one table       |
//! | [`shared`] | `SharedFork`: `Mutex`-guarded fork for real threads          |
//!
//! Acquisition failure is the common case at a busy table, so neither
//! `try_acquire` nor `release` returns `Result`: both report a plain outcome
//! enum and never mutate a fork they do not own.

pub mod fork;
pub mod ring;
pub mod shared;

#[cfg(test)]
mod tests;

pub use fork::{Acquire, Fork, ForkStatus, Release};
pub use ring::ForkRing;
pub use shared::SharedFork;
