//! `dp-core`: foundational types for the `rust_dp` dining-philosophers workspace.
//!
//! This crate is a dependency of every other `dp-*` crate.  It has no `dp-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `PhilosopherId`, `ForkId`                                 |
//! | [`seat`]    | `Seat`: ring adjacency (left = i, right = (i+1) mod n)    |
//! | [`time`]    | `Tick`, `DurationRange`                                   |
//! | [`config`]  | `TableConfig`                                             |
//! | [`policy`]  | `StrategyKind`, `Arbitration`, `RegrantOrder`             |
//! | [`rng`]     | `PhilosopherRng` (per-philosopher, seedable)              |
//! | [`error`]   | `DpError`, `DpResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Serde derives on ids, config and policy enums              |

pub mod config;
pub mod error;
pub mod ids;
pub mod policy;
pub mod rng;
pub mod seat;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TableConfig;
pub use error::{DpError, DpResult};
pub use ids::{ForkId, PhilosopherId};
pub use policy::{Arbitration, RegrantOrder, StrategyKind};
pub use rng::PhilosopherRng;
pub use seat::Seat;
pub use time::{DurationRange, Tick};
