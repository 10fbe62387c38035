//! `dp-strategy`: fork-acquisition policies.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`strategy`]   | `ForkStrategy` trait, `build_strategy`                     |
//! | [`ordered`]    | `OrderedStrategy`: parity ordering                         |
//! | [`randomized`] | `RandomizedStrategy`: coin-flip order, early back-off      |
//! | [`priority`]   | `PriorityStrategy`: lower fork id first                    |
//!
//! # Why ordering matters
//!
//! If every philosopher reaches for the same side first, all of them can end
//! up holding one fork and waiting on a neighbour: a cycle in the wait-for
//! graph.  Each policy here breaks that symmetry, and all of them bound how
//! long a half-acquired fork is held.

pub mod ordered;
pub mod priority;
pub mod randomized;
pub mod strategy;


pub use ordered::OrderedStrategy;
pub use priority::PriorityStrategy;
pub use randomized::RandomizedStrategy;
pub use strategy::{ForkStrategy, build_strategy};
