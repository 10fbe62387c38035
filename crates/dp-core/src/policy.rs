//! Policy tags shared by configuration, strategies, and the driver.
//!
//! The behavior behind each tag lives in `dp-strategy` and `dp-coordinator`;
//! these enums only name the choice so that `TableConfig` can carry it.

use std::fmt;

/// Which fork-acquisition policy a philosopher follows on the strategy path.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrategyKind {
    /// Parity ordering: even seats take left first, odd seats right first.
    #[default]
    Ordered,
    /// Coin-flip first fork, probabilistic early back-off.
    Randomized,
    /// Global resource hierarchy: lower fork id first.
    Priority,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Ordered    => "ordered",
            StrategyKind::Randomized => "randomized",
            StrategyKind::Priority   => "priority",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How forks are handed out.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Arbitration {
    /// Each philosopher acquires forks one at a time through its strategy.
    #[default]
    Strategy,
    /// A central coordinator grants both forks atomically.
    Coordinator,
}

impl fmt::Display for Arbitration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Arbitration::Strategy    => "strategy",
            Arbitration::Coordinator => "coordinator",
        })
    }
}

/// Order in which the coordinator retries waiting philosophers after a
/// release.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RegrantOrder {
    /// Ascending philosopher id.
    #[default]
    Ascending,
    /// Ascending id, starting just after the most recently granted seat.
    RoundRobin,
}
