//! Table configuration.
//!
//! Typically built in code or loaded from JSON by the application crate (with
//! the `serde` feature) and passed to the driver's builder.

use crate::{Arbitration, DpError, DpResult, DurationRange, RegrantOrder, StrategyKind, Tick};

/// Default cap on failed second-fork attempts before a held fork is put back.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Top-level configuration for one table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableConfig {
    /// Number of philosophers, which is also the number of forks.
    pub philosophers: usize,

    /// Thinking duration range, in ticks.
    pub think: DurationRange,

    /// Eating duration range, in ticks.
    pub eat: DurationRange,

    /// Failed second-fork attempts tolerated before the held fork is
    /// released.
    pub max_attempts: u32,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Ticks simulated by `Sim::run`.
    pub total_ticks: u64,

    /// Acquisition policy used on the strategy path.
    pub strategy: StrategyKind,

    /// Strategy path or central coordinator.
    pub arbitration: Arbitration,

    /// Re-grant order used by the coordinator after a release.
    pub regrant: RegrantOrder,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            philosophers: 5,
            think:        DurationRange::new(3, 8),
            eat:          DurationRange::new(2, 6),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed:         42,
            total_ticks:  1_000,
            strategy:     StrategyKind::default(),
            arbitration:  Arbitration::default(),
            regrant:      RegrantOrder::default(),
        }
    }
}

impl TableConfig {
    /// Check every construction rule.  Nothing is built from an invalid
    /// configuration.
    pub fn validate(&self) -> DpResult<()> {
        if self.philosophers < 2 {
            return Err(DpError::Config(format!(
                "a table needs at least 2 philosophers, got {}",
                self.philosophers
            )));
        }
        if u32::try_from(self.philosophers).is_err() {
            return Err(DpError::Config(format!(
                "{} philosophers exceeds the id space",
                self.philosophers
            )));
        }
        if !self.think.is_valid() {
            return Err(DpError::Config(format!("invalid think range {}", self.think)));
        }
        if !self.eat.is_valid() {
            return Err(DpError::Config(format!("invalid eat range {}", self.eat)));
        }
        if self.max_attempts == 0 {
            return Err(DpError::Config("max_attempts must be at least 1".into()));
        }
        Ok(())
    }

    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}
