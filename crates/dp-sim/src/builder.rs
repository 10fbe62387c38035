//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use dp_coordinator::Coordinator;
use dp_core::{Arbitration, PhilosopherRng, Seat, TableConfig, Tick};
use dp_fork::ForkRing;
use dp_philosopher::{Philosopher, Timing};
use dp_strategy::{ForkStrategy, build_strategy};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                           |
/// |----------------|---------------------------------------------------|
/// | `.names(v)`    | `"Philosopher 0"`, `"Philosopher 1"`, …           |
/// | `.strategy(s)` | `build_strategy(config.strategy, config.max_attempts)` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .names(vec!["Plato".into(), "Kant".into(), "Hume".into()])
///     .build()?;
/// ```
pub struct SimBuilder {
    config:   TableConfig,
    names:    Option<Vec<String>>,
    strategy: Option<Arc<dyn ForkStrategy>>,
}

impl SimBuilder {
    pub fn new(config: TableConfig) -> Self {
        Self { config, names: None, strategy: None }
    }

    /// Display names, one per seat in id order.
    pub fn names(mut self, names: Vec<String>) -> Self {
        self.names = Some(names);
        self
    }

    /// Use `strategy` for every seat instead of the one named in the config.
    pub fn strategy(mut self, strategy: Arc<dyn ForkStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Validate inputs and seat the table.  Nothing is built if validation
    /// fails.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let n = self.config.philosophers;

        // ── Validate and resolve optional inputs ──────────────────────────
        let names = match self.names {
            Some(names) => {
                if names.len() != n {
                    return Err(SimError::NameCountMismatch { expected: n, got: names.len() });
                }
                names
            }
            None => (0..n).map(|i| format!("Philosopher {i}")).collect(),
        };

        let strategy = self
            .strategy
            .unwrap_or_else(|| build_strategy(self.config.strategy, self.config.max_attempts));

        // ── Seat the table ────────────────────────────────────────────────
        let timing = Timing::from(&self.config);
        let philosophers = Seat::ring(n)
            .zip(names)
            .map(|(seat, name)| {
                Philosopher::new(
                    seat,
                    name,
                    Arc::clone(&strategy),
                    timing,
                    PhilosopherRng::new(self.config.seed, seat.id),
                )
            })
            .collect();

        let coordinator = match self.config.arbitration {
            Arbitration::Strategy    => None,
            Arbitration::Coordinator => Some(Coordinator::for_ring(n, self.config.regrant)),
        };

        tracing::debug!(
            philosophers = n,
            strategy = %strategy.kind(),
            arbitration = %self.config.arbitration,
            seed = self.config.seed,
            "table seated"
        );

        Ok(Sim {
            tick: Tick::ZERO,
            forks: ForkRing::new(n),
            philosophers,
            coordinator,
            config: self.config,
        })
    }
}
