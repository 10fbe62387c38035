//! ring: five philosophers at one table, run both ways.
//!
//! The table is run once on the strategy path (each philosopher picks up
//! forks itself) and once under a central coordinator, from the same seed.
//!
//! ```text
//! cargo run -p ring                        # built-in defaults
//! cargo run -p ring -- demos/ring/table.json
//! RUST_LOG=dp_sim=debug cargo run -p ring  # every pickup and grant
//! ```

use std::time::Instant;

use anyhow::{Context, Result};

use dp_coordinator::Grant;
use dp_core::{Arbitration, PhilosopherId, TableConfig, Tick};
use dp_philosopher::Action;
use dp_sim::{Sim, SimBuilder, SimObserver, TracingObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const NAMES: [&str; 5] = ["Aristotle", "Kant", "Spinoza", "Marx", "Russell"];

// ── Observer ──────────────────────────────────────────────────────────────────

/// Forwards to [`TracingObserver`] and tallies contention.
#[derive(Default)]
struct TableStats {
    failed_pickups: u64,
    put_downs:      u64,
    grants:         u64,
    stuck_ticks:    u64,
}

impl SimObserver for TableStats {
    fn on_action(&mut self, tick: Tick, philosopher: PhilosopherId, action: &Action) {
        match action {
            Action::PickupFailed { .. } => self.failed_pickups += 1,
            Action::PutDown(_)          => self.put_downs += 1,
            _ => {}
        }
        TracingObserver.on_action(tick, philosopher, action);
    }

    fn on_grant(&mut self, tick: Tick, grant: Grant) {
        self.grants += 1;
        TracingObserver.on_grant(tick, grant);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        TracingObserver.on_sim_end(final_tick);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config() -> Result<TableConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(TableConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    tracing::info!(%path, "loaded table config");
    Ok(config)
}

fn names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match NAMES.get(i) {
            Some(name) => (*name).to_string(),
            None => format!("Philosopher {i}"),
        })
        .collect()
}

fn run_table(config: TableConfig) -> Result<(Sim, TableStats)> {
    let mut sim = SimBuilder::new(config.clone())
        .names(names(config.philosophers))
        .build()?;
    let mut stats = TableStats::default();

    while sim.tick < config.end_tick() {
        sim.step(&mut stats)?;
        if sim.deadlock_suspected() {
            stats.stuck_ticks += 1;
        }
    }
    stats.on_sim_end(sim.tick);
    Ok((sim, stats))
}

fn print_table(sim: &Sim, stats: &TableStats) {
    println!("{:<12} {:>6} {:>7}  {:<8}", "Name", "Meals", "Thinks", "State");
    println!("{}", "-".repeat(38));
    for p in &sim.philosophers {
        println!(
            "{:<12} {:>6} {:>7}  {:<8}",
            p.name(),
            p.eat_count(),
            p.think_count(),
            p.state().as_str(),
        );
    }
    println!(
        "meals: {}  failed pickups: {}  put-downs: {}  grants: {}  stuck ticks: {}",
        sim.snapshot().total_meals(),
        stats.failed_pickups,
        stats.put_downs,
        stats.grants,
        stats.stuck_ticks,
    );
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let config = load_config()?;
    config.validate()?;

    println!("=== ring: dining philosophers ===");
    println!(
        "Philosophers: {}  |  Ticks: {}  |  Seed: {}  |  Strategy: {}",
        config.philosophers, config.total_ticks, config.seed, config.strategy
    );
    println!();

    for arbitration in [Arbitration::Strategy, Arbitration::Coordinator] {
        let t0 = Instant::now();
        let (sim, stats) = run_table(TableConfig { arbitration, ..config.clone() })?;
        println!("── {arbitration} ({:.3} s) ──", t0.elapsed().as_secs_f64());
        print_table(&sim, &stats);
    }

    Ok(())
}
