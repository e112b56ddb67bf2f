//! Bounded simulation loop.
//!
//! This module provides [`run_simulation`], which drives [`World::step`]
//! until one of:
//!
//! - **Decided**: at most one colony is still alive
//! - **Extinction**: no colony is alive
//! - **Tick limit**: `max_ticks` ticks have run
//!
//! Termination is checked before each tick, so a world that is already
//! decided runs zero ticks. A world with fewer than two registered
//! colonies is decided from the start by definition, so for such a world
//! only extinction or the tick limit ends the run.

use chrono::{DateTime, Utc};
use meadow_types::ColonySnapshot;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::SimulationBoundsConfig;
use crate::world::{TickSummary, World};

/// Why the simulation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationEndReason {
    /// Exactly one colony remains alive.
    Decided,
    /// No colony is alive.
    Extinction,
    /// Reached the configured `max_ticks` limit.
    MaxTicksReached,
}

/// Result of the simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    /// The reason the simulation ended.
    pub end_reason: SimulationEndReason,
    /// Total number of ticks executed.
    pub total_ticks: u64,
    /// The last tick summary, if any tick completed.
    pub final_summary: Option<TickSummary>,
    /// State of every colony when the run stopped.
    pub colonies: Vec<ColonySnapshot>,
    /// Wall-clock start of the run.
    pub started_at: DateTime<Utc>,
    /// Wall-clock end of the run.
    pub finished_at: DateTime<Utc>,
}

impl SimulationResult {
    /// The surviving colony, if the run was decided.
    pub fn winner(&self) -> Option<&ColonySnapshot> {
        if self.end_reason == SimulationEndReason::Decided {
            self.colonies.iter().find(|c| c.alive)
        } else {
            None
        }
    }
}

/// Callback invoked after each tick completes.
pub trait TickCallback {
    /// Called after a tick with that tick's summary and the world after it.
    fn on_tick(&mut self, summary: &TickSummary, world: &World);
}

/// A no-op tick callback for testing.
pub struct NoOpCallback;

impl TickCallback for NoOpCallback {
    fn on_tick(&mut self, _summary: &TickSummary, _world: &World) {}
}

/// Run the simulation loop until a termination condition is met.
///
/// Ticks continue from wherever `world` currently is; `max_ticks` bounds
/// the world's tick counter, not the number of ticks run by this call.
pub fn run_simulation(
    world: &mut World,
    bounds: &SimulationBoundsConfig,
    callback: &mut dyn TickCallback,
) -> SimulationResult {
    let started_at = Utc::now();
    let contested = world.colonies().len() >= 2;
    let first_tick = world.tick();

    info!(
        max_ticks = bounds.max_ticks,
        colonies = world.colonies().len(),
        alive = world.alive_colony_count(),
        contested,
        "Simulation starting"
    );

    let end_reason = loop {
        if let Some(reason) = termination(world, contested) {
            break reason;
        }

        if world.tick() >= bounds.max_ticks {
            info!(
                tick = world.tick(),
                max_ticks = bounds.max_ticks,
                "Tick limit reached"
            );
            break SimulationEndReason::MaxTicksReached;
        }

        world.step();

        if let Some(summary) = world.last_summary() {
            callback.on_tick(summary, world);
        }
    };

    SimulationResult {
        end_reason,
        total_ticks: world.tick().saturating_sub(first_tick),
        final_summary: world.last_summary().cloned(),
        colonies: world.snapshot(),
        started_at,
        finished_at: Utc::now(),
    }
}

fn termination(world: &World, contested: bool) -> Option<SimulationEndReason> {
    let alive = world.alive_colony_count();
    if alive == 0 {
        info!(tick = world.tick(), "No colony alive -- extinction");
        return Some(SimulationEndReason::Extinction);
    }
    if contested && world.is_simulation_complete() {
        info!(tick = world.tick(), "Single colony remaining -- decided");
        return Some(SimulationEndReason::Decided);
    }
    None
}

/// Log the simulation end sequence.
pub fn log_simulation_end(result: &SimulationResult) {
    let elapsed_ms = result
        .finished_at
        .signed_duration_since(result.started_at)
        .num_milliseconds();
    info!(
        reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        final_tick = result.final_summary.as_ref().map(|s| s.tick),
        elapsed_ms,
        "Simulation ended"
    );

    if let Some(winner) = result.winner() {
        info!(
            colony = winner.name.as_str(),
            resource_pool = winner.resource_pool,
            members = winner.members.len(),
            "Winner"
        );
    }

    for colony in &result.colonies {
        info!(
            colony = colony.name.as_str(),
            alive = colony.alive,
            resource_pool = colony.resource_pool,
            "Final colony state"
        );
    }

    if result.final_summary.is_none() {
        warn!("Simulation ended with no ticks executed");
    }
}
