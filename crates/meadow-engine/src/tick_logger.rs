//! Tick callback that writes one log line per tick.

use meadow_core::runner::TickCallback;
use meadow_core::{ColonyStepOutcome, TickSummary, World};
use tracing::{debug, info};

/// Logs every tick at `info` and every colony's outcome at `debug`.
#[derive(Debug, Default)]
pub struct TickLogger {
    exhausted: u32,
}

impl TickLogger {
    /// Create a logger with no ticks seen.
    pub const fn new() -> Self {
        Self { exhausted: 0 }
    }

    /// Number of colonies that ran out of food while this logger watched.
    pub const fn exhausted(&self) -> u32 {
        self.exhausted
    }
}

impl TickCallback for TickLogger {
    fn on_tick(&mut self, summary: &TickSummary, world: &World) {
        for report in &summary.colonies {
            if matches!(report.outcome, ColonyStepOutcome::Exhausted { .. }) {
                self.exhausted = self.exhausted.saturating_add(1);
            }
            debug!(
                tick = summary.tick,
                colony = report.name.as_str(),
                outcome = ?report.outcome,
                resource_pool = report.resource_pool,
                "Colony stepped"
            );
        }

        info!(
            tick = summary.tick,
            colonies_alive = summary.colonies_alive,
            complete = world.is_simulation_complete(),
            "Tick"
        );
    }
}
