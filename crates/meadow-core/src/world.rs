//! The world: every colony, the species table, and the tick counter.
//!
//! The world is an ordinary value. It is built once, handed to whoever
//! drives the simulation, and passed by reference from there.
//!
//! Colonies may only be registered before the first tick. After that the
//! set of colonies is fixed for the rest of the run; individual colonies
//! still go inactive on their own.

use meadow_agents::{BehaviorConfig, SetupError};
use meadow_types::{ColonyId, ColonySnapshot, Species};
use meadow_world::{find_species, generate_species};
use serde::Serialize;
use tracing::{debug, info};

use crate::colony::{Colony, ColonyStepOutcome};

/// What happened to one colony during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColonyTickReport {
    /// The colony.
    pub colony: ColonyId,
    /// Its name.
    pub name: String,
    /// Result of the colony's step.
    pub outcome: ColonyStepOutcome,
    /// Food left after the step.
    pub resource_pool: u32,
}

/// Summary of a single tick's execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickSummary {
    /// The tick number that was executed (1-based).
    pub tick: u64,
    /// Number of colonies still alive at the end of the tick.
    pub colonies_alive: u32,
    /// Per-colony results, in registration order.
    pub colonies: Vec<ColonyTickReport>,
}

/// The simulation container.
#[derive(Debug, Clone)]
pub struct World {
    species: Vec<Species>,
    colonies: Vec<Colony>,
    behavior: BehaviorConfig,
    tick: u64,
    last_summary: Option<TickSummary>,
}

impl World {
    /// Create a world with a fixed species table and no colonies.
    pub const fn new(species: Vec<Species>, behavior: BehaviorConfig) -> Self {
        Self {
            species,
            colonies: Vec::new(),
            behavior,
            tick: 0,
            last_summary: None,
        }
    }

    /// Create a world whose species table is generated from `seed`.
    pub fn with_generated_species(species_count: u32, seed: u64, behavior: BehaviorConfig) -> Self {
        Self::new(generate_species(species_count, seed), behavior)
    }

    /// Register a colony.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::SimulationStarted`] once the first tick has
    /// run, or [`SetupError::UnknownSpecies`] if the colony's species is
    /// not in this world's table.
    pub fn add_colony(&mut self, colony: Colony) -> Result<ColonyId, SetupError> {
        if self.tick > 0 {
            return Err(SetupError::SimulationStarted {
                colony: colony.name().to_owned(),
                tick: self.tick,
            });
        }
        if find_species(&self.species, colony.species()).is_none() {
            return Err(SetupError::UnknownSpecies(colony.species()));
        }
        let id = colony.id();
        info!(
            colony = colony.name(),
            species = %colony.species(),
            members = colony.members().len(),
            resource_pool = colony.resource_pool(),
            has_leader = colony.leader_id().is_some(),
            "Colony registered"
        );
        self.colonies.push(colony);
        Ok(id)
    }

    /// Advance every colony by one tick.
    ///
    /// Colonies are stepped in registration order regardless of their
    /// state; inactive or leaderless colonies do nothing internally.
    pub fn step(&mut self) {
        self.tick = self.tick.saturating_add(1);
        let tick = self.tick;

        let mut reports = Vec::with_capacity(self.colonies.len());
        for colony in &mut self.colonies {
            let outcome = colony.step(&self.behavior);
            if let ColonyStepOutcome::Exhausted {
                ref member_name,
                needed,
                available,
                ..
            } = outcome
            {
                info!(
                    tick,
                    colony = colony.name(),
                    member = member_name.as_str(),
                    needed,
                    available,
                    "Colony ran out of food"
                );
            }
            reports.push(ColonyTickReport {
                colony: colony.id(),
                name: colony.name().to_owned(),
                outcome,
                resource_pool: colony.resource_pool(),
            });
        }

        let colonies_alive = u32::try_from(self.alive_colony_count()).unwrap_or(u32::MAX);
        debug!(tick, colonies_alive, "Tick complete");
        self.last_summary = Some(TickSummary {
            tick,
            colonies_alive,
            colonies: reports,
        });
    }

    /// Whether at most one colony is still viable.
    ///
    /// With a single registered colony this holds before the first tick.
    pub fn is_simulation_complete(&self) -> bool {
        self.alive_colony_count() <= 1
    }

    /// Number of colonies that are active and led.
    pub fn alive_colony_count(&self) -> usize {
        self.colonies.iter().filter(|c| c.is_alive()).count()
    }

    /// Colonies that are still alive.
    pub fn alive_colonies(&self) -> impl Iterator<Item = &Colony> {
        self.colonies.iter().filter(|c| c.is_alive())
    }

    /// Number of ticks executed so far.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Whether the first tick has run.
    pub const fn has_started(&self) -> bool {
        self.tick > 0
    }

    /// The species table.
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// All colonies in registration order.
    pub fn colonies(&self) -> &[Colony] {
        &self.colonies
    }

    /// Look up a colony by id.
    pub fn colony(&self, id: ColonyId) -> Option<&Colony> {
        self.colonies.iter().find(|c| c.id() == id)
    }

    /// Look up a colony by name.
    pub fn colony_by_name(&self, name: &str) -> Option<&Colony> {
        self.colonies.iter().find(|c| c.name() == name)
    }

    /// The behavior configuration applied to every entity.
    pub const fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    /// Summary of the most recent tick, if any tick has run.
    pub const fn last_summary(&self) -> Option<&TickSummary> {
        self.last_summary.as_ref()
    }

    /// Snapshot every colony.
    pub fn snapshot(&self) -> Vec<ColonySnapshot> {
        self.colonies.iter().map(Colony::snapshot).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use meadow_agents::Entity;
    use meadow_types::{EntityKind, SpeciesId};

    use super::*;

    fn world() -> World {
        World::with_generated_species(4, 42, BehaviorConfig::default())
    }

    fn led_colony(name: &str, pool: u32) -> Colony {
        let mut colony = Colony::with_resource_pool(name, SpeciesId(0), pool);
        let queen =
            Entity::with_stats(format!("{name}-queen"), SpeciesId(0), EntityKind::Leader, 100, 10)
                .unwrap();
        colony.set_leader(queen).unwrap();
        colony
    }

    #[test]
    fn empty_world_is_complete() {
        let w = world();
        assert!(w.is_simulation_complete());
        assert_eq!(w.tick(), 0);
        assert!(w.last_summary().is_none());
    }

    #[test]
    fn single_colony_world_is_complete_before_any_step() {
        let mut w = world();
        w.add_colony(led_colony("Solo", 1000)).unwrap();
        assert!(w.is_simulation_complete());
    }

    #[test]
    fn two_live_colonies_are_not_complete() {
        let mut w = world();
        w.add_colony(led_colony("A", 1000)).unwrap();
        w.add_colony(led_colony("B", 1000)).unwrap();
        assert!(!w.is_simulation_complete());
    }

    #[test]
    fn leaderless_colonies_do_not_count_as_alive() {
        let mut w = world();
        w.add_colony(led_colony("A", 1000)).unwrap();
        w.add_colony(Colony::new("Headless", SpeciesId(1))).unwrap();
        assert_eq!(w.alive_colony_count(), 1);
        assert!(w.is_simulation_complete());
    }

    #[test]
    fn add_colony_after_first_tick_is_rejected() {
        let mut w = world();
        w.add_colony(led_colony("A", 1000)).unwrap();
        w.step();
        let late = w.add_colony(led_colony("Late", 1000));
        assert_eq!(
            late,
            Err(SetupError::SimulationStarted {
                colony: "Late".to_owned(),
                tick: 1
            })
        );
        assert_eq!(w.colonies().len(), 1);
    }

    #[test]
    fn add_colony_with_unknown_species_is_rejected() {
        let mut w = world();
        let stray = Colony::new("Stray", SpeciesId(99));
        assert_eq!(
            w.add_colony(stray),
            Err(SetupError::UnknownSpecies(SpeciesId(99)))
        );
    }

    #[test]
    fn step_advances_every_colony_and_records_summary() {
        let mut w = world();
        let a = w.add_colony(led_colony("A", 100)).unwrap();
        let b = w.add_colony(led_colony("B", 5)).unwrap();
        w.step();

        let summary = w.last_summary().unwrap();
        assert_eq!(summary.tick, 1);
        assert_eq!(summary.colonies_alive, 1);
        assert_eq!(summary.colonies.len(), 2);
        assert_eq!(
            summary.colonies.first().map(|r| &r.outcome),
            Some(&ColonyStepOutcome::Advanced { consumed: 10 })
        );
        assert!(matches!(
            summary.colonies.get(1).map(|r| &r.outcome),
            Some(ColonyStepOutcome::Exhausted { .. })
        ));

        assert_eq!(w.colony(a).map(Colony::resource_pool), Some(90));
        assert_eq!(w.colony(b).map(Colony::resource_pool), Some(5));
        assert!(w.is_simulation_complete());
    }

    #[test]
    fn inactive_colonies_are_still_visited() {
        let mut w = world();
        w.add_colony(led_colony("A", 100)).unwrap();
        w.add_colony(led_colony("B", 5)).unwrap();
        w.step();
        w.step();
        let summary = w.last_summary().unwrap();
        assert_eq!(summary.tick, 2);
        assert_eq!(
            summary.colonies.get(1).map(|r| &r.outcome),
            Some(&ColonyStepOutcome::Idle)
        );
    }

    #[test]
    fn lookup_by_name_and_alive_iterator() {
        let mut w = world();
        w.add_colony(led_colony("A", 100)).unwrap();
        w.add_colony(led_colony("B", 5)).unwrap();
        w.step();
        let alive: Vec<&str> = w.alive_colonies().map(Colony::name).collect();
        assert_eq!(alive, vec!["A"]);
        assert!(w.colony_by_name("B").is_some_and(|c| !c.is_alive()));
        assert!(w.colony_by_name("C").is_none());
    }

    #[test]
    fn snapshot_lists_every_colony() {
        let mut w = world();
        w.add_colony(led_colony("A", 100)).unwrap();
        w.add_colony(Colony::new("B", SpeciesId(2))).unwrap();
        let snap = w.snapshot();
        assert_eq!(snap.len(), 2);
        assert!(snap.first().is_some_and(|c| c.alive));
        assert!(snap.get(1).is_some_and(|c| !c.alive));
    }
}
