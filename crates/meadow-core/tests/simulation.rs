//! End-to-end tests for the tick cycle.
//!
//! These drive [`World`] and the runner the way the engine does: build
//! colonies, register them, and step until the run is decided or bounded.

#![allow(clippy::unwrap_used)]

use meadow_agents::{BehaviorConfig, ENERGY_CEILING, Entity};
use meadow_core::config::{SimulationBoundsConfig, SimulationConfig};
use meadow_core::runner::{NoOpCallback, SimulationEndReason, run_simulation};
use meadow_core::scenario::build_world;
use meadow_core::{Colony, ColonyStepOutcome, World};
use meadow_types::{EntityKind, SpeciesId};

fn entity(name: &str, kind: EntityKind, energy: u32, rate: u32) -> Entity {
    Entity::with_stats(name, SpeciesId(0), kind, energy, rate).unwrap()
}

fn led_colony(name: &str, pool: u32) -> Colony {
    let mut colony = Colony::with_resource_pool(name, SpeciesId(0), pool);
    colony
        .set_leader(entity(&format!("{name}-queen"), EntityKind::Leader, 100, 10))
        .unwrap();
    colony
}

fn world_of(colonies: Vec<Colony>) -> World {
    let mut world = World::with_generated_species(4, 42, BehaviorConfig::default());
    for colony in colonies {
        world.add_colony(colony).unwrap();
    }
    world
}

#[test]
fn completion_flips_when_the_second_colony_starves() {
    // A can pay for five ticks, B for two.
    let mut world = world_of(vec![led_colony("A", 55), led_colony("B", 25)]);
    assert!(!world.is_simulation_complete());

    world.step();
    assert!(!world.is_simulation_complete());
    world.step();
    assert!(!world.is_simulation_complete());

    for _ in 3..=5 {
        world.step();
        assert!(world.is_simulation_complete());
    }
    assert!(world.colony_by_name("A").unwrap().is_alive());
    assert!(!world.colony_by_name("B").unwrap().is_alive());

    world.step();
    assert!(!world.colony_by_name("A").unwrap().is_alive());
    assert!(world.is_simulation_complete());
}

#[test]
fn single_colony_world_is_complete_before_any_step() {
    let world = world_of(vec![led_colony("Solo", 1000)]);
    assert!(world.is_simulation_complete());
    assert_eq!(world.tick(), 0);
}

#[test]
fn withdrawal_stops_at_the_first_member_that_cannot_pay() {
    let mut colony = Colony::with_resource_pool("Trio", SpeciesId(0), 25);
    colony
        .set_leader(entity("A", EntityKind::Leader, 100, 10))
        .unwrap();
    colony
        .add_member(entity("B", EntityKind::Worker, 100, 10))
        .unwrap();
    let c = colony
        .add_member(entity("C", EntityKind::Worker, 100, 10))
        .unwrap();

    let mut world = world_of(vec![colony]);
    world.step();

    let trio = world.colony_by_name("Trio").unwrap();
    assert_eq!(trio.resource_pool(), 5);
    assert!(!trio.is_active());
    let summary = world.last_summary().unwrap();
    assert!(matches!(
        summary.colonies.first().map(|r| &r.outcome),
        Some(ColonyStepOutcome::Exhausted { member, needed: 10, available: 5, .. }) if *member == c
    ));
}

#[test]
fn energy_stays_within_bounds_and_pools_never_grow() {
    let mut colony = Colony::with_resource_pool("Busy", SpeciesId(0), 100_000);
    colony
        .set_leader(entity("Queen", EntityKind::Leader, 5, 3))
        .unwrap();
    colony
        .add_member(entity("Drone", EntityKind::Worker, 31, 2))
        .unwrap();
    colony
        .add_member(entity("Guard", EntityKind::Fighter, 100, 1))
        .unwrap();
    let mut world = world_of(vec![colony, led_colony("Rival", 100_000)]);

    let mut previous: Vec<u32> = world.colonies().iter().map(Colony::resource_pool).collect();
    for _ in 0..200 {
        world.step();
        for colony in world.colonies() {
            for member in colony.members() {
                assert!(member.energy() <= ENERGY_CEILING);
            }
        }
        let current: Vec<u32> = world.colonies().iter().map(Colony::resource_pool).collect();
        for (before, after) in previous.iter().zip(&current) {
            assert!(after <= before);
        }
        previous = current;
    }

    let busy = world.colony_by_name("Busy").unwrap();
    assert_eq!(busy.leader().map(Entity::energy), Some(0));
}

#[test]
fn dead_colonies_stay_dead() {
    let mut world = world_of(vec![led_colony("A", 1000), led_colony("B", 5)]);
    world.step();
    let frozen = world.colony_by_name("B").unwrap().snapshot();

    for _ in 0..10 {
        world.step();
        assert_eq!(world.colony_by_name("B").unwrap().snapshot(), frozen);
    }
}

#[test]
fn leaderless_colony_never_consumes() {
    let mut headless = Colony::with_resource_pool("Headless", SpeciesId(1), 50);
    headless
        .add_member(entity("Drone", EntityKind::Worker, 50, 10))
        .unwrap();
    let mut world = world_of(vec![led_colony("A", 1000), headless]);

    for _ in 0..5 {
        world.step();
    }
    let headless = world.colony_by_name("Headless").unwrap();
    assert_eq!(headless.resource_pool(), 50);
    assert_eq!(headless.members().first().map(Entity::energy), Some(50));
}

#[test]
fn default_scenario_is_bounded_by_max_ticks() {
    let config = SimulationConfig::default();
    let mut world = build_world(&config).unwrap();
    let result = run_simulation(
        &mut world,
        &SimulationBoundsConfig { max_ticks: 10 },
        &mut NoOpCallback,
    );
    assert_eq!(result.end_reason, SimulationEndReason::MaxTicksReached);
    assert_eq!(result.total_ticks, 10);
    // Two members at 10 units each for ten ticks.
    for colony in &result.colonies {
        assert_eq!(colony.resource_pool, 800);
    }
}

#[test]
fn default_scenario_runs_to_extinction_when_unbounded_enough() {
    // Both colonies burn 20 units a tick from 1000 and starve together on
    // tick 51.
    let config = SimulationConfig::default();
    let mut world = build_world(&config).unwrap();
    let result = run_simulation(
        &mut world,
        &SimulationBoundsConfig { max_ticks: 1000 },
        &mut NoOpCallback,
    );
    assert_eq!(result.end_reason, SimulationEndReason::Extinction);
    assert_eq!(result.total_ticks, 51);
    assert!(result.winner().is_none());
}

#[test]
fn richer_colony_wins_a_configured_run() {
    let yaml = r"
colonies:
  - name: Rich
    resource_pool: 500
    leader: { name: QueenR }
  - name: Poor
    species: 1
    resource_pool: 100
    leader: { name: QueenP }
    members:
      - { name: Drone, consumption_rate: 5 }
";
    let config = SimulationConfig::parse_yaml(yaml).unwrap();
    let mut world = build_world(&config).unwrap();
    let result = run_simulation(&mut world, &config.simulation, &mut NoOpCallback);

    assert_eq!(result.end_reason, SimulationEndReason::Decided);
    assert_eq!(result.winner().map(|c| c.name.as_str()), Some("Rich"));
    // Poor pays 15 a tick: 100 -> 10 after six ticks. On tick seven the
    // leader takes the last 10 and the drone cannot pay.
    assert_eq!(result.total_ticks, 7);
}
