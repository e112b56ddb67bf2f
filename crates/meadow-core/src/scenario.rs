//! Build a ready-to-run [`World`] from configuration.
//!
//! Colonies are created in the order they appear in the config. Within a
//! colony the leader is installed first so that it is stepped before the
//! other members, matching the order a colony is normally assembled by
//! hand.

use meadow_agents::{BehaviorConfig, Entity, SetupError};
use meadow_types::{EntityId, EntityKind, SpeciesId};
use meadow_world::Room;
use tracing::info;

use crate::colony::Colony;
use crate::config::{ColonyConfig, MemberConfig, SimulationConfig};
use crate::world::World;

/// Errors that can occur while turning configuration into a world.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// The behavior section cannot produce valid entities.
    #[error("behavior configuration rejected: {source}")]
    Behavior {
        /// The underlying setup error.
        #[source]
        source: SetupError,
    },

    /// A colony could not be assembled or registered.
    #[error("colony {colony}: {source}")]
    Colony {
        /// Name of the colony that failed.
        colony: String,
        /// The underlying setup error.
        #[source]
        source: SetupError,
    },
}

/// Create the world described by `config`.
///
/// # Errors
///
/// Returns [`ScenarioError::Behavior`] if the behavior rules are invalid,
/// or [`ScenarioError::Colony`] naming the first colony that failed to
/// build.
pub fn build_world(config: &SimulationConfig) -> Result<World, ScenarioError> {
    config
        .behavior
        .validate()
        .map_err(|source| ScenarioError::Behavior { source })?;

    let mut world = World::with_generated_species(
        config.world.species_count,
        config.world.seed,
        config.behavior.clone(),
    );

    for colony_config in &config.colonies {
        let colony = build_colony(colony_config, &config.behavior).map_err(|source| {
            ScenarioError::Colony {
                colony: colony_config.name.clone(),
                source,
            }
        })?;
        world
            .add_colony(colony)
            .map_err(|source| ScenarioError::Colony {
                colony: colony_config.name.clone(),
                source,
            })?;
    }

    info!(
        world = config.world.name.as_str(),
        seed = config.world.seed,
        species = world.species().len(),
        colonies = world.colonies().len(),
        "World built"
    );
    Ok(world)
}

fn build_colony(config: &ColonyConfig, behavior: &BehaviorConfig) -> Result<Colony, SetupError> {
    let species = SpeciesId::from(config.species);
    let mut colony = Colony::with_resource_pool(config.name.as_str(), species, config.resource_pool)
        .with_succession(config.leader_succession);

    for room in &config.rooms {
        colony.add_room(Room::new(room.name.as_str(), room.kind, room.capacity));
    }

    let mut placements: Vec<(EntityId, &str)> = Vec::new();

    if let Some(leader) = &config.leader {
        let entity = build_entity(leader, species, EntityKind::Leader, behavior)?;
        let id = entity.id();
        colony.set_leader(entity)?;
        if let Some(room) = leader.room.as_deref() {
            placements.push((id, room));
        }
    }

    for member in &config.members {
        let entity = build_entity(member, species, EntityKind::Worker, behavior)?;
        let id = colony.add_member(entity)?;
        if let Some(room) = member.room.as_deref() {
            placements.push((id, room));
        }
    }

    for (id, room) in placements {
        colony.assign_room(room, id)?;
    }

    Ok(colony)
}

fn build_entity(
    config: &MemberConfig,
    species: SpeciesId,
    default_kind: EntityKind,
    behavior: &BehaviorConfig,
) -> Result<Entity, SetupError> {
    Entity::with_stats(
        config.name.as_str(),
        species,
        config.kind.unwrap_or(default_kind),
        config.energy.unwrap_or(behavior.starting_energy),
        config.consumption_rate.unwrap_or(behavior.consumption_rate),
    )
}
