//! Core records: species (trait sets) and read-only snapshots.
//!
//! Snapshots are what the outside world sees of a running simulation.
//! They are plain copies, so holding one never borrows the world.

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::ids::{ColonyId, EntityId, SpeciesId};

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// An immutable set of numeric modifiers shared by a category of entities.
///
/// Only the world's species generator creates these. The fields are
/// private so a species cannot change once the run has begun.
///
/// `harvest_bonus` is carried but not read by the tick logic: colonies
/// have no replenishment mechanic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    id: SpeciesId,
    name: String,
    strength_bonus: u32,
    efficiency_bonus: u32,
    harvest_bonus: u32,
}

impl Species {
    /// Create a species record.
    pub const fn new(
        id: SpeciesId,
        name: String,
        strength_bonus: u32,
        efficiency_bonus: u32,
        harvest_bonus: u32,
    ) -> Self {
        Self {
            id,
            name,
            strength_bonus,
            efficiency_bonus,
            harvest_bonus,
        }
    }

    /// The species identifier.
    pub const fn id(&self) -> SpeciesId {
        self.id
    }

    /// Display name, e.g. `Species0`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Strength modifier.
    pub const fn strength_bonus(&self) -> u32 {
        self.strength_bonus
    }

    /// Efficiency modifier.
    pub const fn efficiency_bonus(&self) -> u32 {
        self.efficiency_bonus
    }

    /// Harvest modifier.
    pub const fn harvest_bonus(&self) -> u32 {
        self.harvest_bonus
    }
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// Point-in-time view of a single entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Entity identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Behavioral kind.
    pub kind: EntityKind,
    /// Energy at the time of the snapshot.
    pub energy: u32,
    /// Food withdrawn per tick.
    pub consumption_rate: u32,
}

/// Point-in-time view of a colony and its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColonySnapshot {
    /// Colony identifier.
    pub id: ColonyId,
    /// Display name.
    pub name: String,
    /// Species the colony belongs to.
    pub species: SpeciesId,
    /// Remaining food.
    pub resource_pool: u32,
    /// Whether the colony has not yet run out of food.
    pub active: bool,
    /// Whether the colony is active and has a leader.
    pub alive: bool,
    /// Current leader, if one has been assigned.
    pub leader: Option<EntityId>,
    /// Members in iteration order.
    pub members: Vec<EntitySnapshot>,
}
