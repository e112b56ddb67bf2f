//! Entities and their per-tick behavior.
//!
//! Every entity applies exactly one energy transition per tick and then
//! tries to withdraw its food from the colony pool:
//!
//! - Below the low-energy threshold a worker or fighter rests:
//!   `energy = min(100, energy + rest_recovery)`.
//! - At or above the threshold every kind works:
//!   `energy = max(0, energy - work_cost)`.
//! - A leader never rests. Below the threshold it does nothing, so a
//!   tired leader stays tired.
//!
//! The kinds share one type; the difference lives in the pure function
//! returned by [`behavior_for`].

use meadow_types::{EntityId, EntityKind, EntitySnapshot, SpeciesId};
use tracing::trace;

use crate::config::{BehaviorConfig, ENERGY_CEILING};
use crate::error::SetupError;

/// Energy transition applied once per tick: `(energy, config) -> energy`.
pub type Behavior = fn(u32, &BehaviorConfig) -> u32;

/// Select the energy transition for an entity kind.
pub const fn behavior_for(kind: EntityKind) -> Behavior {
    if kind.can_rest() {
        rest_or_work
    } else {
        work_only
    }
}

/// Rest when tired, otherwise work.
const fn rest_or_work(energy: u32, config: &BehaviorConfig) -> u32 {
    if energy < config.low_energy_threshold {
        rest(energy, config)
    } else {
        work(energy, config)
    }
}

/// Work when able, otherwise idle.
const fn work_only(energy: u32, config: &BehaviorConfig) -> u32 {
    if energy < config.low_energy_threshold {
        energy
    } else {
        work(energy, config)
    }
}

const fn rest(energy: u32, config: &BehaviorConfig) -> u32 {
    let recovered = energy.saturating_add(config.rest_recovery);
    if recovered > ENERGY_CEILING {
        ENERGY_CEILING
    } else {
        recovered
    }
}

const fn work(energy: u32, config: &BehaviorConfig) -> u32 {
    energy.saturating_sub(config.work_cost)
}

/// A single simulated actor.
///
/// Entities are owned exclusively by their colony. The kind is fixed at
/// creation and energy changes only through [`Entity::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    id: EntityId,
    name: String,
    species: SpeciesId,
    kind: EntityKind,
    energy: u32,
    consumption_rate: u32,
}

impl Entity {
    /// Create an entity with the starting energy and consumption rate from
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::ZeroConsumption`] if the configured consumption
    /// rate is zero.
    pub fn new(
        name: impl Into<String>,
        species: SpeciesId,
        kind: EntityKind,
        config: &BehaviorConfig,
    ) -> Result<Self, SetupError> {
        Self::with_stats(
            name,
            species,
            kind,
            config.starting_energy,
            config.consumption_rate,
        )
    }

    /// Create an entity with explicit stats.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::ZeroConsumption`] if `consumption_rate` is zero,
    /// or [`SetupError::EnergyAboveCeiling`] if `energy` exceeds
    /// [`ENERGY_CEILING`].
    pub fn with_stats(
        name: impl Into<String>,
        species: SpeciesId,
        kind: EntityKind,
        energy: u32,
        consumption_rate: u32,
    ) -> Result<Self, SetupError> {
        let name = name.into();
        if consumption_rate == 0 {
            return Err(SetupError::ZeroConsumption { name });
        }
        if energy > ENERGY_CEILING {
            return Err(SetupError::EnergyAboveCeiling { name, energy });
        }
        Ok(Self {
            id: EntityId::new(),
            name,
            species,
            kind,
            energy,
            consumption_rate,
        })
    }

    /// Apply this tick's energy transition.
    pub fn step(&mut self, config: &BehaviorConfig) {
        let before = self.energy;
        self.energy = behavior_for(self.kind)(before, config);
        trace!(
            entity = %self.name,
            kind = %self.kind,
            before,
            after = self.energy,
            "entity stepped"
        );
    }

    /// Withdraw this entity's food from `pool`.
    ///
    /// Returns `true` and decrements the pool when it holds at least
    /// `consumption_rate`. Otherwise the pool is left untouched and the
    /// result is `false`.
    pub const fn withdraw(&self, pool: &mut u32) -> bool {
        match pool.checked_sub(self.consumption_rate) {
            Some(remaining) => {
                *pool = remaining;
                true
            }
            None => false,
        }
    }

    /// Entity identifier.
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Species this entity belongs to.
    pub const fn species(&self) -> SpeciesId {
        self.species
    }

    /// Behavioral kind.
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Current energy, always within `0..=100`.
    pub const fn energy(&self) -> u32 {
        self.energy
    }

    /// Food withdrawn per tick.
    pub const fn consumption_rate(&self) -> u32 {
        self.consumption_rate
    }

    /// Copy the observable state of this entity.
    pub fn snapshot(&self) -> EntitySnapshot {
        EntitySnapshot {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind,
            energy: self.energy,
            consumption_rate: self.consumption_rate,
        }
    }
}
