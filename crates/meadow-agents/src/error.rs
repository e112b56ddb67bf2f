//! Error types for simulation setup.
//!
//! [`SetupError`] is the only error the simulation core surfaces. It is
//! raised while colonies and entities are being assembled, never during a
//! tick: running out of food or energy is a state transition, not a
//! failure.

use meadow_types::{EntityId, EntityKind, SpeciesId};

/// Errors raised while building or registering simulation pieces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// A non-leader entity was offered as a colony's leader.
    #[error("entity {name} is a {kind}, only a leader can lead a colony")]
    NotALeader {
        /// Name of the rejected entity.
        name: String,
        /// Its actual kind.
        kind: EntityKind,
    },

    /// An entity was created with a consumption rate of zero.
    #[error("entity {name} must consume at least 1 unit of food per tick")]
    ZeroConsumption {
        /// Name of the rejected entity.
        name: String,
    },

    /// An entity was created with more energy than the ceiling allows.
    #[error("entity {name} cannot start with {energy} energy (ceiling {})", crate::config::ENERGY_CEILING)]
    EnergyAboveCeiling {
        /// Name of the rejected entity.
        name: String,
        /// The requested starting energy.
        energy: u32,
    },

    /// The behavior configuration cannot produce valid entities.
    #[error("invalid behavior configuration: {reason}")]
    InvalidBehavior {
        /// Description of what is wrong.
        reason: String,
    },

    /// An entity id was added to a colony twice.
    #[error("duplicate entity: {0}")]
    DuplicateEntity(EntityId),

    /// A leader appointment named an entity the colony does not contain.
    #[error("entity {0} is not a member of this colony")]
    UnknownMember(EntityId),

    /// A room assignment named a room the colony does not have.
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// A colony referenced a species the world does not hold.
    #[error("unknown species: {0}")]
    UnknownSpecies(SpeciesId),

    /// A colony was registered after the first tick ran.
    #[error("cannot add colony {colony}: simulation already at tick {tick}")]
    SimulationStarted {
        /// Name of the rejected colony.
        colony: String,
        /// Tick the world had reached.
        tick: u64,
    },

    /// A room was asked to hold more entities than its capacity.
    #[error("room {room} is full (capacity {capacity})")]
    RoomFull {
        /// Name of the full room.
        room: String,
        /// Its capacity.
        capacity: u32,
    },
}
