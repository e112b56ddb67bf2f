//! Enumeration types for the Meadow simulation.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entity kinds
// ---------------------------------------------------------------------------

/// The behavioral variant of an entity.
///
/// Kinds differ only in how they react to low energy. Workers and fighters
/// rest when tired; a leader never rests and simply idles until the colony
/// fails around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// General-purpose laborer.
    Worker,
    /// Colony defender.
    Fighter,
    /// The single entity that gates whether a colony can advance.
    Leader,
}

impl EntityKind {
    /// Whether this kind recovers energy when below the low-energy threshold.
    pub const fn can_rest(self) -> bool {
        !matches!(self, Self::Leader)
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Worker => write!(f, "worker"),
            Self::Fighter => write!(f, "fighter"),
            Self::Leader => write!(f, "leader"),
        }
    }
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

/// Purpose of a room inside a colony.
///
/// Rooms are pure containment; the kind is descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    /// Where new entities are raised.
    Spawning,
    /// Sleeping quarters.
    Resting,
    /// Food storage.
    Storage,
    /// Staging area for fighters.
    Battle,
}

// ---------------------------------------------------------------------------
// Leader succession
// ---------------------------------------------------------------------------

/// What happens to the previous leader when a colony is given a new one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderSuccession {
    /// The former leader stays in the member list. It keeps acting and
    /// consuming food but no longer counts as the colony's leader.
    #[default]
    Retain,
    /// The former leader is removed from the member list.
    Depose,
}
