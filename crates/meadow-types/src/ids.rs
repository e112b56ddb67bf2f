//! Type-safe identifiers.
//!
//! Colonies and entities carry UUID v7 (time-ordered) identifiers so they
//! can never be confused with one another at compile time. Species are
//! generated once per run from a seed and are keyed by their generation
//! index instead, which keeps trait tables reproducible.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

define_id! {
    /// Unique identifier for a colony.
    ColonyId
}

define_id! {
    /// Unique identifier for an entity within the simulation.
    EntityId
}

/// Identifier for a species (trait set).
///
/// The value is the species' position in the world's generated species
/// table, so the same seed always yields the same ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(pub u32);

impl SpeciesId {
    /// Return the raw index value.
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "species#{}", self.0)
    }
}

impl From<u32> for SpeciesId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}
