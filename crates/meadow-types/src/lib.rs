//! Shared type definitions for the Meadow colony simulation.
//!
//! This crate is the single source of truth for the plain data that flows
//! between the entity, world, and core crates. It holds no behavior beyond
//! construction and display.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifiers for colonies, entities, and species
//! - [`enums`] -- Entity kinds, room kinds, and leader succession policy
//! - [`structs`] -- Species (trait) records and read-only snapshots

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{EntityKind, LeaderSuccession, RoomKind};
pub use ids::{ColonyId, EntityId, SpeciesId};
pub use structs::{ColonySnapshot, EntitySnapshot, Species};
