//! Species generation and room containment for the Meadow simulation.
//!
//! Everything here is setup-side: species are generated once before the
//! first tick, and rooms group entities without affecting the outcome of
//! any tick.
//!
//! # Modules
//!
//! - [`species`] -- Seeded, bounded generation of the species table.
//! - [`room`] -- Capacity-limited [`Room`] containers.

pub mod room;
pub mod species;

// Re-export primary types at crate root.
pub use room::Room;
pub use species::{
    BONUS_MAX, BONUS_MIN, DEFAULT_SPECIES_COUNT, find_species, generate_species,
};
