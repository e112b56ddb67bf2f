//! Entity state and per-kind behavior for the Meadow simulation.
//!
//! This crate contains the logic layer for individual entities: the energy
//! transition applied once per tick and the food withdrawal that follows
//! it. It knows nothing about colonies or the world; those live in
//! `meadow-core`.
//!
//! # Modules
//!
//! - [`config`] -- Tunable energy thresholds and deltas ([`BehaviorConfig`])
//! - [`entity`] -- The [`Entity`] type and the [`behavior_for`] dispatch
//! - [`error`] -- [`SetupError`], the only error surfaced by the simulation

pub mod config;
pub mod entity;
pub mod error;

// Re-export primary types at crate root for convenience.
pub use config::{BehaviorConfig, ENERGY_CEILING};
pub use entity::{Behavior, Entity, behavior_for};
pub use error::SetupError;
