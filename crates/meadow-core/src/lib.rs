//! Colonies, the world tick cycle, and orchestration for the Meadow
//! simulation.
//!
//! A [`World`] owns every [`Colony`] and the species table. Each call to
//! [`World::step`] advances all colonies by one tick, strictly in
//! registration order, and [`World::is_simulation_complete`] reports once
//! at most one colony is still viable.
//!
//! # Modules
//!
//! - [`colony`] -- Resource pool, members, leader, and the per-tick
//!   withdrawal rule.
//! - [`world`] -- The [`World`] container and per-tick [`TickSummary`].
//! - [`config`] -- Configuration loading from `meadow-config.yaml` into
//!   strongly-typed structs.
//! - [`scenario`] -- Builds a ready-to-run [`World`] from configuration.
//! - [`runner`] -- The bounded simulation loop and [`TickCallback`] seam.
//!
//! [`TickCallback`]: runner::TickCallback

pub mod colony;
pub mod config;
pub mod runner;
pub mod scenario;
pub mod world;

pub use colony::{Colony, ColonyStepOutcome, DEFAULT_RESOURCE_POOL};
pub use world::{ColonyTickReport, TickSummary, World};
