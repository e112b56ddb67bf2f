//! Configuration loading and typed config structures for the Meadow
//! simulation.
//!
//! The canonical configuration lives in `meadow-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads and validates the
//! file. Every section has defaults, so an empty file describes the
//! classic two-colony run.

use std::path::Path;

use meadow_agents::BehaviorConfig;
use meadow_types::{EntityKind, LeaderSuccession, RoomKind};
use serde::Deserialize;
use meadow_agents::ENERGY_CEILING;
use tracing::info;

use crate::colony::DEFAULT_RESOURCE_POOL;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but describes an impossible run.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// World-level settings (name, seed, species table size).
    #[serde(default)]
    pub world: WorldConfig,

    /// Simulation boundary parameters.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Entity energy rules.
    #[serde(default)]
    pub behavior: BehaviorConfig,

    /// Logging and reporting.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Colonies to create before the first tick.
    #[serde(default = "default_colonies")]
    pub colonies: Vec<ColonyConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            simulation: SimulationBoundsConfig::default(),
            behavior: BehaviorConfig::default(),
            logging: LoggingConfig::default(),
            colonies: default_colonies(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `MEADOW_SEED` overrides `world.seed`
    /// - `MEADOW_MAX_TICKS` overrides `simulation.max_ticks`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if an override is unparseable or
    /// validation fails.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::read_yaml(yaml)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config = Self::read_yaml(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn read_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml reads an empty document as null, not as an empty map.
        if yaml.trim().is_empty() {
            Ok(Self::default())
        } else {
            Ok(serde_yml::from_str(yaml)?)
        }
    }

    /// Override selected values with `MEADOW_SEED` and `MEADOW_MAX_TICKS`
    /// when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but does not
    /// parse as an unsigned integer.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(
            std::env::var("MEADOW_SEED").ok().as_deref(),
            std::env::var("MEADOW_MAX_TICKS").ok().as_deref(),
        )
    }

    /// Apply override values as they would be read from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the variable whose value
    /// does not parse.
    pub fn apply_overrides(
        &mut self,
        seed: Option<&str>,
        max_ticks: Option<&str>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = seed {
            self.world.seed = parse_override("MEADOW_SEED", val)?;
            info!(seed = self.world.seed, "world.seed overridden by MEADOW_SEED");
        }
        if let Some(val) = max_ticks {
            self.simulation.max_ticks = parse_override("MEADOW_MAX_TICKS", val)?;
            info!(
                max_ticks = self.simulation.max_ticks,
                "simulation.max_ticks overridden by MEADOW_MAX_TICKS"
            );
        }
        Ok(())
    }

    /// Check the values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the tick bound is zero, the
    /// behavior rules are unusable, two colonies share a name, a colony
    /// refers to a species outside the generated table, or a member starts
    /// above the energy ceiling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.max_ticks == 0 {
            return Err(ConfigError::Invalid {
                reason: "simulation.max_ticks must be at least 1".to_owned(),
            });
        }
        self.behavior
            .validate()
            .map_err(|e| ConfigError::Invalid {
                reason: e.to_string(),
            })?;
        for (index, colony) in self.colonies.iter().enumerate() {
            if self
                .colonies
                .iter()
                .take(index)
                .any(|earlier| earlier.name == colony.name)
            {
                return Err(ConfigError::Invalid {
                    reason: format!("colony name {} is used more than once", colony.name),
                });
            }
            if let Some(member) = colony
                .leader
                .iter()
                .chain(&colony.members)
                .find(|m| m.energy.is_some_and(|e| e > ENERGY_CEILING))
            {
                return Err(ConfigError::Invalid {
                    reason: format!(
                        "member {} of colony {} starts above the energy ceiling of {ENERGY_CEILING}",
                        member.name, colony.name
                    ),
                });
            }
            if colony.species >= self.world.species_count {
                return Err(ConfigError::Invalid {
                    reason: format!(
                        "colony {} uses species {} but only {} are generated",
                        colony.name, colony.species, self.world.species_count
                    ),
                });
            }
        }
        Ok(())
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable simulation name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Random seed for the species table.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of species to generate.
    #[serde(default = "default_species_count")]
    pub species_count: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: default_seed(),
            species_count: default_species_count(),
        }
    }
}

/// Simulation boundary configuration.
///
/// The run always ends after `max_ticks` ticks, even if more than one
/// colony is still alive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Maximum number of ticks before the simulation ends. Must be > 0.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,
}

impl Default for SimulationBoundsConfig {
    fn default() -> Self {
        Self {
            max_ticks: default_max_ticks(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit log lines as JSON instead of human-readable text.
    #[serde(default)]
    pub json_logs: bool,

    /// Print the final report as JSON on stdout.
    #[serde(default)]
    pub json_report: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_logs: false,
            json_report: false,
        }
    }
}

/// One colony to create at setup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColonyConfig {
    /// Colony name.
    pub name: String,

    /// Index into the generated species table.
    #[serde(default)]
    pub species: u32,

    /// Starting food.
    #[serde(default = "default_resource_pool")]
    pub resource_pool: u32,

    /// What happens to a replaced leader.
    #[serde(default)]
    pub leader_succession: LeaderSuccession,

    /// The colony's leader. A colony without one never advances.
    #[serde(default)]
    pub leader: Option<MemberConfig>,

    /// Other members, stepped in this order after the leader.
    #[serde(default)]
    pub members: Vec<MemberConfig>,

    /// Rooms owned by the colony.
    #[serde(default)]
    pub rooms: Vec<RoomConfig>,
}

/// One entity to create at setup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberConfig {
    /// Entity name.
    pub name: String,

    /// Kind. Defaults to leader for the `leader` entry and worker otherwise.
    #[serde(default)]
    pub kind: Option<EntityKind>,

    /// Starting energy. Defaults to `behavior.starting_energy`.
    #[serde(default)]
    pub energy: Option<u32>,

    /// Food per tick. Defaults to `behavior.consumption_rate`.
    #[serde(default)]
    pub consumption_rate: Option<u32>,

    /// Room to place the entity in.
    #[serde(default)]
    pub room: Option<String>,
}

impl MemberConfig {
    /// A member with every optional field left at its default.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            kind: None,
            energy: None,
            consumption_rate: None,
            room: None,
        }
    }
}

/// One room to create at setup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoomConfig {
    /// Room name, referenced by [`MemberConfig::room`].
    pub name: String,

    /// Room purpose.
    pub kind: RoomKind,

    /// Maximum occupants.
    pub capacity: u32,
}

fn parse_override<T>(var: &str, val: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    val.trim().parse().map_err(|e| ConfigError::Invalid {
        reason: format!("{var}={val:?} is not a valid number: {e}"),
    })
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_world_name() -> String {
    "Meadow".to_owned()
}

const fn default_seed() -> u64 {
    42
}

const fn default_species_count() -> u32 {
    meadow_world::DEFAULT_SPECIES_COUNT
}

const fn default_max_ticks() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_resource_pool() -> u32 {
    DEFAULT_RESOURCE_POOL
}

/// The classic two-colony run: each colony has a leader and one helper.
fn default_colonies() -> Vec<ColonyConfig> {
    vec![
        ColonyConfig {
            name: "Colony1".to_owned(),
            species: 0,
            resource_pool: DEFAULT_RESOURCE_POOL,
            leader_succession: LeaderSuccession::Retain,
            leader: Some(MemberConfig::named("Queen1")),
            members: vec![MemberConfig {
                kind: Some(EntityKind::Worker),
                ..MemberConfig::named("Drone1")
            }],
            rooms: Vec::new(),
        },
        ColonyConfig {
            name: "Colony2".to_owned(),
            species: 1,
            resource_pool: DEFAULT_RESOURCE_POOL,
            leader_succession: LeaderSuccession::Retain,
            leader: Some(MemberConfig::named("Queen2")),
            members: vec![MemberConfig {
                kind: Some(EntityKind::Fighter),
                ..MemberConfig::named("Warrior1")
            }],
            rooms: Vec::new(),
        },
    ]
}
