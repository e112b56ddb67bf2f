//! Configuration constants and defaults for entity behavior.
//!
//! The [`BehaviorConfig`] struct bundles every tunable of the per-tick
//! energy rule so that callers (the world, tests, the YAML loader) can
//! override the defaults.

use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Upper bound of the energy stat. Energy always stays in `0..=100`.
pub const ENERGY_CEILING: u32 = 100;

/// Configuration for entity behavior applied each tick.
///
/// All values are whole `u32` amounts applied once per tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Energy below which an entity counts as tired (default: 30).
    pub low_energy_threshold: u32,

    /// Energy regained by a resting entity (default: 20).
    pub rest_recovery: u32,

    /// Energy spent by a working entity (default: 10).
    pub work_cost: u32,

    /// Energy given to newly created entities (default: 100).
    pub starting_energy: u32,

    /// Food withdrawn per tick by newly created entities (default: 10).
    pub consumption_rate: u32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            low_energy_threshold: 30,
            rest_recovery: 20,
            work_cost: 10,
            starting_energy: ENERGY_CEILING,
            consumption_rate: 10,
        }
    }
}

impl BehaviorConfig {
    /// Check that the configuration can produce valid entities.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidBehavior`] if the starting energy
    /// exceeds [`ENERGY_CEILING`] or the consumption rate is zero.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.starting_energy > ENERGY_CEILING {
            return Err(SetupError::InvalidBehavior {
                reason: format!(
                    "starting_energy {} exceeds the ceiling of {ENERGY_CEILING}",
                    self.starting_energy
                ),
            });
        }
        if self.consumption_rate == 0 {
            return Err(SetupError::InvalidBehavior {
                reason: "consumption_rate must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = BehaviorConfig::default();
        assert_eq!(cfg.low_energy_threshold, 30);
        assert_eq!(cfg.rest_recovery, 20);
        assert_eq!(cfg.work_cost, 10);
        assert_eq!(cfg.starting_energy, 100);
        assert_eq!(cfg.consumption_rate, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_consumption_is_invalid() {
        let cfg = BehaviorConfig {
            consumption_rate: 0,
            ..BehaviorConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SetupError::InvalidBehavior { .. })
        ));
    }

    #[test]
    fn starting_energy_above_ceiling_is_invalid() {
        let cfg = BehaviorConfig {
            starting_energy: 101,
            ..BehaviorConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: Result<BehaviorConfig, _> = serde_json::from_str(r#"{"work_cost": 15}"#);
        let cfg = cfg.ok().unwrap_or_default();
        assert_eq!(cfg.work_cost, 15);
        assert_eq!(cfg.rest_recovery, 20);
    }
}
