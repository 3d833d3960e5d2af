//! Simulation configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{PalisadeError, Result};
use crate::core::types::Tick;

/// Configuration for the simulation systems
///
/// These values have been tuned so a default run reaches pool steady state
/// within a few hundred ticks. Changing them shifts patrol pacing and how
/// many projectiles are in flight at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === PATROL SYSTEM ===
    /// Distance at which a sentry counts as having reached a waypoint (world units)
    ///
    /// Checked every tick against straight-line distance. Must be larger
    /// than a single movement step or a fast sentry can land astride the
    /// waypoint and orbit it forever.
    pub arrival_threshold: f32,

    /// Sentry walking speed (world units per tick)
    ///
    /// At the default (1.5) and arrival_threshold (2.0) a sentry crossing
    /// a waypoint boundary always falls inside the threshold on some tick.
    pub sentry_speed: f32,

    // === PROJECTILE SYSTEM ===
    /// Projectile flight speed (world units per tick)
    pub projectile_speed: f32,

    /// Projectile flight time before it expires and returns to its pool (ticks)
    ///
    /// Together with fire_interval and volley_size this bounds how many
    /// projectiles are ever in flight, which is what the pool's high-water
    /// mark converges to.
    pub projectile_lifetime: u32,

    /// Ticks between emplacement volleys
    ///
    /// When fire_interval < projectile_lifetime, consecutive volleys
    /// overlap in flight and the pool must grow past one volley's worth.
    pub fire_interval: Tick,

    /// Projectiles fired per volley
    pub volley_size: usize,

    /// Half-angle of the volley spread cone (radians)
    ///
    /// Each projectile's heading is jittered by a value drawn uniformly
    /// from [-spread, spread]. Zero gives a perfectly straight volley.
    pub volley_spread: f32,

    // === POOL SYSTEM ===
    /// Projectiles built into the pool at startup
    ///
    /// Preloading trades startup work for fewer factory calls in the first
    /// volleys. The pool still grows on demand if this is too small.
    pub pool_preload: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            // Patrol (threshold > speed so arrivals cannot be skipped)
            arrival_threshold: 2.0,
            sentry_speed: 1.5,

            // Projectiles (lifetime 40 x interval 25 means volleys overlap)
            projectile_speed: 6.0,
            projectile_lifetime: 40,
            fire_interval: 25,
            volley_size: 4,
            volley_spread: 0.12,

            // Pool
            pool_preload: 8,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    ///
    /// Missing fields fall back to their defaults, so a config file only
    /// needs to name the values it overrides.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config = toml::from_str(contents)?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        // NaN compares false in every ordered check below, and nan is
        // valid TOML, so reject non-finite floats up front
        if !self.arrival_threshold.is_finite()
            || !self.sentry_speed.is_finite()
            || !self.projectile_speed.is_finite()
            || !self.volley_spread.is_finite()
        {
            return Err(PalisadeError::InvalidConfig(
                "float parameters must be finite".into(),
            ));
        }

        // A sentry stepping sentry_speed per tick can jump clean over a
        // smaller threshold and never register the arrival
        if self.arrival_threshold < self.sentry_speed {
            return Err(PalisadeError::InvalidConfig(format!(
                "arrival_threshold ({}) should be >= sentry_speed ({}) or sentries can overshoot waypoints forever",
                self.arrival_threshold, self.sentry_speed
            )));
        }

        if self.arrival_threshold <= 0.0 {
            return Err(PalisadeError::InvalidConfig(format!(
                "arrival_threshold ({}) must be positive",
                self.arrival_threshold
            )));
        }

        if self.sentry_speed <= 0.0 || self.projectile_speed <= 0.0 {
            return Err(PalisadeError::InvalidConfig(
                "movement speeds must be positive".into(),
            ));
        }

        if self.projectile_lifetime == 0 {
            return Err(PalisadeError::InvalidConfig(
                "projectile_lifetime must be at least one tick".into(),
            ));
        }

        if self.fire_interval == 0 {
            return Err(PalisadeError::InvalidConfig(
                "fire_interval must be at least one tick".into(),
            ));
        }

        if self.volley_size == 0 {
            return Err(PalisadeError::InvalidConfig(
                "volley_size must be at least one projectile".into(),
            ));
        }

        if self.volley_spread < 0.0 {
            return Err(PalisadeError::InvalidConfig(format!(
                "volley_spread ({}) must not be negative",
                self.volley_spread
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_threshold_below_speed_rejected() {
        let config = SimulationConfig {
            arrival_threshold: 0.5,
            sentry_speed: 2.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_lifetime_rejected() {
        let config = SimulationConfig {
            projectile_lifetime: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_volley_rejected() {
        let config = SimulationConfig {
            volley_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        let nan_speed = SimulationConfig {
            sentry_speed: f32::NAN,
            ..Default::default()
        };
        assert!(nan_speed.validate().is_err());

        let infinite_spread = SimulationConfig {
            volley_spread: f32::INFINITY,
            ..Default::default()
        };
        assert!(infinite_spread.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = SimulationConfig::from_toml_str("sentry_speed = 1.0\nvolley_size = 2\n").unwrap();
        assert_eq!(config.sentry_speed, 1.0);
        assert_eq!(config.volley_size, 2);
        assert_eq!(config.fire_interval, SimulationConfig::default().fire_interval);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(SimulationConfig::from_toml_str("sentry_speed = ").is_err());
    }

    #[test]
    fn test_nan_is_valid_toml_but_fails_validation() {
        let config = SimulationConfig::from_toml_str("sentry_speed = nan\n").unwrap();
        assert!(config.sentry_speed.is_nan());
        assert!(config.validate().is_err());
    }
}
