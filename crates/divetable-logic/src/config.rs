//! Planner input rules.
//!
//! The table lookups themselves take any minute value. The planner applies a
//! few sanity rules on top before it runs a repetitive-dive pipeline; this
//! module holds those rules and their validation, independent of how a
//! caller loads them.
//!
//! ```
//! use divetable_logic::config::{validate_config, PlannerConfig};
//!
//! let config = PlannerConfig::default();
//! assert_eq!(config.min_surface_interval, 10);
//! assert!(validate_config(&config).is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::depth::Minutes;

/// Longest surface interval a config may demand before a repetitive dive.
pub const MAX_REQUIRED_SURFACE_INTERVAL: Minutes = 24 * 60;

/// Rules the planner applies to its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Shortest surface interval accepted between the two dives.
    pub min_surface_interval: Minutes,
    /// Shortest bottom time accepted for either dive.
    pub min_bottom_time: Minutes,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_surface_interval: 10,
            min_bottom_time: 1,
        }
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero minimum would let an empty dive through.
    ZeroBottomTime,
    /// Required surface interval is longer than a day.
    SurfaceIntervalTooLong(Minutes),
}

/// Validate a planner configuration, returning all errors found.
pub fn validate_config(config: &PlannerConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.min_bottom_time == 0 {
        errors.push(ConfigError::ZeroBottomTime);
    }
    if config.min_surface_interval > MAX_REQUIRED_SURFACE_INTERVAL {
        errors.push(ConfigError::SurfaceIntervalTooLong(
            config.min_surface_interval,
        ));
    }

    errors
}
