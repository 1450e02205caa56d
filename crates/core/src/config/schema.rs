//! Configuration schema definitions
//!
//! ```toml
//! [planner]
//! dwell_minutes = 30
//! average_speed_kmh = 30.0
//! max_places = 50
//!
//! [origin]
//! fallback_latitude = 13.7563
//! fallback_longitude = 100.5018
//!
//! [output]
//! locale = "th"
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Route estimate and selection limits
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Where routes start when the traveller's position is unknown
    #[serde(default)]
    pub origin: OriginConfig,

    /// Presentation settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl ConfigSchema {
    /// Reject values the planner cannot work with.
    pub fn validate(&self) -> Result<()> {
        let planner = &self.planner;

        if !planner.average_speed_kmh.is_finite() || planner.average_speed_kmh <= 0.0 {
            return Err(Error::config_invalid(
                "planner.average_speed_kmh",
                format!("must be a positive number, got {}", planner.average_speed_kmh),
            ));
        }

        if !planner.dwell_minutes.is_finite() || planner.dwell_minutes < 0.0 {
            return Err(Error::config_invalid(
                "planner.dwell_minutes",
                format!("must not be negative, got {}", planner.dwell_minutes),
            ));
        }

        if planner.max_places == 0 {
            return Err(Error::config_invalid("planner.max_places", "must be at least 1"));
        }

        let origin = &self.origin;
        let lat_ok = origin.fallback_latitude.is_finite() && (-90.0..=90.0).contains(&origin.fallback_latitude);
        let lng_ok = origin.fallback_longitude.is_finite() && (-180.0..=180.0).contains(&origin.fallback_longitude);
        if !lat_ok || !lng_ok {
            return Err(Error::config_invalid(
                "origin",
                format!(
                    "fallback ({}, {}) is not a valid coordinate",
                    origin.fallback_latitude, origin.fallback_longitude
                ),
            ));
        }

        if !matches!(self.output.locale.as_str(), "th" | "en") {
            return Err(Error::config_invalid(
                "output.locale",
                format!("expected \"th\" or \"en\", got \"{}\"", self.output.locale),
            ));
        }

        Ok(())
    }
}

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Minutes spent at each stop
    #[serde(default = "default_dwell_minutes")]
    pub dwell_minutes: f64,

    /// Average travel speed between stops
    #[serde(default = "default_average_speed_kmh")]
    pub average_speed_kmh: f64,

    /// Largest selection accepted in one plan
    #[serde(default = "default_max_places")]
    pub max_places: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            dwell_minutes: default_dwell_minutes(),
            average_speed_kmh: default_average_speed_kmh(),
            max_places: default_max_places(),
        }
    }
}

fn default_dwell_minutes() -> f64 {
    30.0
}

fn default_average_speed_kmh() -> f64 {
    30.0
}

fn default_max_places() -> usize {
    50
}

/// Fallback origin configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginConfig {
    /// Fallback latitude
    #[serde(default = "default_fallback_latitude")]
    pub fallback_latitude: f64,

    /// Fallback longitude
    #[serde(default = "default_fallback_longitude")]
    pub fallback_longitude: f64,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            fallback_latitude: default_fallback_latitude(),
            fallback_longitude: default_fallback_longitude(),
        }
    }
}

fn default_fallback_latitude() -> f64 {
    13.7563
}

fn default_fallback_longitude() -> f64 {
    100.5018
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Duration language, `th` or `en`
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

fn default_locale() -> String {
    "th".to_string()
}
