//! Geospatial primitives for tour planning.
//!
//! This crate provides:
//! - Haversine great-circle distances
//! - Catalog location parsing (GeoJSON, WKT and plain lat/lng objects)
//! - Nearby ranking with optional parallelism
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use tourplan_geo::{haversine_distance, Coordinate};
//!
//! let grand_palace = Coordinate::new(13.7500, 100.4913);
//! let wat_arun = Coordinate::new(13.7437, 100.4889);
//!
//! let distance_km = haversine_distance(&grand_palace, &wat_arun);
//! assert!(distance_km > 0.5 && distance_km < 1.0);
//! ```

mod haversine;
mod location;
pub mod batch;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use haversine::{haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM, EARTH_RADIUS_M};
pub use location::{parse_location, parse_wkt_point};
pub use batch::{calculate_distances, calculate_distances_sorted, calculate_distances_within_radius, DistanceResult};
pub use error::{GeoError, GeoErrorCode, Result};

/// Fallback origin used when the device position is unavailable (central Bangkok).
pub const DEFAULT_ORIGIN: Coordinate = Coordinate {
    latitude: 13.7563,
    longitude: 100.5018,
};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if both components are finite and inside their ranges.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Returns true for `(0, 0)`, which upstream catalogs use to mean "no location".
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }

    /// Returns true if the coordinate can be routed: valid and not the sentinel.
    #[inline]
    pub fn is_routable(&self) -> bool {
        self.is_valid() && !self.is_placeholder()
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
