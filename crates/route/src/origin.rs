//! Where the route starts.
//!
//! Device geolocation is latent and can be refused. Whatever happens, it
//! resolves to a concrete coordinate here, before the optimizer runs: either
//! the device position or a fixed fallback.

use serde::Serialize;
use thiserror::Error;
use tourplan_geo::Coordinate;

/// Why the device position could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum LocationUnavailable {
    #[error("location permission denied")]
    Denied,
    #[error("location request timed out")]
    TimedOut,
    #[error("location is not supported on this device")]
    Unsupported,
    #[error("device reported an invalid position")]
    Invalid,
}

/// Source of the traveller's current position.
pub trait LocationProvider {
    fn current_position(&self) -> Result<Coordinate, LocationUnavailable>;
}

/// A provider that always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    fn current_position(&self) -> Result<Coordinate, LocationUnavailable> {
        Ok(self.0)
    }
}

/// A provider that always fails with the given reason.
#[derive(Debug, Clone, Copy)]
pub struct NoLocation(pub LocationUnavailable);

impl LocationProvider for NoLocation {
    fn current_position(&self) -> Result<Coordinate, LocationUnavailable> {
        Err(self.0)
    }
}

/// An optional position, e.g. from `--lat/--lng` flags; `None` means unsupported.
impl LocationProvider for Option<Coordinate> {
    fn current_position(&self) -> Result<Coordinate, LocationUnavailable> {
        self.ok_or(LocationUnavailable::Unsupported)
    }
}

/// A position reported by a front end as two numbers, `None` when either is
/// not finite. Pages pass `NaN` when geolocation is refused or missing, which
/// is not the same as a device reporting a bad fix.
pub fn reported_position(latitude: f64, longitude: f64) -> Option<Coordinate> {
    (latitude.is_finite() && longitude.is_finite()).then(|| Coordinate::new(latitude, longitude))
}

/// How the origin was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "reason", rename_all = "snake_case")]
pub enum OriginSource {
    Device,
    Fallback(LocationUnavailable),
}

/// The resolved starting point of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Origin {
    pub coordinate: Coordinate,
    #[serde(flatten)]
    pub source: OriginSource,
}

impl Origin {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, OriginSource::Fallback(_))
    }
}

/// Ask `provider` for the current position, substituting `fallback` on failure.
///
/// Never fails: an unavailable or invalid position is logged and replaced.
///
/// # Example
/// ```
/// use tourplan_route::{resolve_origin, LocationUnavailable, NoLocation, DEFAULT_ORIGIN};
///
/// let origin = resolve_origin(&NoLocation(LocationUnavailable::Denied), DEFAULT_ORIGIN);
/// assert!(origin.is_fallback());
/// assert_eq!(origin.coordinate, DEFAULT_ORIGIN);
/// ```
pub fn resolve_origin<P: LocationProvider + ?Sized>(provider: &P, fallback: Coordinate) -> Origin {
    let position = provider.current_position().and_then(|coord| {
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(LocationUnavailable::Invalid)
        }
    });

    match position {
        Ok(coordinate) => Origin {
            coordinate,
            source: OriginSource::Device,
        },
        Err(reason) => {
            tracing::info!(%reason, fallback = %fallback, "Using fallback origin");
            Origin {
                coordinate: fallback,
                source: OriginSource::Fallback(reason),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourplan_geo::DEFAULT_ORIGIN;

    #[test]
    fn test_device_position_used() {
        let here = Coordinate::new(18.7883, 98.9853);
        let origin = resolve_origin(&FixedLocation(here), DEFAULT_ORIGIN);

        assert_eq!(origin.coordinate, here);
        assert_eq!(origin.source, OriginSource::Device);
    }

    #[test]
    fn test_each_failure_falls_back() {
        for reason in [
            LocationUnavailable::Denied,
            LocationUnavailable::TimedOut,
            LocationUnavailable::Unsupported,
        ] {
            let origin = resolve_origin(&NoLocation(reason), DEFAULT_ORIGIN);
            assert_eq!(origin.coordinate, DEFAULT_ORIGIN);
            assert_eq!(origin.source, OriginSource::Fallback(reason));
        }
    }

    #[test]
    fn test_invalid_device_position_falls_back() {
        let origin = resolve_origin(&FixedLocation(Coordinate::new(f64::NAN, 100.0)), DEFAULT_ORIGIN);
        assert_eq!(origin.source, OriginSource::Fallback(LocationUnavailable::Invalid));
    }

    #[test]
    fn test_optional_coordinate_provider() {
        let none: Option<Coordinate> = None;
        assert!(resolve_origin(&none, DEFAULT_ORIGIN).is_fallback());

        let some = Some(Coordinate::new(13.7, 100.5));
        assert!(!resolve_origin(&some, DEFAULT_ORIGIN).is_fallback());
    }

    #[test]
    fn test_reported_nan_is_unavailable_not_invalid() {
        let refused = reported_position(f64::NAN, f64::NAN);
        assert_eq!(refused, None);
        assert_eq!(
            resolve_origin(&refused, DEFAULT_ORIGIN).source,
            OriginSource::Fallback(LocationUnavailable::Unsupported)
        );

        // A finite but impossible fix is still the device's fault
        let bad_fix = reported_position(95.0, 100.0);
        assert_eq!(
            resolve_origin(&bad_fix, DEFAULT_ORIGIN).source,
            OriginSource::Fallback(LocationUnavailable::Invalid)
        );

        assert_eq!(reported_position(13.7, 100.5), Some(Coordinate::new(13.7, 100.5)));
    }

    #[test]
    fn test_origin_serialization() {
        let origin = resolve_origin(&NoLocation(LocationUnavailable::Denied), DEFAULT_ORIGIN);
        let json = serde_json::to_value(origin).unwrap();

        assert_eq!(json["source"], "fallback");
        assert_eq!(json["reason"], "denied");
        assert_eq!(json["coordinate"]["latitude"], 13.7563);
    }
}
