//! Catalog location parsing.
//!
//! Catalog items carry their position in one of several shapes:
//! - GeoJSON: `{"type": "Point", "coordinates": [lng, lat]}`
//! - WKT: `POINT(lng lat)`
//! - Plain objects: `{"lat": .., "lng": ..}` or `{"latitude": .., "longitude": ..}`
//!
//! Anything else (null, a street address, the `(0, 0)` sentinel, out-of-range
//! values) is treated as "no location" so it never reaches the optimizer.

use crate::{Coordinate, GeoError, Result};

/// Parse a catalog location from a JSON value.
///
/// # Returns
/// * `Some(Coordinate)` for a usable, non-sentinel position
/// * `None` if the value is missing, unparseable, out of range or `(0, 0)`
///
/// # Example
/// ```
/// use tourplan_geo::parse_location;
/// use serde_json::json;
///
/// let geojson = json!({"type": "Point", "coordinates": [100.4913, 13.7500]});
/// let coord = parse_location(&geojson).unwrap();
/// assert!((coord.latitude - 13.7500).abs() < 0.0001);
///
/// let wkt = json!("POINT(100.4913 13.7500)");
/// assert!(parse_location(&wkt).is_some());
///
/// // Address-only and sentinel locations are dropped
/// assert!(parse_location(&json!("Na Phra Lan Rd, Bangkok")).is_none());
/// assert!(parse_location(&json!({"lat": 0.0, "lng": 0.0})).is_none());
/// ```
pub fn parse_location(value: &serde_json::Value) -> Option<Coordinate> {
    let coord = parse_any(value)?;
    coord.is_routable().then_some(coord)
}

fn parse_any(value: &serde_json::Value) -> Option<Coordinate> {
    if value.is_null() {
        return None;
    }

    if let Some(object) = value.as_object() {
        // GeoJSON point
        if let Some(coords) = object.get("coordinates").and_then(|c| c.as_array()) {
            if coords.len() >= 2 {
                let lng = coords[0].as_f64()?;
                let lat = coords[1].as_f64()?;
                return Some(Coordinate::new(lat, lng));
            }
            return None;
        }

        let lat = object.get("lat").or_else(|| object.get("latitude"))?.as_f64()?;
        let lng = object
            .get("lng")
            .or_else(|| object.get("lon"))
            .or_else(|| object.get("longitude"))?
            .as_f64()?;
        return Some(Coordinate::new(lat, lng));
    }

    if let Some(text) = value.as_str() {
        return parse_wkt_point(text).ok();
    }

    None
}

/// Parse a WKT POINT string.
///
/// Format: `POINT(longitude latitude)`
pub fn parse_wkt_point(wkt: &str) -> Result<Coordinate> {
    let wkt = wkt.trim();

    if !wkt.starts_with("POINT(") && !wkt.starts_with("POINT (") {
        return Err(GeoError::InvalidWkt(format!("Expected POINT, got: {}", wkt)));
    }

    let start = wkt.find('(').ok_or_else(|| GeoError::InvalidWkt("Missing '('".into()))?;
    let end = wkt.find(')').ok_or_else(|| GeoError::InvalidWkt("Missing ')'".into()))?;

    if start >= end {
        return Err(GeoError::InvalidWkt("Invalid parentheses".into()));
    }

    let parts: Vec<&str> = wkt[start + 1..end].split_whitespace().collect();

    if parts.len() != 2 {
        return Err(GeoError::InvalidWkt(format!(
            "Expected 2 coordinates, got {}",
            parts.len()
        )));
    }

    let lng: f64 = parts[0]
        .parse()
        .map_err(|_| GeoError::InvalidWkt(format!("Invalid longitude: {}", parts[0])))?;
    let lat: f64 = parts[1]
        .parse()
        .map_err(|_| GeoError::InvalidWkt(format!("Invalid latitude: {}", parts[1])))?;

    let coord = Coordinate::new(lat, lng);
    if !coord.is_valid() {
        return Err(GeoError::InvalidCoordinate(coord.to_string()));
    }

    Ok(coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_geojson_point() {
        let value = json!({
            "type": "Point",
            "coordinates": [100.4913, 13.7500]
        });

        let coord = parse_location(&value).unwrap();
        assert!((coord.latitude - 13.7500).abs() < 0.0001);
        assert!((coord.longitude - 100.4913).abs() < 0.0001);
    }

    #[test]
    fn test_parse_lat_lng_object() {
        let coord = parse_location(&json!({"lat": 18.7883, "lng": 98.9853})).unwrap();
        assert_eq!(coord, Coordinate::new(18.7883, 98.9853));

        let coord = parse_location(&json!({"latitude": 18.7883, "longitude": 98.9853})).unwrap();
        assert_eq!(coord, Coordinate::new(18.7883, 98.9853));
    }

    #[test]
    fn test_parse_wkt_point() {
        let coord = parse_location(&json!("POINT(100.4913 13.7500)")).unwrap();
        assert!((coord.latitude - 13.7500).abs() < 0.0001);

        let coord = parse_location(&json!("POINT (100.4913 13.7500)")).unwrap();
        assert!((coord.longitude - 100.4913).abs() < 0.0001);
    }

    #[test]
    fn test_sentinel_is_missing() {
        assert!(parse_location(&json!({"lat": 0.0, "lng": 0.0})).is_none());
        assert!(parse_location(&json!({"coordinates": [0.0, 0.0]})).is_none());
        assert!(parse_location(&json!("POINT(0 0)")).is_none());
    }

    #[test]
    fn test_address_only_is_missing() {
        assert!(parse_location(&json!("4 Sanam Chai Rd, Phra Nakhon")).is_none());
        assert!(parse_location(&json!({"address": "Wat Pho"})).is_none());
        assert!(parse_location(&json!(null)).is_none());
    }

    #[test]
    fn test_out_of_range_is_missing() {
        assert!(parse_location(&json!({"lat": 123.0, "lng": 100.0})).is_none());
        assert!(parse_location(&json!({"coordinates": [200.0, 13.0]})).is_none());
    }

    #[test]
    fn test_parse_invalid_wkt() {
        let result = parse_wkt_point("POLYGON((0 0, 1 1, 1 0, 0 0))");
        assert!(matches!(result, Err(GeoError::InvalidWkt(_))));

        let result = parse_wkt_point("POINT(100.5)");
        assert!(matches!(result, Err(GeoError::InvalidWkt(_))));
    }

    #[test]
    fn test_wkt_out_of_range_is_invalid_coordinate() {
        let result = parse_wkt_point("POINT(100.5 95.0)");
        assert!(matches!(result, Err(GeoError::InvalidCoordinate(_))));
    }
}
