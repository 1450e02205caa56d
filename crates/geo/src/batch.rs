//! Nearby ranking: distances from one origin to many catalog items.
//!
//! Used to list places around the traveller before they pick a selection.
//! Items without a usable location get an infinite distance and sort last.

use crate::{haversine_distance, parse_location, Coordinate};
use serde::{Deserialize, Serialize};

/// Result of a distance calculation for a single item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceResult {
    /// The item ID
    pub id: String,
    /// Calculated distance in kilometers (Infinity if location is missing)
    pub distance: f64,
}

/// Input item for batch distance calculation.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationItem {
    /// Item ID
    pub id: String,
    /// Location in any shape accepted by [`parse_location`]
    #[serde(default, alias = "coordinate")]
    pub location: serde_json::Value,
}

/// Calculate distances from an origin to multiple items.
///
/// Output order matches input order.
///
/// # Example
/// ```
/// use tourplan_geo::{calculate_distances, batch::LocationItem, Coordinate};
/// use serde_json::json;
///
/// let items = vec![
///     LocationItem { id: "wat-pho".into(), location: json!({"lat": 13.7465, "lng": 100.4927}) },
///     LocationItem { id: "jodd-fairs".into(), location: json!("POINT(100.5645 13.7563)") },
/// ];
///
/// let results = calculate_distances(&Coordinate::new(13.7563, 100.5018), &items);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].id, "wat-pho");
/// ```
pub fn calculate_distances(origin: &Coordinate, items: &[LocationItem]) -> Vec<DistanceResult> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| calculate_single_distance(origin, item))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .map(|item| calculate_single_distance(origin, item))
            .collect()
    }
}

/// Calculate distances and return items sorted by distance (closest first).
///
/// Sorting is stable, so equidistant items keep their input order.
pub fn calculate_distances_sorted(
    origin: &Coordinate,
    items: &[LocationItem],
    max_results: Option<usize>,
) -> Vec<DistanceResult> {
    let mut results = calculate_distances(origin, items);
    sort_by_distance(&mut results);

    if let Some(max) = max_results {
        results.truncate(max);
    }

    results
}

/// Calculate distances within a radius, sorted closest first.
pub fn calculate_distances_within_radius(
    origin: &Coordinate,
    items: &[LocationItem],
    radius_km: f64,
) -> Vec<DistanceResult> {
    let mut results = calculate_distances(origin, items);
    results.retain(|r| r.distance <= radius_km);
    sort_by_distance(&mut results);
    results
}

fn sort_by_distance(results: &mut [DistanceResult]) {
    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}

#[inline]
fn calculate_single_distance(origin: &Coordinate, item: &LocationItem) -> DistanceResult {
    let distance = parse_location(&item.location)
        .map(|coord| haversine_distance(origin, &coord))
        .unwrap_or(f64::INFINITY);

    DistanceResult {
        id: item.id.clone(),
        distance,
    }
}
