//! Nearest-neighbour ordering of selected places.
//!
//! Starting at the origin, repeatedly travel to the closest place not yet
//! visited. This is a single greedy pass: O(n²) distance evaluations, which is
//! fine for hand-picked selections of a few dozen places.

use crate::place::{Place, RouteStop};
use serde::Serialize;
use tourplan_geo::{haversine_distance, Coordinate};

/// Candidates closer than this to the current best count as a tie.
pub const TIE_TOLERANCE_KM: f64 = 1e-9;

/// Output of [`optimize`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OptimizedSequence {
    pub stops: Vec<RouteStop>,
    /// Length of the leg from the origin to the first stop; `None` when
    /// there are no stops.
    pub origin_to_first_km: Option<f64>,
}

impl OptimizedSequence {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }
}

/// Order `places` into a visiting sequence starting from `origin`.
///
/// Every input place appears exactly once in the output. On equidistant
/// candidates the one earliest in `places` wins, so identical input always
/// produces identical output.
///
/// Callers must drop places without a usable coordinate beforehand; debug
/// builds assert this.
///
/// # Example
/// ```
/// use tourplan_route::{optimize, Coordinate, Place, PlaceKind};
///
/// let origin = Coordinate::new(0.0, 0.0);
/// let places = vec![
///     Place::new("x", "X", PlaceKind::Attraction, Coordinate::new(0.0, 1.0)),
///     Place::new("y", "Y", PlaceKind::Attraction, Coordinate::new(0.0, 2.0)),
///     Place::new("z", "Z", PlaceKind::Attraction, Coordinate::new(0.0, 0.5)),
/// ];
///
/// let sequence = optimize(&origin, &places);
/// let order: Vec<&str> = sequence.stops.iter().map(|s| s.place.id.as_str()).collect();
/// assert_eq!(order, ["z", "x", "y"]);
/// ```
pub fn optimize(origin: &Coordinate, places: &[Place]) -> OptimizedSequence {
    debug_assert!(origin.is_valid(), "origin is not a valid coordinate: {origin:?}");
    debug_assert!(
        places.iter().all(|p| p.coordinate.is_routable()),
        "places without a usable coordinate must be filtered out before optimizing"
    );

    // Removal keeps the remaining candidates in input order, which is what
    // makes the tie-break "first in input order".
    let mut remaining: Vec<&Place> = places.iter().collect();
    let mut stops = Vec::with_capacity(places.len());
    let mut origin_to_first_km = None;
    let mut current = *origin;

    while !remaining.is_empty() {
        let (index, distance) = nearest(&current, &remaining);
        let place = remaining.remove(index);
        let sequence_index = stops.len();

        let distance_from_previous_km = if sequence_index == 0 {
            origin_to_first_km = Some(distance);
            None
        } else {
            Some(distance)
        };

        current = place.coordinate;
        stops.push(RouteStop {
            place: place.clone(),
            distance_from_previous_km,
            sequence_index,
        });
    }

    tracing::debug!(
        stops = stops.len(),
        origin_to_first_km = origin_to_first_km.unwrap_or_default(),
        "Optimized visit order"
    );

    OptimizedSequence {
        stops,
        origin_to_first_km,
    }
}

/// Index and distance of the closest candidate. `candidates` must be non-empty.
fn nearest(from: &Coordinate, candidates: &[&Place]) -> (usize, f64) {
    let mut best_index = 0;
    let mut best_distance = haversine_distance(from, &candidates[0].coordinate);

    for (index, candidate) in candidates.iter().enumerate().skip(1) {
        let distance = haversine_distance(from, &candidate.coordinate);
        if distance < best_distance - TIE_TOLERANCE_KM {
            best_index = index;
            best_distance = distance;
        }
    }

    (best_index, best_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::PlaceKind;

    fn place(id: &str, lat: f64, lng: f64) -> Place {
        Place::new(id, id.to_uppercase(), PlaceKind::Attraction, Coordinate::new(lat, lng))
    }

    fn ids(sequence: &OptimizedSequence) -> Vec<&str> {
        sequence.stops.iter().map(|s| s.place.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let sequence = optimize(&Coordinate::new(13.7563, 100.5018), &[]);
        assert!(sequence.is_empty());
        assert!(sequence.origin_to_first_km.is_none());
    }

    #[test]
    fn test_single_place() {
        let origin = Coordinate::new(13.7563, 100.5018);
        let a = place("a", 13.7600, 100.5050);
        let sequence = optimize(&origin, std::slice::from_ref(&a));

        assert_eq!(ids(&sequence), ["a"]);
        assert!(sequence.stops[0].distance_from_previous_km.is_none());
        assert_eq!(sequence.stops[0].sequence_index, 0);

        let expected = haversine_distance(&origin, &a.coordinate);
        assert_eq!(sequence.origin_to_first_km, Some(expected));
        assert!((expected - 0.537).abs() < 0.01);
    }

    #[test]
    fn test_greedy_order() {
        let origin = Coordinate::new(0.0, 0.0);
        let x = place("x", 0.0, 1.0);
        let y = place("y", 0.0, 2.0);
        let z = place("z", 0.0, 0.5);
        let sequence = optimize(&origin, &[x.clone(), y.clone(), z.clone()]);

        assert_eq!(ids(&sequence), ["z", "x", "y"]);
        assert_eq!(
            sequence.stops[1].distance_from_previous_km,
            Some(haversine_distance(&z.coordinate, &x.coordinate))
        );
        assert_eq!(
            sequence.stops[2].distance_from_previous_km,
            Some(haversine_distance(&x.coordinate, &y.coordinate))
        );
        let indices: Vec<usize> = sequence.stops.iter().map(|s| s.sequence_index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn test_ties_go_to_first_in_input_order() {
        // b and c are mirror images around the origin's meridian
        let origin = Coordinate::new(13.0, 100.0);
        let b = place("b", 13.0, 100.1);
        let c = place("c", 13.0, 99.9);

        assert_eq!(ids(&optimize(&origin, &[b.clone(), c.clone()])), ["b", "c"]);
        assert_eq!(ids(&optimize(&origin, &[c, b])), ["c", "b"]);
    }

    #[test]
    fn test_identical_coordinates() {
        let origin = Coordinate::new(13.7563, 100.5018);
        let places: Vec<Place> = ["p", "q", "r"]
            .iter()
            .map(|id| place(id, 13.7465, 100.4927))
            .collect();
        let sequence = optimize(&origin, &places);

        assert_eq!(ids(&sequence), ["p", "q", "r"]);
        assert!(sequence.stops[1..]
            .iter()
            .all(|s| s.distance_from_previous_km == Some(0.0)));
    }

    #[test]
    fn test_backtracking_is_avoided_on_a_line() {
        // Places along a line, shuffled; greedy from one end walks the line
        let origin = Coordinate::new(13.70, 100.50);
        let places = vec![
            place("d", 13.74, 100.50),
            place("a", 13.71, 100.50),
            place("c", 13.73, 100.50),
            place("b", 13.72, 100.50),
        ];

        assert_eq!(ids(&optimize(&origin, &places)), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_deterministic() {
        let origin = Coordinate::new(13.7563, 100.5018);
        let places = vec![
            place("a", 13.7500, 100.4913),
            place("b", 13.7437, 100.4889),
            place("c", 13.7999, 100.5500),
            place("d", 13.7465, 100.4927),
        ];

        assert_eq!(optimize(&origin, &places), optimize(&origin, &places));
    }
}
