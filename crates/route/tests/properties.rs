//! Property tests for route planning.

use proptest::prelude::*;
use std::collections::HashSet;
use tourplan_route::{optimize, plan, Coordinate, Place, PlaceKind};

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-89.0f64..=89.0, -179.0f64..=179.0)
        .prop_filter("(0, 0) means missing", |(lat, lng)| !(*lat == 0.0 && *lng == 0.0))
        .prop_map(|(lat, lng)| Coordinate::new(lat, lng))
}

fn places(max: usize) -> impl Strategy<Value = Vec<Place>> {
    prop::collection::vec(coordinate(), 0..max).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, c)| Place::new(format!("p{i}"), format!("Place {i}"), PlaceKind::Attraction, c))
            .collect()
    })
}

/// Places clustered in one city, where ties and near-ties are common.
fn city_places(max: usize) -> impl Strategy<Value = Vec<Place>> {
    prop::collection::vec((0u8..5, 0u8..5), 1..max).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(i, (row, col))| {
                let coord = Coordinate::new(13.70 + row as f64 * 0.01, 100.45 + col as f64 * 0.01);
                Place::new(format!("p{i}"), format!("Place {i}"), PlaceKind::Restaurant, coord)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_output_is_permutation(origin in coordinate(), places in places(30)) {
        let sequence = optimize(&origin, &places);

        prop_assert_eq!(sequence.stops.len(), places.len());
        let expected: HashSet<&str> = places.iter().map(|p| p.id.as_str()).collect();
        let actual: HashSet<&str> = sequence.stops.iter().map(|s| s.place.id.as_str()).collect();
        prop_assert_eq!(actual, expected);

        for (index, stop) in sequence.stops.iter().enumerate() {
            prop_assert_eq!(stop.sequence_index, index);
            prop_assert_eq!(stop.distance_from_previous_km.is_none(), index == 0);
        }
        prop_assert_eq!(sequence.origin_to_first_km.is_some(), !places.is_empty());
    }

    #[test]
    fn prop_deterministic(origin in coordinate(), places in city_places(25)) {
        let first = plan(&origin, &places);
        let second = plan(&origin, &places);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_totals_non_negative_and_consistent(origin in coordinate(), places in places(20)) {
        let route = plan(&origin, &places);

        prop_assert!(route.total_distance_km >= 0.0);
        let legs: f64 = route.stops.iter().filter_map(|s| s.distance_from_previous_km).sum();
        let expected = route.origin_to_first_km.unwrap_or(0.0) + legs;
        prop_assert!((route.total_distance_km - expected).abs() < 1e-9);
        prop_assert!(route.total_minutes >= 30 * route.len() as u64);
    }

    #[test]
    fn prop_each_step_is_greedy(origin in coordinate(), places in city_places(15)) {
        let sequence = optimize(&origin, &places);
        let mut current = origin;

        for (index, stop) in sequence.stops.iter().enumerate() {
            let step = tourplan_route::haversine_distance(&current, &stop.place.coordinate);
            // No later stop was strictly closer at the time this one was chosen
            for later in &sequence.stops[index..] {
                let other = tourplan_route::haversine_distance(&current, &later.place.coordinate);
                prop_assert!(step <= other + 1e-9);
            }
            current = stop.place.coordinate;
        }
    }
}
