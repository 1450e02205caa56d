//! Planned routes.
//!
//! [`plan`] is a pure function: every call returns a brand-new [`Route`], so
//! a presentation layer can re-render whenever the value changes.

use crate::optimizer::optimize;
use crate::place::RouteStop;
use crate::statistics::{summarize, DurationLocale, DurationModel};
use crate::Place;
use serde::Serialize;
use serde_json::{json, Value};
use tourplan_geo::Coordinate;

/// An ordered visit plan with totals for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Starting point; not part of `stops`.
    pub origin: Coordinate,
    pub stops: Vec<RouteStop>,
    pub origin_to_first_km: Option<f64>,
    pub total_distance_km: f64,
    pub total_minutes: u64,
    /// Approximate, e.g. `"2 ชั่วโมง 15 นาที"`.
    pub estimated_duration: String,
}

impl Route {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Stop ids in visiting order.
    pub fn ids(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.place.id.as_str()).collect()
    }

    /// Origin followed by every stop, the vertices of the polyline overlay.
    pub fn path(&self) -> Vec<Coordinate> {
        std::iter::once(self.origin)
            .chain(self.stops.iter().map(|s| s.place.coordinate))
            .collect()
    }

    /// GeoJSON `FeatureCollection` for the map: an origin point, a numbered
    /// point per stop and a `LineString` through them in order.
    ///
    /// Positions are `[longitude, latitude]` as GeoJSON requires.
    pub fn to_geojson(&self) -> Value {
        let mut features = Vec::with_capacity(self.stops.len() + 2);

        features.push(json!({
            "type": "Feature",
            "geometry": point(&self.origin),
            "properties": { "role": "origin" },
        }));

        for stop in &self.stops {
            features.push(json!({
                "type": "Feature",
                "geometry": point(&stop.place.coordinate),
                "properties": {
                    "role": "stop",
                    "marker": stop.marker_number(),
                    "id": stop.place.id,
                    "name": stop.place.name,
                    "type": stop.place.kind,
                    "distance_from_previous_km": stop.distance_from_previous_km,
                },
            }));
        }

        if !self.stops.is_empty() {
            let line: Vec<[f64; 2]> = self
                .path()
                .iter()
                .map(|c| [c.longitude, c.latitude])
                .collect();
            features.push(json!({
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": line },
                "properties": {
                    "role": "route",
                    "total_distance_km": self.total_distance_km,
                    "estimated_duration": self.estimated_duration,
                },
            }));
        }

        json!({ "type": "FeatureCollection", "features": features })
    }
}

fn point(coord: &Coordinate) -> Value {
    json!({ "type": "Point", "coordinates": [coord.longitude, coord.latitude] })
}

/// Plan a route with the default duration model and Thai output.
pub fn plan(origin: &Coordinate, places: &[Place]) -> Route {
    plan_with(origin, places, &DurationModel::default(), DurationLocale::default())
}

/// Plan a route: order the places, then compute totals.
pub fn plan_with(
    origin: &Coordinate,
    places: &[Place],
    model: &DurationModel,
    locale: DurationLocale,
) -> Route {
    let sequence = optimize(origin, places);
    let summary = summarize(&sequence.stops, sequence.origin_to_first_km, model, locale);

    Route {
        origin: *origin,
        stops: sequence.stops,
        origin_to_first_km: sequence.origin_to_first_km,
        total_distance_km: summary.total_distance_km,
        total_minutes: summary.total_minutes,
        estimated_duration: summary.estimated_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::PlaceKind;
    use tourplan_geo::haversine_distance;

    const ORIGIN: Coordinate = Coordinate { latitude: 13.7563, longitude: 100.5018 };

    fn place(id: &str, lat: f64, lng: f64) -> Place {
        Place::new(id, id, PlaceKind::Attraction, Coordinate::new(lat, lng))
    }

    #[test]
    fn test_single_place_scenario() {
        let a = place("A", 13.7600, 100.5050);
        let route = plan(&ORIGIN, std::slice::from_ref(&a));

        assert_eq!(route.ids(), ["A"]);
        let leg = haversine_distance(&ORIGIN, &a.coordinate);
        assert_eq!(route.origin_to_first_km, Some(leg));
        assert_eq!(route.total_distance_km, leg);
        // 30 minutes dwell plus about a minute on the road
        assert_eq!(route.total_minutes, 31);
        assert_eq!(route.estimated_duration, "31 นาที");
    }

    #[test]
    fn test_greedy_scenario_totals() {
        let origin = Coordinate::new(0.0, 0.0);
        let places = vec![place("X", 0.0, 1.0), place("Y", 0.0, 2.0), place("Z", 0.0, 0.5)];
        let route = plan(&origin, &places);

        assert_eq!(route.ids(), ["Z", "X", "Y"]);
        let expected: f64 = route.origin_to_first_km.unwrap()
            + route.stops.iter().filter_map(|s| s.distance_from_previous_km).sum::<f64>();
        assert_eq!(route.total_distance_km, expected);
        assert!((route.total_distance_km - 222.39).abs() < 0.01);
        assert_eq!(route.estimated_duration, "8 ชั่วโมง 55 นาที");
    }

    #[test]
    fn test_empty_scenario() {
        let route = plan(&ORIGIN, &[]);
        assert!(route.is_empty());
        assert_eq!(route.total_distance_km, 0.0);
        assert_eq!(route.estimated_duration, "0 นาที");
        assert_eq!(route.path(), vec![ORIGIN]);
    }

    #[test]
    fn test_duplicate_location_scenario() {
        let places: Vec<Place> = ["a", "b", "c"].iter().map(|id| place(id, 13.7563, 100.5018)).collect();
        let route = plan(&ORIGIN, &places);

        assert_eq!(route.total_distance_km, 0.0);
        assert_eq!(route.total_minutes, 90);
        assert_eq!(route.estimated_duration, "1 ชั่วโมง 30 นาที");
    }

    #[test]
    fn test_english_output() {
        let route = plan_with(
            &ORIGIN,
            &[place("A", 13.7600, 100.5050)],
            &DurationModel::default(),
            DurationLocale::English,
        );
        assert_eq!(route.estimated_duration, "31 min");
    }

    #[test]
    fn test_each_call_returns_fresh_equal_value() {
        let places = vec![place("a", 13.7500, 100.4913), place("b", 13.7437, 100.4889)];
        assert_eq!(plan(&ORIGIN, &places), plan(&ORIGIN, &places));
    }

    #[test]
    fn test_geojson_overlay() {
        let places = vec![place("a", 13.7500, 100.4913), place("b", 13.7999, 100.5500)];
        let route = plan(&ORIGIN, &places);
        let geojson = route.to_geojson();

        assert_eq!(geojson["type"], "FeatureCollection");
        let features = geojson["features"].as_array().unwrap();
        // origin + 2 stops + line
        assert_eq!(features.len(), 4);
        assert_eq!(features[1]["properties"]["marker"], 1);

        let line = &features[3]["geometry"];
        assert_eq!(line["type"], "LineString");
        assert_eq!(line["coordinates"].as_array().unwrap().len(), 3);
        assert_eq!(line["coordinates"][0][0], 100.5018);
        assert_eq!(line["coordinates"][0][1], 13.7563);
    }

    #[test]
    fn test_geojson_empty_route_has_no_line() {
        let geojson = plan(&ORIGIN, &[]).to_geojson();
        assert_eq!(geojson["features"].as_array().unwrap().len(), 1);
    }
}
