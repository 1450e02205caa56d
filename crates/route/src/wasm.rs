//! WASM bindings for the custom-tour page.

use crate::catalog::{parse_catalog, CatalogItem};
use crate::origin::reported_position;
use crate::planner::{PlannedTour, PlannerOptions, TourPlanner};
use crate::statistics::DurationLocale;
use wasm_bindgen::prelude::*;

fn plan_tour(user_lat: f64, user_lng: f64, items_json: &str, locale: &str) -> Result<PlannedTour, JsValue> {
    let items: Vec<CatalogItem> =
        parse_catalog(items_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let locale = locale
        .parse::<DurationLocale>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let planner = TourPlanner::new(PlannerOptions {
        locale,
        ..PlannerOptions::default()
    });

    let position = reported_position(user_lat, user_lng);
    planner
        .plan_catalog(&position, &items)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Plan a tour over the selected catalog items.
///
/// # Arguments
/// * `user_lat` / `user_lng` - Device position (pass `NaN` when unavailable)
/// * `items_json` - JSON array of catalog items
/// * `locale` - `"th"` or `"en"`
///
/// # Returns
/// JSON `{origin, route, skipped}`
#[wasm_bindgen]
pub fn plan_route(user_lat: f64, user_lng: f64, items_json: &str, locale: &str) -> Result<String, JsValue> {
    let tour = plan_tour(user_lat, user_lng, items_json, locale)?;
    serde_json::to_string(&tour)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Same as [`plan_route`], rendered as a GeoJSON overlay.
#[wasm_bindgen]
pub fn route_geojson(user_lat: f64, user_lng: f64, items_json: &str, locale: &str) -> Result<String, JsValue> {
    let tour = plan_tour(user_lat, user_lng, items_json, locale)?;
    Ok(tour.route.to_geojson().to_string())
}
