//! WASM bindings for the geo crate.
//!
//! These bindings let the map front end compute distances and nearby lists
//! in the browser.

use crate::{batch::LocationItem, haversine_distance, parse_location, Coordinate};
use wasm_bindgen::prelude::*;

/// Distance in kilometers between two coordinates.
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let from = Coordinate::new(lat1, lng1);
    let to = Coordinate::new(lat2, lng2);
    haversine_distance(&from, &to)
}

/// Parse a catalog location and return `{latitude, longitude}` JSON, or `null`.
#[wasm_bindgen(js_name = parse_location)]
pub fn parse_location_json(location_json: &str) -> Result<String, JsValue> {
    let value: serde_json::Value = serde_json::from_str(location_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    match parse_location(&value) {
        Some(coord) => serde_json::to_string(&coord)
            .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e))),
        None => Ok("null".to_string()),
    }
}

/// Rank catalog items by distance from the user.
///
/// # Arguments
/// * `user_lat` - User's latitude
/// * `user_lng` - User's longitude
/// * `items_json` - JSON array of `{id, location}` items
/// * `max_results` - Maximum results to return (0 for all)
#[wasm_bindgen]
pub fn nearby_places(
    user_lat: f64,
    user_lng: f64,
    items_json: &str,
    max_results: u32,
) -> Result<String, JsValue> {
    let items: Vec<LocationItem> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let max = if max_results == 0 { None } else { Some(max_results as usize) };
    let origin = Coordinate::new(user_lat, user_lng);
    let results = crate::batch::calculate_distances_sorted(&origin, &items, max);

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
