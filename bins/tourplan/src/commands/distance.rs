//! Distance command - great-circle distance between two points

use anyhow::Result;
use serde_json::json;
use tourplan_cli::output::format_distance_km;
use tourplan_core::{Error, ErrorCode};
use tourplan_geo::{haversine_distance, Coordinate};

/// Print the distance between `(lat1, lng1)` and `(lat2, lng2)`
pub fn run(lat1: f64, lng1: f64, lat2: f64, lng2: f64, json: bool) -> Result<()> {
    let from = Coordinate::new(lat1, lng1);
    let to = Coordinate::new(lat2, lng2);

    for coordinate in [from, to] {
        if !coordinate.is_valid() {
            return Err(Error::new(
                ErrorCode::InvalidCoordinate,
                format!("Coordinate out of range: {coordinate}"),
            )
            .with_suggestion("Latitude must be within ±90 and longitude within ±180")
            .into());
        }
    }

    let km = haversine_distance(&from, &to);

    if json {
        println!("{}", serde_json::to_string_pretty(&json!({ "distance_km": km }))?);
    } else {
        println!("{}", format_distance_km(km));
    }

    Ok(())
}
