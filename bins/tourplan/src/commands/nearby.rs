//! Nearby command - rank catalog places by distance

use crate::settings;
use anyhow::Result;
use serde_json::json;
use std::collections::HashMap;
use std::path::Path;
use tourplan_cli::output::{format_count, format_distance_km, Status};
use tourplan_core::config::Config;
use tourplan_geo::batch::LocationItem;
use tourplan_geo::{calculate_distances_sorted, calculate_distances_within_radius, DistanceResult};
use tourplan_route::{resolve_origin, Coordinate, OriginSource};

/// List catalog places nearest to `position`
pub fn run(
    config: &Config,
    places: &Path,
    position: Option<Coordinate>,
    radius: Option<f64>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let start = resolve_origin(&position, settings::fallback_origin(&config.schema));
    let origin = start.coordinate;

    let items = settings::read_catalog(places)?;
    let names: HashMap<&str, &str> = items.iter().map(|i| (i.id.as_str(), i.name.as_str())).collect();
    let locations: Vec<LocationItem> = items
        .iter()
        .map(|i| LocationItem {
            id: i.id.clone(),
            location: i.location.clone(),
        })
        .collect();

    let ranked: Vec<DistanceResult> = match radius {
        Some(km) => {
            let mut within = calculate_distances_within_radius(&origin, &locations, km);
            if let Some(limit) = limit {
                within.truncate(limit);
            }
            within
        }
        None => calculate_distances_sorted(&origin, &locations, limit),
    };

    if json {
        let places: Vec<_> = ranked
            .iter()
            .map(|r| json!({ "id": r.id, "name": names.get(r.id.as_str()), "distance_km": r.distance }))
            .collect();
        let output = json!({ "origin": start, "places": places });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    Status::header(&format!("Nearby {}", origin));
    if let OriginSource::Fallback(reason) = start.source {
        Status::warning(&format!("Using fallback origin: {reason}"));
    }
    if ranked.is_empty() {
        Status::info("No places found");
        return Ok(());
    }

    for (index, result) in ranked.iter().enumerate() {
        let name = names.get(result.id.as_str()).copied().unwrap_or(result.id.as_str());
        Status::stop(index + 1, name, &format_distance_km(result.distance));
    }
    println!();
    Status::info(&format_count(ranked.len(), "place", "places"));

    Ok(())
}
