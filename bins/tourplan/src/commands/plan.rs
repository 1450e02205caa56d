//! Plan command - order catalog places into a route

use crate::settings;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use tourplan_cli::output::{format_count, format_distance_km, Status};
use tourplan_core::config::Config;
use tourplan_route::{Coordinate, OriginSource, PlannedTour, TourPlanner};

/// Run the planner over a catalog file
pub fn run(
    config: &Config,
    places: &Path,
    position: Option<Coordinate>,
    locale: Option<&str>,
    geojson: bool,
    json: bool,
) -> Result<()> {
    let options = settings::planner_options(&config.schema, locale)?;
    let items = settings::read_catalog(places)?;

    let tour = {
        tourplan_telemetry::timed_span!("plan", items = items.len());
        TourPlanner::new(options)
            .plan_catalog(&position, &items)
            .map_err(settings::route_error)?
    };

    if geojson {
        println!("{}", serde_json::to_string_pretty(&tour.route.to_geojson())?);
    } else if json {
        println!("{}", serde_json::to_string_pretty(&tour)?);
    } else {
        print_text(&tour);
    }

    Ok(())
}

fn print_text(tour: &PlannedTour) {
    let route = &tour.route;

    Status::header(&format!("Route ({})", format_count(route.len(), "stop", "stops")));

    match tour.origin.source {
        OriginSource::Device => println!("  Start: {}", tour.origin.coordinate),
        OriginSource::Fallback(reason) => println!(
            "  Start: {} {}",
            tour.origin.coordinate,
            format!("(fallback: {reason})").yellow()
        ),
    }
    println!();

    for stop in &route.stops {
        let leg = match stop.distance_from_previous_km {
            Some(km) => format!("+{}", format_distance_km(km)),
            None => format!(
                "{} from start",
                format_distance_km(route.origin_to_first_km.unwrap_or(0.0))
            ),
        };
        let detail = format!("{} · {}", stop.place.kind, leg);
        Status::stop(stop.marker_number(), &stop.place.name, &detail);
    }

    println!();
    Status::success(&format!(
        "≈ {} · ≈ {}",
        format_distance_km(route.total_distance_km),
        route.estimated_duration
    ));

    if !tour.skipped.is_empty() {
        Status::warning(&format!(
            "Skipped {} without a location: {}",
            format_count(tour.skipped.len(), "place", "places"),
            tour.skipped.join(", ")
        ));
    }
}
