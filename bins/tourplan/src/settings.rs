//! Maps configuration and planner errors onto CLI types.

use std::path::Path;
use tourplan_core::config::ConfigSchema;
use tourplan_core::{Error, ErrorCode, ResultExt};
use tourplan_route::catalog::{parse_catalog, CatalogItem};
use tourplan_route::{Coordinate, DurationLocale, DurationModel, PlannerOptions, RouteError};

/// Device position from `--lat/--lng`, if both were given.
pub fn position(lat: Option<f64>, lng: Option<f64>) -> Option<Coordinate> {
    Some(Coordinate::new(lat?, lng?))
}

/// Fallback origin from the configuration.
pub fn fallback_origin(schema: &ConfigSchema) -> Coordinate {
    Coordinate::new(schema.origin.fallback_latitude, schema.origin.fallback_longitude)
}

/// Build planner options, letting `locale` override the configured one.
pub fn planner_options(schema: &ConfigSchema, locale: Option<&str>) -> Result<PlannerOptions, Error> {
    let locale: DurationLocale = locale
        .unwrap_or(&schema.output.locale)
        .parse()
        .map_err(route_error)?;

    Ok(PlannerOptions {
        model: DurationModel {
            dwell_hours: schema.planner.dwell_minutes / 60.0,
            average_speed_kmh: schema.planner.average_speed_kmh,
        },
        locale,
        max_places: schema.planner.max_places,
        fallback_origin: fallback_origin(schema),
    })
}

/// Read a JSON catalog file.
pub fn read_catalog(path: &Path) -> Result<Vec<CatalogItem>, Error> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let json = std::fs::read_to_string(path)?;
    let items = parse_catalog(&json)
        .map_err(route_error)
        .context(format!("Reading catalog {}", path.display()))?;

    tracing::debug!(path = %path.display(), items = items.len(), "Catalog loaded");
    Ok(items)
}

/// Translate a planner error into a coded CLI error.
pub fn route_error(err: RouteError) -> Error {
    match err {
        RouteError::EmptySelection => Error::empty_selection(),
        RouteError::TooManyPlaces { count, max } => Error::planning(
            ErrorCode::TooManyPlaces,
            format!("Too many places selected: {count} (maximum {max})"),
        )
        .with_suggestion("Deselect some places or raise planner.max_places in tourplan.toml"),
        RouteError::UnsupportedLocale(locale) => {
            Error::validation(format!("Unsupported locale: {locale}")).with_suggestion("Use \"th\" or \"en\"")
        }
        RouteError::InvalidCoordinate { .. } => {
            let message = err.to_string();
            Error::new(ErrorCode::InvalidCoordinate, message).with_source(err)
        }
        other => {
            let message = other.to_string();
            Error::new(ErrorCode::InvalidInput, message).with_source(other)
        }
    }
}
