//! Planning façade used by the CLI and WASM front ends.
//!
//! Every recoverable condition is resolved here: an empty selection or an
//! oversized one is rejected, places without a usable location are refused,
//! and a missing origin is replaced by the fallback. Only clean input reaches
//! [`plan_with`].

use crate::catalog::{places_from_catalog, CatalogItem};
use crate::error::{Result, RouteError};
use crate::origin::{resolve_origin, LocationProvider, Origin};
use crate::place::Place;
use crate::route::{plan_with, Route};
use crate::selection::Selection;
use crate::statistics::{DurationLocale, DurationModel};
use serde::Serialize;
use std::collections::HashSet;
use tourplan_geo::{Coordinate, DEFAULT_ORIGIN};
use tracing::instrument;

/// Upper bound on the number of places in one plan.
pub const DEFAULT_MAX_PLACES: usize = 50;

/// Planner settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerOptions {
    pub model: DurationModel,
    pub locale: DurationLocale,
    pub max_places: usize,
    /// Used when the traveller's position is unavailable
    pub fallback_origin: Coordinate,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            model: DurationModel::default(),
            locale: DurationLocale::default(),
            max_places: DEFAULT_MAX_PLACES,
            fallback_origin: DEFAULT_ORIGIN,
        }
    }
}

/// A plan together with how its input was prepared.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedTour {
    pub origin: Origin,
    pub route: Route,
    /// Catalog ids dropped for lacking a location
    pub skipped: Vec<String>,
}

/// Validates selections and produces routes.
#[derive(Debug, Clone, Default)]
pub struct TourPlanner {
    options: PlannerOptions,
}

impl TourPlanner {
    pub fn new(options: PlannerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    /// Check a selection against the planner's preconditions.
    pub fn validate(&self, places: &[Place]) -> Result<()> {
        if places.is_empty() {
            return Err(RouteError::EmptySelection);
        }

        if places.len() > self.options.max_places {
            return Err(RouteError::TooManyPlaces {
                count: places.len(),
                max: self.options.max_places,
            });
        }

        let mut seen = HashSet::with_capacity(places.len());
        for place in places {
            if !seen.insert(place.id.as_str()) {
                return Err(RouteError::DuplicatePlace(place.id.clone()));
            }
            if !place.coordinate.is_routable() {
                return Err(RouteError::InvalidCoordinate {
                    id: place.id.clone(),
                    coordinate: place.coordinate,
                });
            }
        }

        Ok(())
    }

    /// Plan a route from `origin`, or from the fallback when `origin` is
    /// `None` or invalid.
    #[instrument(skip_all, fields(places = places.len()))]
    pub fn plan(&self, origin: Option<Coordinate>, places: &[Place]) -> Result<Route> {
        let origin = resolve_origin(&origin, self.options.fallback_origin);
        self.plan_from(&origin, places)
    }

    /// Plan the current selection.
    pub fn plan_selection(&self, origin: Option<Coordinate>, selection: &Selection) -> Result<Route> {
        self.plan(origin, selection.places())
    }

    /// Import catalog items, resolve the origin through `provider`, and plan.
    #[instrument(skip_all, fields(items = items.len()))]
    pub fn plan_catalog<P>(&self, provider: &P, items: &[CatalogItem]) -> Result<PlannedTour>
    where
        P: LocationProvider + ?Sized,
    {
        let import = places_from_catalog(items);
        let origin = resolve_origin(provider, self.options.fallback_origin);
        let route = self.plan_from(&origin, &import.places)?;

        Ok(PlannedTour {
            origin,
            route,
            skipped: import.skipped,
        })
    }

    fn plan_from(&self, origin: &Origin, places: &[Place]) -> Result<Route> {
        self.validate(places)?;

        let route = plan_with(&origin.coordinate, places, &self.options.model, self.options.locale);

        tracing::info!(
            stops = route.len(),
            total_distance_km = route.total_distance_km,
            duration = %route.estimated_duration,
            fallback_origin = origin.is_fallback(),
            "Route planned"
        );

        Ok(route)
    }
}
