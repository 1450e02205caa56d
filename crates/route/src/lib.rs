//! Visit-route planning for custom tours.
//!
//! Given the places a traveller picked (attractions, restaurants, menu-linked
//! restaurants) and where they are now, this crate orders the places with a
//! greedy nearest-neighbour pass over great-circle distances and estimates
//! the total distance and time for display.
//!
//! - [`optimize`] orders places and records per-leg distances
//! - [`summarize`] turns an ordered sequence into distance and duration
//! - [`plan`] does both and returns an immutable [`Route`]
//! - [`TourPlanner`] validates input at the boundary (empty selection,
//!   size bound, duplicates, missing locations, unavailable origin)
//!
//! # Example
//!
//! ```
//! use tourplan_route::{plan, Coordinate, Place, PlaceKind};
//!
//! let origin = Coordinate::new(13.7563, 100.5018);
//! let places = vec![
//!     Place::new("wat-arun", "Wat Arun", PlaceKind::Attraction, Coordinate::new(13.7437, 100.4889)),
//!     Place::new("wat-pho", "Wat Pho", PlaceKind::Attraction, Coordinate::new(13.7465, 100.4927)),
//! ];
//!
//! let route = plan(&origin, &places);
//! assert_eq!(route.stops[0].place.id, "wat-pho");
//! assert_eq!(route.stops[1].place.id, "wat-arun");
//! ```

mod error;
mod place;
pub mod catalog;
pub mod optimizer;
pub mod origin;
pub mod planner;
pub mod route;
pub mod selection;
pub mod statistics;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{places_from_catalog, CatalogImport, CatalogItem};
pub use error::{Result, RouteError, RouteErrorCode};
pub use optimizer::{optimize, OptimizedSequence};
pub use origin::{reported_position, resolve_origin, FixedLocation, LocationProvider, LocationUnavailable, NoLocation, Origin, OriginSource};
pub use place::{Place, PlaceKind, RouteStop};
pub use planner::{PlannedTour, PlannerOptions, TourPlanner};
pub use route::{plan, plan_with, Route};
pub use selection::{Bookmarks, Selection};
pub use statistics::{format_duration, summarize, DurationLocale, DurationModel, RouteSummary};
pub use tourplan_geo::{haversine_distance, Coordinate, DEFAULT_ORIGIN};
