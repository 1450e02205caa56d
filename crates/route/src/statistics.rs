//! Route totals and the coarse duration estimate shown next to the map.
//!
//! The estimate is deliberately simple: a fixed dwell time per stop plus
//! straight-line travel at a constant average speed. It is an approximation
//! for display, not a routing-engine ETA.

use crate::error::RouteError;
use crate::place::RouteStop;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Hours spent at each stop.
pub const DEFAULT_DWELL_HOURS: f64 = 0.5;

/// Average travel speed between stops, km/h.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 30.0;

/// Parameters of the duration estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationModel {
    pub dwell_hours: f64,
    pub average_speed_kmh: f64,
}

impl Default for DurationModel {
    fn default() -> Self {
        Self {
            dwell_hours: DEFAULT_DWELL_HOURS,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
        }
    }
}

impl DurationModel {
    /// Total hours for `stops` visits covering `distance_km`.
    pub fn estimate_hours(&self, stops: usize, distance_km: f64) -> f64 {
        let travel_hours = if self.average_speed_kmh > 0.0 {
            distance_km / self.average_speed_kmh
        } else {
            0.0
        };
        stops as f64 * self.dwell_hours + travel_hours
    }

    /// Same as [`estimate_hours`](Self::estimate_hours), rounded to whole minutes.
    pub fn estimate_minutes(&self, stops: usize, distance_km: f64) -> u64 {
        let minutes = (self.estimate_hours(stops, distance_km) * 60.0).round();
        if minutes.is_finite() && minutes > 0.0 {
            minutes as u64
        } else {
            0
        }
    }
}

/// Language of the rendered duration string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DurationLocale {
    #[default]
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "en")]
    English,
}

impl DurationLocale {
    fn units(self) -> (&'static str, &'static str) {
        match self {
            DurationLocale::Thai => ("ชั่วโมง", "นาที"),
            DurationLocale::English => ("hr", "min"),
        }
    }
}

impl FromStr for DurationLocale {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "th" | "thai" => Ok(DurationLocale::Thai),
            "en" | "english" => Ok(DurationLocale::English),
            other => Err(RouteError::UnsupportedLocale(other.to_string())),
        }
    }
}

/// Totals for a computed route.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RouteSummary {
    pub total_distance_km: f64,
    pub total_minutes: u64,
    pub estimated_duration: String,
}

/// Origin leg plus every stop-to-stop leg.
pub fn total_distance_km(stops: &[RouteStop], origin_to_first_km: Option<f64>) -> f64 {
    let legs: f64 = stops.iter().filter_map(|s| s.distance_from_previous_km).sum();
    origin_to_first_km.unwrap_or(0.0) + legs
}

/// Aggregate an ordered sequence into distance and duration.
///
/// An empty sequence yields zero distance and a zero-minute duration.
///
/// # Example
/// ```
/// use tourplan_route::{summarize, DurationLocale, DurationModel};
///
/// let summary = summarize(&[], None, &DurationModel::default(), DurationLocale::Thai);
/// assert_eq!(summary.total_distance_km, 0.0);
/// assert_eq!(summary.estimated_duration, "0 นาที");
/// ```
pub fn summarize(
    stops: &[RouteStop],
    origin_to_first_km: Option<f64>,
    model: &DurationModel,
    locale: DurationLocale,
) -> RouteSummary {
    let total_distance_km = total_distance_km(stops, origin_to_first_km);
    let total_minutes = model.estimate_minutes(stops.len(), total_distance_km);

    RouteSummary {
        total_distance_km,
        total_minutes,
        estimated_duration: format_duration(total_minutes, locale),
    }
}

/// Render minutes as hours and minutes, omitting zero segments.
///
/// ```
/// use tourplan_route::{format_duration, DurationLocale};
///
/// assert_eq!(format_duration(95, DurationLocale::Thai), "1 ชั่วโมง 35 นาที");
/// assert_eq!(format_duration(120, DurationLocale::English), "2 hr");
/// assert_eq!(format_duration(0, DurationLocale::English), "0 min");
/// ```
pub fn format_duration(total_minutes: u64, locale: DurationLocale) -> String {
    let (hour_unit, minute_unit) = locale.units();
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, m) => format!("{m} {minute_unit}"),
        (h, 0) => format!("{h} {hour_unit}"),
        (h, m) => format!("{h} {hour_unit} {m} {minute_unit}"),
    }
}
