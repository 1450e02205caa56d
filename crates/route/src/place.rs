//! Places a traveller can select and the stops they become.

use serde::{Deserialize, Serialize};
use tourplan_geo::Coordinate;

/// What kind of catalog entry a place came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceKind {
    Attraction,
    Restaurant,
    /// A restaurant reached through one of its menu items
    Menu,
}

impl std::fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PlaceKind::Attraction => "attraction",
            PlaceKind::Restaurant => "restaurant",
            PlaceKind::Menu => "menu",
        };
        f.write_str(label)
    }
}

/// A selectable place with a known position.
///
/// Identity is `id`; a selection must not contain the same id twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: PlaceKind,
    pub coordinate: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Place {
    /// Creates a place without the optional catalog details.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: PlaceKind,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            coordinate,
            category: None,
            cuisine: None,
            price: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

/// A place at a fixed position in a computed route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    #[serde(flatten)]
    pub place: Place,
    /// Kilometers from the previous stop; `None` for the first stop, whose
    /// leg from the origin is reported separately.
    pub distance_from_previous_km: Option<f64>,
    /// 0-based position in the route
    pub sequence_index: usize,
}

impl RouteStop {
    /// 1-based marker number shown on the map.
    pub fn marker_number(&self) -> usize {
        self.sequence_index + 1
    }
}
