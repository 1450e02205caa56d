//! Catalog boundary: turns listing items into routable places.
//!
//! Listings come from the content store with positions in mixed shapes, and
//! use `(0, 0)` or a bare street address when a place was never geocoded.
//! Those items are dropped here, so [`Place`] always has a real coordinate.

use crate::error::Result;
use crate::place::{Place, PlaceKind};
use serde::Deserialize;
use tourplan_geo::parse_location;

/// A place as listed by the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: PlaceKind,
    /// Any shape accepted by [`tourplan_geo::parse_location`].
    #[serde(default, alias = "coordinate", alias = "address")]
    pub location: serde_json::Value,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl CatalogItem {
    /// The routable place, or `None` if the item has no usable location.
    pub fn to_place(&self) -> Option<Place> {
        let coordinate = parse_location(&self.location)?;
        Some(Place {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
            coordinate,
            category: self.category.clone(),
            cuisine: self.cuisine.clone(),
            price: self.price,
        })
    }
}

/// Result of importing catalog items.
#[derive(Debug, Clone, Default)]
pub struct CatalogImport {
    /// Routable places, in input order
    pub places: Vec<Place>,
    /// Ids of items dropped for lacking a usable location
    pub skipped: Vec<String>,
}

/// Convert catalog items into places, dropping those without a location.
pub fn places_from_catalog(items: &[CatalogItem]) -> CatalogImport {
    let mut import = CatalogImport::default();

    for item in items {
        match item.to_place() {
            Some(place) => import.places.push(place),
            None => {
                tracing::info!(id = %item.id, name = %item.name, "Skipping place without a usable location");
                import.skipped.push(item.id.clone());
            }
        }
    }

    import
}

/// Parse a JSON array of catalog items.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogItem>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourplan_geo::Coordinate;

    const CATALOG: &str = r#"[
        {"id": "grand-palace", "name": "Grand Palace", "type": "attraction",
         "location": {"type": "Point", "coordinates": [100.4913, 13.7500]}, "category": "temple"},
        {"id": "thipsamai", "name": "Thipsamai", "type": "restaurant",
         "coordinate": {"lat": 13.7528, "lng": 100.5045}, "cuisine": "thai", "price": 150},
        {"id": "boat-noodles", "name": "Boat Noodle Alley", "type": "menu",
         "location": {"lat": 0, "lng": 0}},
        {"id": "street-stall", "name": "Street Stall", "type": "restaurant",
         "address": "Soi Rambuttri, Bangkok"},
        {"id": "river-pier", "name": "Tha Tien Pier", "type": "attraction",
         "location": "POINT(100.4915 13.7465)"}
    ]"#;

    #[test]
    fn test_parse_and_import() {
        let items = parse_catalog(CATALOG).unwrap();
        assert_eq!(items.len(), 5);

        let import = places_from_catalog(&items);
        let ids: Vec<&str> = import.places.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["grand-palace", "thipsamai", "river-pier"]);
        assert_eq!(import.skipped, ["boat-noodles", "street-stall"]);
    }

    #[test]
    fn test_details_carried_over() {
        let items = parse_catalog(CATALOG).unwrap();
        let thipsamai = items[1].to_place().unwrap();

        assert_eq!(thipsamai.kind, PlaceKind::Restaurant);
        assert_eq!(thipsamai.coordinate, Coordinate::new(13.7528, 100.5045));
        assert_eq!(thipsamai.cuisine.as_deref(), Some("thai"));
        assert_eq!(thipsamai.price, Some(150.0));
    }

    #[test]
    fn test_missing_location_field() {
        let items = parse_catalog(r#"[{"id": "x", "name": "X", "type": "attraction"}]"#).unwrap();
        assert!(items[0].to_place().is_none());
    }

    #[test]
    fn test_malformed_catalog() {
        assert!(parse_catalog("{not json").is_err());
        assert!(parse_catalog(r#"[{"id": "x", "name": "X", "type": "hotel"}]"#).is_err());
    }
}
