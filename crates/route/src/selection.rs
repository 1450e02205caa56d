//! Selection and bookmark stores.
//!
//! The selection is what gets planned; bookmarks are a separate list the
//! traveller keeps for later and never reach the planner.

use crate::place::Place;

/// Places picked for the next plan, in the order they were picked.
///
/// Ids are unique: inserting a place whose id is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    places: Vec<Place>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a place. Returns `false` if its id was already selected.
    pub fn insert(&mut self, place: Place) -> bool {
        if self.contains(&place.id) {
            return false;
        }
        self.places.push(place);
        true
    }

    /// Remove by id, returning the removed place.
    pub fn remove(&mut self, id: &str) -> Option<Place> {
        let index = self.places.iter().position(|p| p.id == id)?;
        Some(self.places.remove(index))
    }

    /// Select the place if absent, deselect it if present.
    /// Returns `true` when the place is selected afterwards.
    pub fn toggle(&mut self, place: Place) -> bool {
        if self.remove(&place.id).is_some() {
            false
        } else {
            self.places.push(place);
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.places.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn clear(&mut self) {
        self.places.clear();
    }

    /// Snapshot handed to the planner.
    pub fn places(&self) -> &[Place] {
        &self.places
    }
}

impl FromIterator<Place> for Selection {
    fn from_iter<I: IntoIterator<Item = Place>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for place in iter {
            selection.insert(place);
        }
        selection
    }
}

/// Bookmarked place ids, independent of the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmarks {
    ids: Vec<String>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the id is bookmarked afterwards.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        match self.ids.iter().position(|b| *b == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|b| b == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::PlaceKind;
    use tourplan_geo::Coordinate;

    fn place(id: &str) -> Place {
        Place::new(id, id, PlaceKind::Attraction, Coordinate::new(13.75, 100.5))
    }

    #[test]
    fn test_insert_rejects_duplicate_ids() {
        let mut selection = Selection::new();
        assert!(selection.insert(place("a")));
        assert!(!selection.insert(place("a")));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_toggle_keeps_pick_order() {
        let mut selection = Selection::new();
        assert!(selection.toggle(place("a")));
        assert!(selection.toggle(place("b")));
        assert!(selection.toggle(place("c")));
        assert!(!selection.toggle(place("b")));

        let ids: Vec<&str> = selection.places().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_from_iter_dedups() {
        let selection: Selection = vec![place("a"), place("b"), place("a")].into_iter().collect();
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut selection: Selection = vec![place("a"), place("b")].into_iter().collect();
        assert_eq!(selection.remove("a").map(|p| p.id), Some("a".to_string()));
        assert!(selection.remove("missing").is_none());
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_bookmarks_independent_of_selection() {
        let mut selection = Selection::new();
        let mut bookmarks = Bookmarks::new();

        selection.insert(place("a"));
        assert!(bookmarks.toggle("b"));

        assert!(!selection.contains("b"));
        assert!(!bookmarks.contains("a"));
        assert!(!bookmarks.toggle("b"));
        assert!(bookmarks.is_empty());
    }
}
