//! In-memory `EntityStore` backed by per-type hash maps.

use std::collections::HashMap;

use crate::{Amenity, City, EntityKind, Place, PlaceUpdate, Review, State, StoreError, User};

use super::EntityStore;

/// Linear-scan, in-memory store.
///
/// The reference backend for small record sets and for tests.
/// Enumeration order is unspecified; callers needing a stable order
/// must sort the snapshot themselves.
///
/// # Examples
/// ```
/// use lodgekit_core::{MemoryStore, Place, PlaceUpdate};
///
/// let mut store = MemoryStore::default();
/// store.insert_place(Place::new("p1", "c1", "u1", "Rose Loft"));
///
/// let patch = PlaceUpdate {
///     name: Some("Thorn Loft".into()),
///     ..PlaceUpdate::default()
/// };
/// let updated = store.update_place("p1", &patch).expect("place exists");
/// assert_eq!(updated.name, "Thorn Loft");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    states: HashMap<String, State>,
    cities: HashMap<String, City>,
    amenities: HashMap<String, Amenity>,
    users: HashMap<String, User>,
    places: HashMap<String, Place>,
    reviews: HashMap<String, Review>,
}

impl MemoryStore {
    /// Insert a state, replacing any record with the same id.
    pub fn insert_state(&mut self, state: State) {
        self.states.insert(state.id.clone(), state);
    }

    /// Insert a city, replacing any record with the same id.
    pub fn insert_city(&mut self, city: City) {
        self.cities.insert(city.id.clone(), city);
    }

    /// Insert an amenity, replacing any record with the same id.
    pub fn insert_amenity(&mut self, amenity: Amenity) {
        self.amenities.insert(amenity.id.clone(), amenity);
    }

    /// Insert a user, replacing any record with the same id.
    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Insert a place, replacing any record with the same id.
    pub fn insert_place(&mut self, place: Place) {
        self.places.insert(place.id.clone(), place);
    }

    /// Insert a review, replacing any record with the same id.
    pub fn insert_review(&mut self, review: Review) {
        self.reviews.insert(review.id.clone(), review);
    }

    /// Patch a place in-place and return the updated record.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no place has the given id.
    pub fn update_place(&mut self, id: &str, patch: &PlaceUpdate) -> Result<Place, StoreError> {
        let place = self.places.get_mut(id).ok_or_else(|| StoreError::NotFound {
            kind: EntityKind::Place,
            id: id.to_owned(),
        })?;
        place.apply(patch);
        Ok(place.clone())
    }

    /// Remove a place.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no place has the given id.
    pub fn delete_place(&mut self, id: &str) -> Result<(), StoreError> {
        self.places
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                kind: EntityKind::Place,
                id: id.to_owned(),
            })
    }
}

impl EntityStore for MemoryStore {
    fn state(&self, id: &str) -> Option<State> {
        self.states.get(id).cloned()
    }

    fn city(&self, id: &str) -> Option<City> {
        self.cities.get(id).cloned()
    }

    fn amenity(&self, id: &str) -> Option<Amenity> {
        self.amenities.get(id).cloned()
    }

    fn user(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }

    fn place(&self, id: &str) -> Option<Place> {
        self.places.get(id).cloned()
    }

    fn review(&self, id: &str) -> Option<Review> {
        self.reviews.get(id).cloned()
    }

    fn states(&self) -> Box<dyn Iterator<Item = State> + Send + '_> {
        Box::new(self.states.values().cloned())
    }

    fn cities(&self) -> Box<dyn Iterator<Item = City> + Send + '_> {
        Box::new(self.cities.values().cloned())
    }

    fn amenities(&self) -> Box<dyn Iterator<Item = Amenity> + Send + '_> {
        Box::new(self.amenities.values().cloned())
    }

    fn users(&self) -> Box<dyn Iterator<Item = User> + Send + '_> {
        Box::new(self.users.values().cloned())
    }

    fn places(&self) -> Box<dyn Iterator<Item = Place> + Send + '_> {
        Box::new(self.places.values().cloned())
    }

    fn reviews(&self) -> Box<dyn Iterator<Item = Review> + Send + '_> {
        Box::new(self.reviews.values().cloned())
    }
}
