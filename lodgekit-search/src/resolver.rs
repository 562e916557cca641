//! Foreign-key resolution between booking entities.

use lodgekit_core::{Amenity, City, EntityStore, Place, Review, State};

/// Derives related records through the foreign keys stored on each
/// entity.
///
/// Every method is a full scan of the relevant store collection; at
/// this scale no secondary index is warranted, and adding one later
/// would not change observable behaviour. Methods return an empty
/// `Vec`, never an error, when nothing matches.
///
/// # Examples
/// ```
/// use lodgekit_core::{City, EntityStore, MemoryStore, State};
/// use lodgekit_search::RelationshipResolver;
///
/// let mut store = MemoryStore::default();
/// store.insert_state(State::new("s1", "Oregon"));
/// store.insert_city(City::new("c1", "Portland", "s1"));
/// store.insert_city(City::new("c2", "Boise", "s2"));
///
/// let state = store.state("s1").expect("inserted above");
/// let resolver = RelationshipResolver::new(&store);
/// let cities = resolver.cities_of_state(&state);
/// assert_eq!(cities.len(), 1);
/// assert_eq!(cities[0].id, "c1");
/// ```
#[derive(Clone, Copy)]
pub struct RelationshipResolver<'a> {
    store: &'a dyn EntityStore,
}

impl<'a> RelationshipResolver<'a> {
    /// Borrow a store for relationship lookups.
    pub const fn new(store: &'a dyn EntityStore) -> Self {
        Self { store }
    }

    /// Cities whose `state_id` references the given state.
    pub fn cities_of_state(&self, state: &State) -> Vec<City> {
        self.store
            .cities()
            .filter(|city| city.state_id == state.id)
            .collect()
    }

    /// Places whose `city_id` references the given city.
    pub fn places_of_city(&self, city: &City) -> Vec<Place> {
        self.store
            .places()
            .filter(|place| place.city_id == city.id)
            .collect()
    }

    /// Amenity records for the ids listed on the given place.
    ///
    /// Ids that no longer resolve are skipped silently; a dangling
    /// link never fails a search.
    pub fn amenities_of_place(&self, place: &Place) -> Vec<Amenity> {
        place
            .amenities
            .iter()
            .filter_map(|id| self.store.amenity(id))
            .collect()
    }

    /// Reviews whose `place_id` references the given place.
    pub fn reviews_of_place(&self, place: &Place) -> Vec<Review> {
        self.store
            .reviews()
            .filter(|review| review.place_id == place.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use lodgekit_core::{Amenity, City, EntityStore, MemoryStore, Place, Review, State};
    use rstest::{fixture, rstest};

    use super::RelationshipResolver;

    #[fixture]
    fn store() -> MemoryStore {
        let mut store = MemoryStore::default();
        store.insert_state(State::new("s1", "Oregon"));
        store.insert_city(City::new("c1", "Portland", "s1"));
        store.insert_city(City::new("c2", "Eugene", "s1"));
        store.insert_amenity(Amenity::new("a1", "wifi"));
        store.insert_place(Place::with_amenities(
            "p1",
            "c1",
            "u1",
            "Rose Loft",
            ["a1", "a-gone"],
        ));
        store.insert_review(Review::new("r1", "p1", "u2", "lovely"));
        store
    }

    #[rstest]
    fn cities_of_state_scans_by_foreign_key(store: MemoryStore) {
        let state = store.state("s1").unwrap();
        let mut ids: Vec<_> = RelationshipResolver::new(&store)
            .cities_of_state(&state)
            .into_iter()
            .map(|city| city.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["c1".to_owned(), "c2".to_owned()]);
    }

    #[rstest]
    fn places_of_city_is_empty_when_none_match(store: MemoryStore) {
        let city = store.city("c2").unwrap();
        assert!(RelationshipResolver::new(&store)
            .places_of_city(&city)
            .is_empty());
    }

    #[rstest]
    fn amenities_of_place_skips_dangling_ids(store: MemoryStore) {
        let place = store.place("p1").unwrap();
        let amenities = RelationshipResolver::new(&store).amenities_of_place(&place);
        assert_eq!(amenities.len(), 1);
        assert_eq!(amenities[0].id, "a1");
    }

    #[rstest]
    fn reviews_of_place_scans_by_foreign_key(store: MemoryStore) {
        let place = store.place("p1").unwrap();
        let reviews = RelationshipResolver::new(&store).reviews_of_place(&place);
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].text, "lovely");
    }
}
