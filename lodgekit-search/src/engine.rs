//! Filter evaluation over the full place set.

use std::collections::HashSet;

use log::{debug, warn};

use lodgekit_core::{EntityStore, Place};

use crate::{FilterSpec, RelationshipResolver};

/// The place filter engine.
///
/// Evaluation composes two stages: an amenity intersection (a match
/// must offer *every* requested amenity) followed by hierarchical
/// narrowing on cities and states (a union across the requested ids).
/// When both a city and its owning state appear in the same filter the
/// state's contribution is skipped entirely, so the city-level request
/// is not widened back out to the whole state.
///
/// One sharp edge is preserved on purpose: the redundancy test looks
/// at the *requested* city list, not at what survived the amenity
/// stage. A state can therefore be skipped even when amenity pruning
/// already removed every place of the requested city, leaving places
/// of that state unmatched.
///
/// The engine owns no state beyond a store borrow; every call computes
/// from a fresh snapshot and is safe to run concurrently with other
/// searches.
///
/// # Examples
/// ```
/// use lodgekit_core::{City, MemoryStore, Place, State};
/// use lodgekit_search::{FilterSpec, PlaceSearch};
///
/// let mut store = MemoryStore::default();
/// store.insert_state(State::new("s1", "Oregon"));
/// store.insert_city(City::new("c1", "Portland", "s1"));
/// store.insert_place(Place::new("p1", "c1", "u1", "Rose Loft"));
///
/// let spec = FilterSpec {
///     states: vec!["s1".into()],
///     ..FilterSpec::default()
/// };
/// let hits = PlaceSearch::new(&store).search(&spec);
/// assert_eq!(hits.len(), 1);
/// ```
pub struct PlaceSearch<'a> {
    store: &'a dyn EntityStore,
    resolver: RelationshipResolver<'a>,
}

impl<'a> PlaceSearch<'a> {
    /// Borrow a store for the duration of the searches.
    pub const fn new(store: &'a dyn EntityStore) -> Self {
        Self {
            store,
            resolver: RelationshipResolver::new(store),
        }
    }

    /// Evaluate a filter spec and return the matching places.
    ///
    /// An unconstrained spec returns every place. Ids that resolve to
    /// nothing contribute zero matches; they never fail the search.
    /// Output order is discovery order and each place appears at most
    /// once.
    pub fn search(&self, spec: &FilterSpec) -> Vec<Place> {
        let places: Vec<Place> = self.store.places().collect();
        if spec.is_unconstrained() {
            debug!("unconstrained filter, returning all {} places", places.len());
            return places;
        }

        let candidates = self.amenity_candidates(spec, places);
        debug!(
            "amenity stage kept {} candidates for {} requested amenities",
            candidates.len(),
            spec.amenities.len()
        );

        if !spec.cities.is_empty() {
            self.narrow_by_cities(spec, &candidates)
        } else if !spec.states.is_empty() {
            self.narrow_by_states(&spec.states, &candidates)
        } else {
            candidates
        }
    }

    /// Step one: keep places offering every requested amenity.
    ///
    /// A requested amenity id that resolves to no record can be
    /// offered by no place, so it empties the candidate set rather
    /// than erroring.
    fn amenity_candidates(&self, spec: &FilterSpec, places: Vec<Place>) -> Vec<Place> {
        if spec.amenities.is_empty() {
            return places;
        }
        places
            .into_iter()
            .filter(|place| {
                let offered: HashSet<String> = self
                    .resolver
                    .amenities_of_place(place)
                    .into_iter()
                    .map(|amenity| amenity.id)
                    .collect();
                spec.amenities.iter().all(|id| offered.contains(id))
            })
            .collect()
    }

    /// Step two, city branch: union of city matches and non-redundant
    /// state matches.
    fn narrow_by_cities(&self, spec: &FilterSpec, candidates: &[Place]) -> Vec<Place> {
        let mut hits = Hits::default();
        for city_id in &spec.cities {
            for place in candidates.iter().filter(|place| place.city_id == *city_id) {
                hits.push(place);
            }
        }
        for state_id in &spec.states {
            // The coverage test deliberately checks the requested city
            // list, not the amenity-pruned candidate set. See the type
            // docs for the consequences.
            if self.state_covers_requested_city(state_id, &spec.cities) {
                debug!("state {state_id} is covered by a requested city, skipping");
                continue;
            }
            for place in candidates {
                if self.state_of_place(place).as_deref() == Some(state_id.as_str()) {
                    hits.push(place);
                }
            }
        }
        hits.into_places()
    }

    /// Step two, state-only branch: union across the requested states.
    fn narrow_by_states(&self, state_ids: &[String], candidates: &[Place]) -> Vec<Place> {
        let mut hits = Hits::default();
        for state_id in state_ids {
            for place in candidates {
                if self.state_of_place(place).as_deref() == Some(state_id.as_str()) {
                    hits.push(place);
                }
            }
        }
        hits.into_places()
    }

    /// Whether one of the state's own cities is itself in the
    /// requested city list.
    ///
    /// A state id absent from the store covers nothing.
    fn state_covers_requested_city(&self, state_id: &str, requested: &[String]) -> bool {
        self.store.state(state_id).is_some_and(|state| {
            self.resolver
                .cities_of_state(&state)
                .iter()
                .any(|city| requested.contains(&city.id))
        })
    }

    /// The state id of a place's city, or `None` when the city record
    /// is gone.
    fn state_of_place(&self, place: &Place) -> Option<String> {
        match self.store.city(&place.city_id) {
            Some(city) => Some(city.state_id),
            None => {
                warn!(
                    "place {} references missing city {}, skipping in state narrowing",
                    place.id, place.city_id
                );
                None
            }
        }
    }
}

/// Accumulates matches in discovery order, deduplicated by place id.
#[derive(Default)]
struct Hits {
    seen: HashSet<String>,
    places: Vec<Place>,
}

impl Hits {
    fn push(&mut self, place: &Place) {
        if self.seen.insert(place.id.clone()) {
            self.places.push(place.clone());
        }
    }

    fn into_places(self) -> Vec<Place> {
        self.places
    }
}

#[cfg(test)]
mod tests {
    use lodgekit_core::{Amenity, City, MemoryStore, Place, State};
    use rstest::{fixture, rstest};

    use super::PlaceSearch;
    use crate::FilterSpec;

    fn ids(mut places: Vec<Place>) -> Vec<String> {
        places.sort_by(|a, b| a.id.cmp(&b.id));
        places.into_iter().map(|place| place.id).collect()
    }

    /// Two states; s1 owns c1 and c2, s2 owns c3. One place per city,
    /// with p1 the only place offering both wifi and parking.
    #[fixture]
    fn store() -> MemoryStore {
        let mut store = MemoryStore::default();
        store.insert_state(State::new("s1", "Oregon"));
        store.insert_state(State::new("s2", "Idaho"));
        store.insert_city(City::new("c1", "Portland", "s1"));
        store.insert_city(City::new("c2", "Eugene", "s1"));
        store.insert_city(City::new("c3", "Boise", "s2"));
        store.insert_amenity(Amenity::new("wifi", "wifi"));
        store.insert_amenity(Amenity::new("parking", "parking"));
        store.insert_place(Place::with_amenities(
            "p1",
            "c1",
            "u1",
            "Rose Loft",
            ["wifi", "parking"],
        ));
        store.insert_place(Place::with_amenities("p2", "c2", "u1", "Fern House", ["wifi"]));
        store.insert_place(Place::new("p3", "c3", "u2", "Sage Cabin"));
        store
    }

    fn spec(states: &[&str], cities: &[&str], amenities: &[&str]) -> FilterSpec {
        FilterSpec {
            states: states.iter().map(|s| (*s).to_owned()).collect(),
            cities: cities.iter().map(|s| (*s).to_owned()).collect(),
            amenities: amenities.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    #[rstest]
    fn redundant_state_is_skipped_entirely(store: MemoryStore) {
        // c1 belongs to s1, so naming both must not widen the result
        // back out to every s1 place.
        let hits = PlaceSearch::new(&store).search(&spec(&["s1"], &["c1"], &[]));
        assert_eq!(ids(hits), vec!["p1".to_owned()]);
    }

    #[rstest]
    fn non_redundant_state_still_contributes(store: MemoryStore) {
        let hits = PlaceSearch::new(&store).search(&spec(&["s2"], &["c1"], &[]));
        assert_eq!(ids(hits), vec!["p1".to_owned(), "p3".to_owned()]);
    }

    #[rstest]
    fn coverage_check_ignores_amenity_pruning(store: MemoryStore) {
        // Amenity pruning removes every c2 place, yet s1 still counts
        // as covered because c2 itself was requested, so p1 cannot
        // re-enter through the state. The empty result is the
        // documented sharp edge.
        let hits = PlaceSearch::new(&store).search(&spec(&["s1"], &["c2"], &["parking"]));
        assert!(hits.is_empty());
    }

    #[rstest]
    fn duplicate_filter_ids_do_not_duplicate_hits(store: MemoryStore) {
        let hits = PlaceSearch::new(&store).search(&spec(&[], &["c1", "c1"], &[]));
        assert_eq!(ids(hits), vec!["p1".to_owned()]);
    }

    #[rstest]
    fn city_and_state_union_is_deduplicated(store: MemoryStore) {
        // s2 is listed twice and is not covered by c2, so p3 is
        // discovered through the state loop twice; it must appear once.
        let hits = PlaceSearch::new(&store).search(&spec(&["s2", "s2"], &["c2"], &[]));
        assert_eq!(ids(hits), vec!["p2".to_owned(), "p3".to_owned()]);
    }

    #[rstest]
    fn place_with_missing_city_is_skipped_by_state_narrowing(mut store: MemoryStore) {
        store.insert_place(Place::new("p4", "c-gone", "u2", "Lost Hut"));
        let hits = PlaceSearch::new(&store).search(&spec(&["s1"], &[], &[]));
        assert_eq!(ids(hits), vec!["p1".to_owned(), "p2".to_owned()]);
    }

    #[rstest]
    fn dangling_state_id_contributes_nothing(store: MemoryStore) {
        let hits = PlaceSearch::new(&store).search(&spec(&["s-gone"], &["c3"], &[]));
        assert_eq!(ids(hits), vec!["p3".to_owned()]);
    }

    #[rstest]
    fn amenity_only_filter_passes_candidates_through(store: MemoryStore) {
        let hits = PlaceSearch::new(&store).search(&spec(&[], &[], &["wifi"]));
        assert_eq!(ids(hits), vec!["p1".to_owned(), "p2".to_owned()]);
    }
}
