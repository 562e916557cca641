//! Data access for booking entities.
//!
//! [`EntityStore`] is the read seam between the record layer and
//! everything that queries it. Implementations hand out owned
//! snapshots: a lookup clones the record and an enumeration clones as
//! it yields, so callers never borrow store internals across a search.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::{Amenity, City, Place, Review, State, User};

/// The entity types a store holds.
///
/// # Examples
/// ```
/// use lodgekit_core::EntityKind;
///
/// assert_eq!(EntityKind::Place.as_str(), "place");
/// assert_eq!(EntityKind::City.to_string(), "city");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// [`State`] records.
    State,
    /// [`City`] records.
    City,
    /// [`Amenity`] records.
    Amenity,
    /// [`User`] records.
    User,
    /// [`Place`] records.
    Place,
    /// [`Review`] records.
    Review,
}

impl EntityKind {
    /// Return the kind as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::City => "city",
            Self::Amenity => "amenity",
            Self::User => "user",
            Self::Place => "place",
            Self::Review => "review",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by store mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The targeted record does not exist.
    #[error("no {kind} with id {id}")]
    NotFound {
        /// Entity type of the missing record.
        kind: EntityKind,
        /// Identifier that failed to resolve.
        id: String,
    },
}

/// Read access to the full record set.
///
/// Lookups return `None` for unknown ids rather than failing, and
/// enumerations are snapshots taken at call time. Implementations must
/// be safe for concurrent reads; the search layer holds `&dyn
/// EntityStore` across a whole query.
///
/// # Examples
///
/// ```
/// use lodgekit_core::{EntityStore, MemoryStore, State};
///
/// let mut store = MemoryStore::default();
/// store.insert_state(State::new("s1", "Oregon"));
///
/// assert!(store.state("s1").is_some());
/// assert!(store.state("missing").is_none());
/// assert_eq!(store.states().count(), 1);
/// ```
pub trait EntityStore {
    /// Look up a state by id.
    fn state(&self, id: &str) -> Option<State>;
    /// Look up a city by id.
    fn city(&self, id: &str) -> Option<City>;
    /// Look up an amenity by id.
    fn amenity(&self, id: &str) -> Option<Amenity>;
    /// Look up a user by id.
    fn user(&self, id: &str) -> Option<User>;
    /// Look up a place by id.
    fn place(&self, id: &str) -> Option<Place>;
    /// Look up a review by id.
    fn review(&self, id: &str) -> Option<Review>;

    /// Enumerate every state.
    fn states(&self) -> Box<dyn Iterator<Item = State> + Send + '_>;
    /// Enumerate every city.
    fn cities(&self) -> Box<dyn Iterator<Item = City> + Send + '_>;
    /// Enumerate every amenity.
    fn amenities(&self) -> Box<dyn Iterator<Item = Amenity> + Send + '_>;
    /// Enumerate every user.
    fn users(&self) -> Box<dyn Iterator<Item = User> + Send + '_>;
    /// Enumerate every place.
    fn places(&self) -> Box<dyn Iterator<Item = Place> + Send + '_>;
    /// Enumerate every review.
    fn reviews(&self) -> Box<dyn Iterator<Item = Review> + Send + '_>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{EntityKind, StoreError};

    #[rstest]
    #[case(EntityKind::State, "state")]
    #[case(EntityKind::Amenity, "amenity")]
    #[case(EntityKind::Review, "review")]
    fn kind_display_matches_as_str(#[case] kind: EntityKind, #[case] expected: &str) {
        assert_eq!(kind.as_str(), expected);
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn not_found_names_kind_and_id() {
        let err = StoreError::NotFound {
            kind: EntityKind::Place,
            id: "p404".into(),
        };
        assert_eq!(err.to_string(), "no place with id p404");
    }
}
